// Copyright 2015-2024 Swim Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::{Debug, Formatter};

use simlang_model::Value;

/// The key of the map entry that names the concrete type of a polymorphic value.
pub const DEFAULT_TYPE_TOKEN: &str = "#type";

/// Invoked with the offending key and the name of the target type when a map entry does not
/// match any writable member.
pub type SpuriousDataCallback = Box<dyn Fn(&Value, &str) + Send + Sync>;

/// Invoked with the tag when a type tag does not resolve to a registered type.
pub type UnknownTypeCallback = Box<dyn Fn(&str) + Send + Sync>;

/// How enumeration members are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnumSerialization {
    /// As the numeric value of the member.
    #[default]
    AsNumber,
    /// As the lower-cased member name.
    AsSimpleName,
}

/// Options consulted by a [`crate::Serializer`] at the start of each call.
pub struct SerializerOptions {
    /// Omit record members equal to the corresponding member of the record's default instance.
    pub skip_default_values: bool,
    pub enum_serialization: EnumSerialization,
    /// Map key holding the type tag of a polymorphic value.
    pub type_token: String,
    pub on_spurious_data: Option<SpuriousDataCallback>,
    pub on_unknown_type: Option<UnknownTypeCallback>,
}

impl Default for SerializerOptions {
    fn default() -> Self {
        SerializerOptions {
            skip_default_values: true,
            enum_serialization: EnumSerialization::default(),
            type_token: DEFAULT_TYPE_TOKEN.to_string(),
            on_spurious_data: None,
            on_unknown_type: None,
        }
    }
}

impl Debug for SerializerOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerializerOptions")
            .field("skip_default_values", &self.skip_default_values)
            .field("enum_serialization", &self.enum_serialization)
            .field("type_token", &self.type_token)
            .field("on_spurious_data", &self.on_spurious_data.is_some())
            .field("on_unknown_type", &self.on_unknown_type.is_some())
            .finish()
    }
}

impl SerializerOptions {
    pub fn with_skip_default_values(mut self, skip: bool) -> Self {
        self.skip_default_values = skip;
        self
    }

    pub fn with_enum_serialization(mut self, mode: EnumSerialization) -> Self {
        self.enum_serialization = mode;
        self
    }

    pub fn with_type_token<S: Into<String>>(mut self, token: S) -> Self {
        self.type_token = token.into();
        self
    }

    pub fn with_spurious_data_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Value, &str) + Send + Sync + 'static,
    {
        self.on_spurious_data = Some(Box::new(callback));
        self
    }

    pub fn with_unknown_type_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_unknown_type = Some(Box::new(callback));
        self
    }
}
