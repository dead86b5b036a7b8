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

use std::any::Any;

use simlang_model::{Value, ValueKind};

use crate::{Dictionary, Form, Object, ReadError, Serializer, View};

/// A map read with no statically known type where at least one value was reconstructed as a
/// registered type. Keys are kept untyped.
#[derive(Default)]
pub struct DynamicMap(pub Vec<(Value, Box<dyn Object>)>);

impl DynamicMap {
    pub fn get(&self, key: &str) -> Option<&dyn Object> {
        self.0
            .iter()
            .find(|(k, _)| k.as_str() == Some(key))
            .map(|(_, value)| &**value)
    }
}

impl Form for DynamicMap {
    fn write_with(&self, serializer: &Serializer) -> Value {
        Value::Map(
            self.0
                .iter()
                .map(|(key, value)| (key.clone(), serializer.serialize(value)))
                .collect(),
        )
    }

    fn read_with(serializer: &Serializer, value: &Value) -> Result<Self, ReadError> {
        match value {
            Value::Map(entries) => entries
                .iter()
                .map(|(key, value)| Ok((key.clone(), serializer.deserialize_dynamic(value)?)))
                .collect::<Result<Vec<_>, ReadError>>()
                .map(DynamicMap),
            other => Err(ReadError::unexpected_kind(&[ValueKind::Map], other)),
        }
    }

    fn view(&self) -> View<'_> {
        View::Dictionary(self)
    }
}

impl Dictionary for DynamicMap {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&dyn Object, &dyn Object)> + '_> {
        Box::new(
            self.0
                .iter()
                .map(|(k, v)| (k as &dyn Object, &**v as &dyn Object)),
        )
    }

    fn lookup(&self, key: &dyn Object) -> Option<&dyn Object> {
        let key = key.as_any().downcast_ref::<Value>()?;
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| &**value as &dyn Object)
    }
}

/// Whether a dynamically read value is one that a [`Value`] already represents.
pub(crate) fn is_untyped(object: &dyn Object) -> bool {
    let any: &dyn Any = object.as_any();
    any.is::<Value>()
        || any.is::<bool>()
        || any.is::<i64>()
        || any.is::<u64>()
        || any.is::<f64>()
        || any.is::<String>()
}

/// Whether a value written into a dynamic slot should go without a type tag.
pub(crate) fn is_untyped_container(object: &dyn Object) -> bool {
    let any: &dyn Any = object.as_any();
    any.is::<Value>() || any.is::<DynamicMap>()
}
