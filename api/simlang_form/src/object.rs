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

use simlang_model::Value;

use crate::{Form, Serializer, View};

/// A type-erased [`Form`] value. Every `Form` type is an `Object`; trait objects over it are used
/// for dynamically typed slots, registry construction and deep comparison.
///
/// Note that `Box<dyn Object>` is itself a `Form` (and so an `Object`). To reach the boxed value,
/// dereference the box before calling these methods.
pub trait Object: Any {
    /// The full name of the concrete type.
    fn type_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    fn as_object(&self) -> &dyn Object;

    /// Write the value without consulting custom converters.
    fn write_object(&self, serializer: &Serializer) -> Value;

    fn shape(&self) -> View<'_>;
}

impl<T: Form> Object for T {
    fn type_name(&self) -> &'static str {
        T::type_tag()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn as_object(&self) -> &dyn Object {
        self
    }

    fn write_object(&self, serializer: &Serializer) -> Value {
        self.write_with(serializer)
    }

    fn shape(&self) -> View<'_> {
        self.view()
    }
}

static_assertions::assert_obj_safe!(Object);
