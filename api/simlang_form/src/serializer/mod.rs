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

mod options;

pub use options::{
    EnumSerialization, SerializerOptions, SpuriousDataCallback, UnknownTypeCallback,
    DEFAULT_TYPE_TOKEN,
};

use std::any::{Any, TypeId};

use simlang_model::{Value, ValueKind};
use static_assertions::assert_impl_all;
use tracing::{debug, trace};

use crate::dynamic::{is_untyped, is_untyped_container};
use crate::registry::TypeRegistry;
use crate::{DynamicMap, Form, Object, Polymorphic, ReadError};

/// Converts between typed values and the value model. A serializer owns its options, its
/// registered types, implicit namespaces and custom converters. None of these are synchronized;
/// mutate them between calls, not during one.
///
/// ```
/// use simlang_form::Serializer;
/// use simlang_form::model::Value;
///
/// let serializer = Serializer::new();
/// assert_eq!(serializer.serialize(&7u8), Value::UInt64(7));
/// assert_eq!(serializer.serialize(&-7i16), Value::Int64(-7));
/// assert_eq!(serializer.deserialize::<i16>(&Value::Int64(-7)), Ok(-7));
/// ```
#[derive(Debug, Default)]
pub struct Serializer {
    pub options: SerializerOptions,
    registry: TypeRegistry,
}

assert_impl_all!(Serializer: Send, Sync);

impl Serializer {
    pub fn new() -> Self {
        Serializer::default()
    }

    pub fn with_options(options: SerializerOptions) -> Self {
        Serializer {
            options,
            registry: TypeRegistry::default(),
        }
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut TypeRegistry {
        &mut self.registry
    }

    /// Make a type constructible from type tags naming it.
    pub fn register<T: Form>(&mut self) -> &mut Self {
        self.registry.register::<T>();
        self
    }

    pub fn add_implicit_namespace(&mut self, prefix: &str, prepend_separator: bool) {
        self.registry.add_namespace(prefix, prepend_separator);
    }

    pub fn remove_implicit_namespace(&mut self, prefix: &str) {
        self.registry.remove_namespace(prefix);
    }

    /// Replace the handling of `T` (at every level of nesting) with a pair of functions.
    /// Registering a second converter for the same type replaces the first.
    pub fn add_custom_converter<T, W, R>(&mut self, write: W, read: R)
    where
        T: Any,
        W: Fn(&T, &Serializer) -> Value + Send + Sync + 'static,
        R: Fn(&Value, &Serializer) -> Result<T, ReadError> + Send + Sync + 'static,
    {
        self.registry.add_converter(write, read);
    }

    /// Returns whether a converter was removed.
    pub fn remove_custom_converter<T: Any>(&mut self) -> bool {
        self.registry.remove_converter::<T>()
    }

    /// Represent a value in the value model.
    pub fn serialize<T: Form>(&self, value: &T) -> Value {
        self.serialize_object(value)
    }

    /// Represent a value in the value model, naming its type in a tag if it is written as a map.
    pub fn serialize_tagged<T: Form>(&self, value: &T) -> Value {
        self.serialize_polymorphic(value)
    }

    /// Represent a type-erased value in the value model.
    pub fn serialize_object(&self, value: &dyn Object) -> Value {
        match self.registry.converter(Any::type_id(value.as_any())) {
            Some(converter) => {
                trace!(type_name = converter.type_name, "Writing with custom converter.");
                (converter.write)(value.as_any(), self)
            }
            None => value.write_object(self),
        }
    }

    /// Represent a value whose type cannot be known statically where it is read. Maps are tagged
    /// with the shortest name that resolves back to the type. Untyped maps are written as they
    /// are.
    pub fn serialize_polymorphic(&self, value: &dyn Object) -> Value {
        match self.serialize_object(value) {
            Value::Map(entries) if is_untyped_container(value) => Value::Map(entries),
            Value::Map(mut entries) => {
                let token = self.options.type_token.as_str();
                entries.retain(|(key, _)| key.as_str() != Some(token));
                let tag = self.registry.tag_for(value.type_name());
                entries.insert(0, (Value::text(token), Value::text(tag)));
                Value::Map(entries)
            }
            other => other,
        }
    }

    /// Read a typed value.
    pub fn deserialize<T: Form>(&self, value: &Value) -> Result<T, ReadError> {
        match self.registry.converter(TypeId::of::<T>()) {
            Some(converter) => {
                trace!(type_name = converter.type_name, "Reading with custom converter.");
                let instance = (converter.read)(self, value)?;
                instance
                    .downcast::<T>()
                    .map(|instance| *instance)
                    .map_err(|_| ReadError::NotAssignable {
                        found: converter.type_name,
                        expected: T::type_tag(),
                    })
            }
            None => T::read_with(self, value),
        }
    }

    /// Read a value with no statically known type. Scalars keep their own types and maps with a
    /// registered type tag become instances of that type. Lists and untagged maps are read
    /// element by element: if any element becomes a registered type the container is a
    /// `Vec<Box<dyn Object>>` or a [`DynamicMap`], otherwise it is kept as a [`Value`].
    pub fn deserialize_dynamic(&self, value: &Value) -> Result<Box<dyn Object>, ReadError> {
        let object: Box<dyn Object> = match value {
            Value::Null => Box::new(Value::Null),
            Value::Bool(b) => Box::new(*b),
            Value::Int64(n) => Box::new(*n),
            Value::UInt64(n) => Box::new(*n),
            Value::Float64(x) => Box::new(*x),
            Value::String(s) => Box::new(s.clone()),
            Value::List(items) => {
                let elements = items
                    .iter()
                    .map(|item| self.deserialize_dynamic(item))
                    .collect::<Result<Vec<_>, _>>()?;
                if elements.iter().all(|element| is_untyped(&**element)) {
                    Box::new(value.clone())
                } else {
                    Box::new(elements)
                }
            }
            Value::Map(entries) => match self.type_tag_of(value) {
                Some(tag) => match self.registry.resolve(tag) {
                    Some(entry) => {
                        trace!(tag, type_name = entry.name(), "Resolved type tag.");
                        entry.construct(self, value)?
                    }
                    None => {
                        self.report_unknown_type(tag);
                        Box::new(value.clone())
                    }
                },
                None => {
                    let map = entries
                        .iter()
                        .map(|(key, item)| Ok((key.clone(), self.deserialize_dynamic(item)?)))
                        .collect::<Result<Vec<_>, ReadError>>()?;
                    if map.iter().all(|(_, item)| is_untyped(&**item)) {
                        Box::new(value.clone())
                    } else {
                        Box::new(DynamicMap(map))
                    }
                }
            },
        };
        Ok(object)
    }

    /// Read a value into a trait object slot. The map must carry a type tag naming a registered
    /// type that the slot accepts.
    pub fn deserialize_polymorphic<P>(&self, value: &Value) -> Result<Box<P>, ReadError>
    where
        P: Polymorphic + ?Sized,
    {
        if !matches!(value, Value::Map(_)) {
            return Err(ReadError::unexpected_kind(&[ValueKind::Map], value));
        }
        let tag = self.type_tag_of(value).ok_or(ReadError::MissingTypeTag {
            expected: P::slot_name(),
        })?;
        match self.registry.resolve(tag) {
            Some(entry) => {
                trace!(tag, type_name = entry.name(), "Resolved type tag.");
                P::from_object(entry.construct(self, value)?)
            }
            None => {
                self.report_unknown_type(tag);
                Err(ReadError::UnknownType(tag.to_string()))
            }
        }
    }

    /// Copy a value by writing it and reading it back.
    pub fn deep_clone<T: Form>(&self, value: &T) -> Result<T, ReadError> {
        self.deserialize(&self.serialize(value))
    }

    fn type_tag_of<'a>(&self, value: &'a Value) -> Option<&'a str> {
        value
            .get_field(&self.options.type_token)
            .and_then(Value::as_str)
    }

    pub(crate) fn is_type_token(&self, key: &Value) -> bool {
        key.as_str() == Some(self.options.type_token.as_str())
    }

    pub(crate) fn report_spurious_data(&self, key: &Value, type_name: &str) {
        debug!(key = ?key, type_name, "Ignoring entry with no matching member.");
        if let Some(callback) = &self.options.on_spurious_data {
            callback(key, type_name);
        }
    }

    pub(crate) fn report_unknown_type(&self, tag: &str) {
        debug!(tag, "Type tag does not name a registered type.");
        if let Some(callback) = &self.options.on_unknown_type {
            callback(tag);
        }
    }
}
