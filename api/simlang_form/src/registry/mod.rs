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


use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};

use simlang_model::Value;
use tracing::debug;

use crate::{Form, Object, ReadError, Serializer};

/// Separator placed between an implicit namespace and a short type name.
pub const NAMESPACE_SEPARATOR: &str = "::";

/// Creates an instance of a registered type from its value representation.
pub type Constructor = fn(&Serializer, &Value) -> Result<Box<dyn Object>, ReadError>;

type WriteFn = Box<dyn Fn(&dyn Any, &Serializer) -> Value + Send + Sync>;
type ReadFn = Box<dyn Fn(&Serializer, &Value) -> Result<Box<dyn Any>, ReadError> + Send + Sync>;

/// A type that can be named by a type tag.
#[derive(Clone, Copy)]
pub struct TypeEntry {
    name: &'static str,
    type_id: TypeId,
    construct: Constructor,
}

impl TypeEntry {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn construct(
        &self,
        serializer: &Serializer,
        value: &Value,
    ) -> Result<Box<dyn Object>, ReadError> {
        (self.construct)(serializer, value)
    }
}

impl Debug for TypeEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeEntry")
            .field("name", &self.name)
            .field("type_id", &self.type_id)
            .finish()
    }
}

fn construct<T: Form>(serializer: &Serializer, value: &Value) -> Result<Box<dyn Object>, ReadError> {
    let instance: T = serializer.deserialize(value)?;
    Ok(Box::new(instance))
}

pub(crate) struct Converter {
    pub type_name: &'static str,
    pub write: WriteFn,
    pub read: ReadFn,
}

/// Registered types, implicit namespaces and custom converters for a [`Serializer`].
#[derive(Default)]
pub struct TypeRegistry {
    types: HashMap<&'static str, TypeEntry>,
    namespaces: Vec<String>,
    converters: HashMap<TypeId, Converter>,
}

impl Debug for TypeRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("types", &self.types.keys().collect::<Vec<_>>())
            .field("namespaces", &self.namespaces)
            .field(
                "converters",
                &self
                    .converters
                    .values()
                    .map(|c| c.type_name)
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl TypeRegistry {
    /// Make a type constructible from a type tag naming it.
    pub fn register<T: Form>(&mut self) {
        let name = T::type_tag();
        debug!(type_name = name, "Registering type.");
        self.types.insert(
            name,
            TypeEntry {
                name,
                type_id: TypeId::of::<T>(),
                construct: construct::<T>,
            },
        );
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Resolve a type tag: first as a full name, then prefixed by each implicit namespace in the
    /// order they were added.
    pub fn resolve(&self, tag: &str) -> Option<&TypeEntry> {
        self.types.get(tag).or_else(|| {
            self.namespaces
                .iter()
                .find_map(|namespace| self.types.get(format!("{}{}", namespace, tag).as_str()))
        })
    }

    /// The shortest tag that resolves back to the named type. This is the full name unless an
    /// implicit namespace applies.
    pub fn tag_for(&self, name: &str) -> String {
        self.namespaces
            .iter()
            .filter_map(|namespace| name.strip_prefix(namespace.as_str()))
            .filter(|short| {
                !short.is_empty() && self.resolve(short).map(TypeEntry::name) == Some(name)
            })
            .min_by_key(|short| short.len())
            .unwrap_or(name)
            .to_string()
    }

    /// Add a namespace that may be omitted from type tags. With `prepend_separator` the short
    /// name is expected to follow the prefix after a `::`.
    pub fn add_namespace(&mut self, prefix: &str, prepend_separator: bool) {
        let namespace = if prepend_separator {
            format!("{}{}", prefix, NAMESPACE_SEPARATOR)
        } else {
            prefix.to_string()
        };
        if !self.namespaces.contains(&namespace) {
            debug!(namespace = %namespace, "Adding implicit namespace.");
            self.namespaces.push(namespace);
        }
    }

    /// Remove a namespace, however it was added.
    pub fn remove_namespace(&mut self, prefix: &str) {
        let with_separator = format!("{}{}", prefix, NAMESPACE_SEPARATOR);
        self.namespaces.retain(|namespace| {
            let matched = namespace == prefix || *namespace == with_separator;
            if matched {
                debug!(namespace = %namespace, "Removing implicit namespace.");
            }
            !matched
        });
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &str> + '_ {
        self.namespaces.iter().map(String::as_str)
    }

    pub(crate) fn add_converter<T, W, R>(&mut self, write: W, read: R)
    where
        T: Any,
        W: Fn(&T, &Serializer) -> Value + Send + Sync + 'static,
        R: Fn(&Value, &Serializer) -> Result<T, ReadError> + Send + Sync + 'static,
    {
        let type_name = std::any::type_name::<T>();
        debug!(type_name, "Adding custom converter.");
        let erased_write: WriteFn =
            Box::new(move |any: &dyn Any, serializer: &Serializer| {
                match any.downcast_ref::<T>() {
                    Some(value) => write(value, serializer),
                    None => Value::Null,
                }
            });
        let erased_read: ReadFn = Box::new(move |serializer: &Serializer, value: &Value| {
            read(value, serializer).map(|instance| Box::new(instance) as Box<dyn Any>)
        });
        self.converters.insert(
            TypeId::of::<T>(),
            Converter {
                type_name,
                write: erased_write,
                read: erased_read,
            },
        );
    }

    pub(crate) fn remove_converter<T: Any>(&mut self) -> bool {
        let removed = self.converters.remove(&TypeId::of::<T>()).is_some();
        if removed {
            debug!(
                type_name = std::any::type_name::<T>(),
                "Removed custom converter."
            );
        }
        removed
    }

    pub(crate) fn converter(&self, type_id: TypeId) -> Option<&Converter> {
        self.converters.get(&type_id)
    }

    pub fn has_converter<T: Any>(&self) -> bool {
        self.converters.contains_key(&TypeId::of::<T>())
    }
}
