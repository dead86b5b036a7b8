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

//! # SimLang serialization
//!
//! This crate contains the [`Form`] trait that describes how a type is transformed to and from
//! the SimLang value model (described in [`simlang_model`]) and the [`Serializer`] that drives
//! those transformations. `Form` is implemented for the primitive types, strings, date-times and
//! the common standard library collections. Structures and enumerations opt in with the
//! [`record!`] and [`enumeration!`] macros and trait objects with [`polymorphic!`].
//!
//! Every `Form` value can also be treated as a type-erased [`Object`], which is what allows the
//! [`deep_equals`] predicate to compare arbitrary pairs of values with strict nominal typing.
//!
//! ```
//! use simlang_form::{record, Serializer};
//! use simlang_form::model::map;
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Info {
//!     name: String,
//!     age: i32,
//! }
//!
//! record!(Info { name, age });
//!
//! let serializer = Serializer::new();
//! let info = Info { name: "Bob the Wizard".to_string(), age: 100 };
//! let value = serializer.serialize(&info);
//! assert_eq!(value, map! { "name" => "Bob the Wizard", "age" => 100i64 });
//! assert_eq!(serializer.deserialize::<Info>(&value), Ok(info));
//! ```

use std::any::Any;

#[doc(hidden)]
pub use simlang_model as model;

use simlang_model::Value;

mod compare;
mod dynamic;
mod enumeration;
mod error;
mod impls;
mod object;
mod polymorphic;
mod record;
mod registry;
mod serializer;

#[cfg(test)]
mod tests;

pub use compare::{deep_equals, Dictionary, Member, Membership, Scalar, View};
pub use dynamic::DynamicMap;
pub use enumeration::{normalize_member_name, read_enumeration, write_enumeration, Enumeration};
pub use error::{ReadError, NUMERIC};
pub use object::Object;
pub use polymorphic::Polymorphic;
pub use record::{read_record, view_record, write_record, Field, Getter, Record, Setter};
pub use registry::{Constructor, TypeEntry, TypeRegistry, NAMESPACE_SEPARATOR};
pub use serializer::{
    EnumSerialization, Serializer, SerializerOptions, SpuriousDataCallback, UnknownTypeCallback,
    DEFAULT_TYPE_TOKEN,
};

/// A `Form` transforms between a Rust value and the SimLang value model. Implementations should
/// write and read any nested values through the [`Serializer`] (rather than calling `Form`
/// methods on them directly) so that custom converters and options apply at every level.
pub trait Form: Any + Sized {
    /// Represent this value in the value model.
    fn write_with(&self, serializer: &Serializer) -> Value;

    /// Attempt to create an instance from a value.
    fn read_with(serializer: &Serializer, value: &Value) -> Result<Self, ReadError>;

    /// The structure of this value, as seen by [`deep_equals`].
    fn view(&self) -> View<'_>;

    /// The full name of the type, used in type tags and registry lookups.
    fn type_tag() -> &'static str {
        std::any::type_name::<Self>()
    }
}
