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

//! # SimLang
//!
//! Typed serialization to and from the SimFile text format. A [`Serializer`] maps Rust values to
//! the value model and back; the SimFile parser and printer map the value model to and from
//! text. The functions in this crate compose the two for whole documents.
//!
//! ```
//! use simlang::{from_simfile, record, to_simfile, Serializer};
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
//! let text = to_simfile(&serializer, &info);
//! assert_eq!(text, "{ name \"Bob the Wizard\" age 100 }");
//! assert_eq!(from_simfile::<Info>(&serializer, &text), Ok(info));
//! ```

use thiserror::Error;
use tracing::trace;

#[doc(inline)]
pub use simlang_model as model;

pub use simlang_form::{
    deep_equals, enumeration, polymorphic, record, DynamicMap, EnumSerialization, Form, Object,
    ReadError, Serializer, SerializerOptions,
};
pub use simlang_simfile::{ParseError, PrintOptions};

/// Mapping between typed values and the value model.
pub mod form {
    pub use simlang_form::{
        normalize_member_name, read_enumeration, read_record, view_record, write_enumeration,
        write_record, Constructor, Dictionary, Enumeration, Field, Getter, Member, Membership,
        Polymorphic, Record, Scalar, Setter, SpuriousDataCallback, TypeEntry, TypeRegistry,
        UnknownTypeCallback, View, DEFAULT_TYPE_TOKEN, NAMESPACE_SEPARATOR, NUMERIC,
    };
}

/// The SimFile text format.
pub mod simfile {
    pub use simlang_simfile::{
        parse, print, print_simfile, print_simfile_with, print_with, Container, Location,
        ParseError, PrintOptions, Span,
    };
}

/// Errors that can occur when reading a typed value from SimFile text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Invalid SimFile document: {0}")]
    Parse(#[from] ParseError),
    #[error("Document does not match the expected type: {0}")]
    Read(#[from] ReadError),
}

/// Serialize a value and print it as SimFile text with the default print options.
pub fn to_simfile<T: Form>(serializer: &Serializer, value: &T) -> String {
    to_simfile_with(serializer, value, PrintOptions::default())
}

pub fn to_simfile_with<T: Form>(serializer: &Serializer, value: &T, options: PrintOptions) -> String {
    simlang_simfile::print_with(&serializer.serialize(value), options)
}

/// Parse SimFile text and read it as a value of type `T`.
pub fn from_simfile<T: Form>(serializer: &Serializer, text: &str) -> Result<T, Error> {
    let value = simlang_simfile::parse(text)?;
    trace!(kind = %value.kind(), target = T::type_tag(), "Parsed document.");
    Ok(serializer.deserialize(&value)?)
}

/// Parse SimFile text without a statically known target type. Documents that are maps tagged
/// with a registered type are read as that type.
pub fn from_simfile_dynamic(serializer: &Serializer, text: &str) -> Result<Box<dyn Object>, Error> {
    let value = simlang_simfile::parse(text)?;
    trace!(kind = %value.kind(), "Parsed document.");
    Ok(serializer.deserialize_dynamic(&value)?)
}
