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

use std::fmt::{Display, Formatter};

use simlang_model::{Value, ValueKind};
use thiserror::Error;

/// Kinds accepted by numeric targets.
pub const NUMERIC: &[ValueKind] = &[ValueKind::Int64, ValueKind::UInt64, ValueKind::Float64];

/// Errors that can occur when reading a typed value from the value model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    #[error("Unexpected value kind: {actual}, expected: {}.", Kinds(.expected))]
    UnexpectedKind {
        actual: ValueKind,
        expected: &'static [ValueKind],
    },
    #[error("Expected a single character but found {0:?}.")]
    InvalidCharacter(String),
    #[error("'{member}' is not a member of {enumeration}.")]
    UnknownMember {
        enumeration: &'static str,
        member: String,
    },
    #[error("No registered type matches the tag '{0}'.")]
    UnknownType(String),
    #[error("A type tag is required to read a value of {expected}.")]
    MissingTypeTag { expected: &'static str },
    #[error("A value of {found} cannot be assigned to {expected}.")]
    NotAssignable {
        found: &'static str,
        expected: &'static str,
    },
    #[error("Expected {expected} elements but found {actual}.")]
    WrongLength { expected: usize, actual: usize },
    #[error("{0}")]
    Message(String),
}

impl ReadError {
    pub fn unexpected_kind(expected: &'static [ValueKind], actual: &Value) -> Self {
        ReadError::UnexpectedKind {
            actual: actual.kind(),
            expected,
        }
    }

    pub fn message<S: Into<String>>(message: S) -> Self {
        ReadError::Message(message.into())
    }
}

struct Kinds<'a>(&'a [ValueKind]);

impl<'a> Display for Kinds<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            [] => f.write_str("nothing"),
            [single] => write!(f, "{}", single),
            [first, rest @ ..] => {
                write!(f, "one of [{}", first)?;
                for kind in rest {
                    write!(f, ", {}", kind)?;
                }
                f.write_str("]")
            }
        }
    }
}
