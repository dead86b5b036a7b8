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

use simlang_model::{Value, ValueKind};

use crate::{EnumSerialization, Form, ReadError, Serializer};

/// A fieldless enumeration with a numeric value for each member.
pub trait Enumeration: Form + Copy + Eq {
    const MEMBERS: &'static [Self];

    fn ordinal(self) -> i64;

    fn member_name(self) -> &'static str;

    fn from_ordinal(ordinal: i64) -> Option<Self> {
        Self::MEMBERS
            .iter()
            .copied()
            .find(|member| member.ordinal() == ordinal)
    }

    /// Find a member by name, ignoring case and any non-alphanumeric characters.
    fn from_member_name(name: &str) -> Option<Self> {
        let normalized = normalize_member_name(name);
        Self::MEMBERS
            .iter()
            .copied()
            .find(|member| normalize_member_name(member.member_name()) == normalized)
    }
}

/// Lower case with everything but letters and digits removed.
///
/// ```
/// use simlang_form::normalize_member_name;
///
/// assert_eq!(normalize_member_name("f-o-rty-t-w-o"), "fortytwo");
/// assert_eq!(normalize_member_name("FortyTwo"), "fortytwo");
/// ```
pub fn normalize_member_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

pub fn write_enumeration<E: Enumeration>(serializer: &Serializer, member: E) -> Value {
    match serializer.options.enum_serialization {
        EnumSerialization::AsNumber => Value::Int64(member.ordinal()),
        EnumSerialization::AsSimpleName => Value::text(member.member_name().to_lowercase()),
    }
}

/// Members are accepted as numbers or names, whichever mode they were written in.
pub fn read_enumeration<E: Enumeration>(value: &Value) -> Result<E, ReadError> {
    let member = match value {
        Value::Int64(n) => E::from_ordinal(*n).ok_or_else(|| n.to_string()),
        Value::UInt64(n) => i64::try_from(*n)
            .ok()
            .and_then(E::from_ordinal)
            .ok_or_else(|| n.to_string()),
        Value::Float64(x) => E::from_ordinal(*x as i64).ok_or_else(|| x.to_string()),
        Value::String(name) => E::from_member_name(name).ok_or_else(|| name.clone()),
        other => {
            return Err(ReadError::unexpected_kind(
                &[
                    ValueKind::Int64,
                    ValueKind::UInt64,
                    ValueKind::Float64,
                    ValueKind::String,
                ],
                other,
            ))
        }
    };
    member.map_err(|member| ReadError::UnknownMember {
        enumeration: E::type_tag(),
        member,
    })
}

/// Define a fieldless enumeration that implements [`Enumeration`] and [`Form`]. Members may have
/// explicit values. The member with value zero (or the first member, if there is none) is the
/// [`Default`].
///
/// ```
/// use simlang_form::{enumeration, EnumSerialization, Serializer, SerializerOptions};
/// use simlang_form::model::Value;
///
/// enumeration! {
///     pub enum Answer {
///         Zero = 0,
///         One = 1,
///         FortyTwo = 42,
///     }
/// }
///
/// let by_number = Serializer::new();
/// assert_eq!(by_number.serialize(&Answer::FortyTwo), Value::Int64(42));
///
/// let by_name = Serializer::with_options(
///     SerializerOptions::default().with_enum_serialization(EnumSerialization::AsSimpleName),
/// );
/// assert_eq!(by_name.serialize(&Answer::FortyTwo), Value::text("fortytwo"));
/// assert_eq!(by_name.deserialize::<Answer>(&Value::text("forty-two")), Ok(Answer::FortyTwo));
/// assert_eq!(Answer::default(), Answer::Zero);
/// ```
#[macro_export]
macro_rules! enumeration {
    ($(#[$meta:meta])* $vis:vis enum $name:ident { $($member:ident $(= $ordinal:expr)?),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $($member $(= $ordinal)?),+
        }

        impl $crate::Enumeration for $name {
            const MEMBERS: &'static [Self] = &[$($name::$member),+];

            fn ordinal(self) -> i64 {
                self as i64
            }

            fn member_name(self) -> &'static str {
                match self {
                    $($name::$member => stringify!($member)),+
                }
            }
        }

        impl ::std::default::Default for $name {
            fn default() -> Self {
                let members = <Self as $crate::Enumeration>::MEMBERS;
                members
                    .iter()
                    .copied()
                    .find(|member| $crate::Enumeration::ordinal(*member) == 0)
                    .unwrap_or(members[0])
            }
        }

        impl $crate::Form for $name {
            fn write_with(&self, serializer: &$crate::Serializer) -> $crate::model::Value {
                $crate::write_enumeration(serializer, *self)
            }

            fn read_with(
                _serializer: &$crate::Serializer,
                value: &$crate::model::Value,
            ) -> ::std::result::Result<Self, $crate::ReadError> {
                $crate::read_enumeration(value)
            }

            fn view(&self) -> $crate::View<'_> {
                $crate::View::Scalar(self)
            }

            fn type_tag() -> &'static str {
                concat!(module_path!(), "::", stringify!($name))
            }
        }
    };
}
