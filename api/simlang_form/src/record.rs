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

use crate::{deep_equals, Form, Member, ReadError, Serializer, View};

/// Reads a member of a record.
pub type Getter<T> = for<'a> fn(&'a T) -> Member<'a>;

/// Writes a member of a record from its value representation.
pub type Setter<T> = fn(&mut T, &Serializer, &Value) -> Result<(), ReadError>;

/// Describes one public member of a record.
pub struct Field<T> {
    name: &'static str,
    getter: Option<Getter<T>>,
    setter: Option<Setter<T>>,
}

impl<T> Field<T> {
    /// A member that is both written and read by the serializer.
    pub fn read_write(name: &'static str, getter: Getter<T>, setter: Setter<T>) -> Self {
        Field {
            name,
            getter: Some(getter),
            setter: Some(setter),
        }
    }

    /// A computed member. It takes part in comparisons but is never serialized.
    pub fn read_only(name: &'static str, getter: Getter<T>) -> Self {
        Field {
            name,
            getter: Some(getter),
            setter: None,
        }
    }

    /// A member that can be populated when reading but is never written.
    pub fn write_only(name: &'static str, setter: Setter<T>) -> Self {
        Field {
            name,
            getter: None,
            setter: Some(setter),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Only members with both accessors are written.
    pub fn is_serialized(&self) -> bool {
        self.getter.is_some() && self.setter.is_some()
    }
}

/// A structured type described by a list of its public members. Records are written as maps
/// keyed by member name. Reading starts from the [`Default`] instance, so members missing from
/// the input keep their default values; when default elision is enabled, members equal to the
/// corresponding member of the default instance are omitted on writing.
///
/// The [`record!`](crate::record) macro implements this trait and [`Form`] for plain structs.
pub trait Record: Form + Default {
    fn fields() -> Vec<Field<Self>>;
}

pub fn write_record<T: Record>(serializer: &Serializer, record: &T) -> Value {
    let defaults = if serializer.options.skip_default_values {
        Some(T::default())
    } else {
        None
    };
    let mut entries = vec![];
    for field in T::fields() {
        let getter = match (field.getter, field.setter) {
            (Some(getter), Some(_)) => getter,
            _ => continue,
        };
        let member = getter(record);
        let is_default = defaults
            .as_ref()
            .map_or(false, |defaults| deep_equals(member.get(), getter(defaults).get()));
        if !is_default {
            entries.push((
                Value::text(field.name),
                serializer.serialize_object(member.get()),
            ));
        }
    }
    Value::Map(entries)
}

pub fn read_record<T: Record>(serializer: &Serializer, value: &Value) -> Result<T, ReadError> {
    let entries = match value {
        Value::Map(entries) => entries,
        other => return Err(ReadError::unexpected_kind(&[ValueKind::Map], other)),
    };
    let fields = T::fields();
    let mut record = T::default();
    for (key, item) in entries {
        if serializer.is_type_token(key) {
            continue;
        }
        let setter = key
            .as_str()
            .and_then(|name| fields.iter().find(|field| field.name == name))
            .and_then(|field| field.setter);
        match setter {
            Some(setter) => setter(&mut record, serializer, item)?,
            None => serializer.report_spurious_data(key, T::type_tag()),
        }
    }
    Ok(record)
}

/// Every readable member, including computed ones.
pub fn view_record<T: Record>(record: &T) -> View<'_> {
    View::Members(
        T::fields()
            .into_iter()
            .filter_map(|field| field.getter.map(|getter| (field.name, getter(record))))
            .collect(),
    )
}

/// Implement [`Record`] and [`Form`] for a struct with named fields. Every listed field must be a
/// [`Form`] and the struct must implement [`Default`]. Computed members may follow in a
/// `read_only` block; they are compared by [`crate::deep_equals`] but never serialized.
///
/// ```
/// use simlang_form::{deep_equals, record, Serializer};
/// use simlang_form::model::map;
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Entry {
///     name: String,
///     quantity: i32,
/// }
///
/// record!(Entry { name, quantity } read_only { is_empty(this) => this.quantity == 0 });
///
/// let serializer = Serializer::new();
/// let entry = Entry { name: "Arrows".to_string(), quantity: 3 };
/// assert_eq!(serializer.serialize(&entry), map! { "name" => "Arrows", "quantity" => 3i64 });
///
/// let empty = Entry { name: "Quiver".to_string(), quantity: 0 };
/// assert_eq!(serializer.serialize(&empty), map! { "name" => "Quiver" });
/// assert!(!deep_equals(&entry, &empty));
/// ```
#[macro_export]
macro_rules! record {
    ($name:ident { $($field:ident),* $(,)? } $(read_only { $($member:ident($this:ident) => $value:expr),* $(,)? })?) => {
        impl $crate::Record for $name {
            fn fields() -> ::std::vec::Vec<$crate::Field<Self>> {
                ::std::vec![
                    $(
                        $crate::Field::read_write(
                            stringify!($field),
                            {
                                fn get(this: &$name) -> $crate::Member<'_> {
                                    $crate::Member::Borrowed(&this.$field)
                                }
                                get
                            },
                            {
                                fn set(
                                    this: &mut $name,
                                    serializer: &$crate::Serializer,
                                    value: &$crate::model::Value,
                                ) -> ::std::result::Result<(), $crate::ReadError> {
                                    this.$field = serializer.deserialize(value)?;
                                    ::std::result::Result::Ok(())
                                }
                                set
                            },
                        ),
                    )*
                    $($(
                        $crate::Field::read_only(
                            stringify!($member),
                            {
                                fn get($this: &$name) -> $crate::Member<'_> {
                                    $crate::Member::computed($value)
                                }
                                get
                            },
                        ),
                    )*)?
                ]
            }
        }

        impl $crate::Form for $name {
            fn write_with(&self, serializer: &$crate::Serializer) -> $crate::model::Value {
                $crate::write_record(serializer, self)
            }

            fn read_with(
                serializer: &$crate::Serializer,
                value: &$crate::model::Value,
            ) -> ::std::result::Result<Self, $crate::ReadError> {
                $crate::read_record(serializer, value)
            }

            fn view(&self) -> $crate::View<'_> {
                $crate::view_record(self)
            }

            fn type_tag() -> &'static str {
                concat!(module_path!(), "::", stringify!($name))
            }
        }
    };
}
