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

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::Hash;

use chrono::{DateTime, TimeZone, Utc};
use simlang_model::{Value, ValueKind};

use crate::error::NUMERIC;
use crate::{Form, Object, ReadError, Serializer, View};

macro_rules! numeric_forms {
    ($($t:ty),*) => {
        $(
            impl Form for $t {
                fn write_with(&self, _serializer: &Serializer) -> Value {
                    Value::from(*self)
                }

                fn read_with(_serializer: &Serializer, value: &Value) -> Result<Self, ReadError> {
                    match value {
                        Value::Int64(n) => Ok(*n as $t),
                        Value::UInt64(n) => Ok(*n as $t),
                        Value::Float64(x) => Ok(*x as $t),
                        other => Err(ReadError::unexpected_kind(NUMERIC, other)),
                    }
                }

                fn view(&self) -> View<'_> {
                    View::Scalar(self)
                }
            }
        )*
    };
}

numeric_forms!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl Form for bool {
    fn write_with(&self, _serializer: &Serializer) -> Value {
        Value::Bool(*self)
    }

    fn read_with(_serializer: &Serializer, value: &Value) -> Result<Self, ReadError> {
        match value {
            Value::Bool(b) => Ok(*b),
            other => Err(ReadError::unexpected_kind(&[ValueKind::Bool], other)),
        }
    }

    fn view(&self) -> View<'_> {
        View::Scalar(self)
    }
}

impl Form for char {
    fn write_with(&self, _serializer: &Serializer) -> Value {
        Value::String(self.to_string())
    }

    fn read_with(_serializer: &Serializer, value: &Value) -> Result<Self, ReadError> {
        match value {
            Value::String(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(c),
                    _ => Err(ReadError::InvalidCharacter(s.clone())),
                }
            }
            other => Err(ReadError::unexpected_kind(&[ValueKind::String], other)),
        }
    }

    fn view(&self) -> View<'_> {
        View::Scalar(self)
    }
}

impl Form for String {
    fn write_with(&self, _serializer: &Serializer) -> Value {
        Value::String(self.clone())
    }

    fn read_with(_serializer: &Serializer, value: &Value) -> Result<Self, ReadError> {
        match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(ReadError::unexpected_kind(&[ValueKind::String], other)),
        }
    }

    fn view(&self) -> View<'_> {
        View::Scalar(self)
    }
}

/// Written as nanoseconds since the Unix epoch. Instants outside the range of an `i64` saturate.
impl Form for DateTime<Utc> {
    fn write_with(&self, _serializer: &Serializer) -> Value {
        let nanos = self.timestamp_nanos_opt().unwrap_or(if self.timestamp() < 0 {
            i64::MIN
        } else {
            i64::MAX
        });
        Value::Int64(nanos)
    }

    fn read_with(_serializer: &Serializer, value: &Value) -> Result<Self, ReadError> {
        match value {
            Value::Int64(n) => Ok(Utc.timestamp_nanos(*n)),
            Value::UInt64(n) => Ok(Utc.timestamp_nanos(*n as i64)),
            other => Err(ReadError::unexpected_kind(
                &[ValueKind::Int64, ValueKind::UInt64],
                other,
            )),
        }
    }

    fn view(&self) -> View<'_> {
        View::Scalar(self)
    }
}

/// The untyped value is written as is.
impl Form for Value {
    fn write_with(&self, _serializer: &Serializer) -> Value {
        self.clone()
    }

    fn read_with(_serializer: &Serializer, value: &Value) -> Result<Self, ReadError> {
        Ok(value.clone())
    }

    fn view(&self) -> View<'_> {
        match self {
            Value::Null => View::Null,
            Value::Bool(b) => View::Indirect(b),
            Value::Int64(n) => View::Indirect(n),
            Value::UInt64(n) => View::Indirect(n),
            Value::Float64(x) => View::Indirect(x),
            Value::String(s) => View::Indirect(s),
            Value::List(items) => {
                View::Sequence(Box::new(items.iter().map(|item| item as &dyn Object)))
            }
            Value::Map(entries) => View::Dictionary(entries),
        }
    }
}

impl<T: Form> Form for Option<T> {
    fn write_with(&self, serializer: &Serializer) -> Value {
        match self {
            Some(inner) => serializer.serialize(inner),
            None => Value::Null,
        }
    }

    fn read_with(serializer: &Serializer, value: &Value) -> Result<Self, ReadError> {
        match value {
            Value::Null => Ok(None),
            other => serializer.deserialize(other).map(Some),
        }
    }

    fn view(&self) -> View<'_> {
        match self {
            Some(inner) => View::Indirect(inner),
            None => View::Null,
        }
    }
}

impl<T: Form> Form for Box<T> {
    fn write_with(&self, serializer: &Serializer) -> Value {
        serializer.serialize(&**self)
    }

    fn read_with(serializer: &Serializer, value: &Value) -> Result<Self, ReadError> {
        serializer.deserialize(value).map(Box::new)
    }

    fn view(&self) -> View<'_> {
        View::Indirect(&**self)
    }
}

/// A slot that can hold a value of any type. Maps are written with a type tag.
impl Form for Box<dyn Object> {
    fn write_with(&self, serializer: &Serializer) -> Value {
        serializer.serialize_polymorphic(&**self)
    }

    fn read_with(serializer: &Serializer, value: &Value) -> Result<Self, ReadError> {
        serializer.deserialize_dynamic(value)
    }

    fn view(&self) -> View<'_> {
        View::Indirect(&**self)
    }
}

fn write_sequence<'a, T, I>(serializer: &Serializer, items: I) -> Value
where
    T: Form,
    I: Iterator<Item = &'a T>,
{
    Value::List(items.map(|item| serializer.serialize(item)).collect())
}

fn read_sequence<T, C>(serializer: &Serializer, value: &Value) -> Result<C, ReadError>
where
    T: Form,
    C: FromIterator<T>,
{
    match value {
        Value::List(items) => items
            .iter()
            .map(|item| serializer.deserialize::<T>(item))
            .collect(),
        other => Err(ReadError::unexpected_kind(&[ValueKind::List], other)),
    }
}

fn write_entries<'a, K, V, I>(serializer: &Serializer, entries: I) -> Value
where
    K: Form,
    V: Form,
    I: Iterator<Item = (&'a K, &'a V)>,
{
    Value::Map(
        entries
            .map(|(key, value)| (serializer.serialize(key), serializer.serialize(value)))
            .collect(),
    )
}

fn read_entries<K, V, C>(serializer: &Serializer, value: &Value) -> Result<C, ReadError>
where
    K: Form,
    V: Form,
    C: FromIterator<(K, V)>,
{
    match value {
        Value::Map(entries) => entries
            .iter()
            .map(|(key, value)| -> Result<(K, V), ReadError> {
                Ok((serializer.deserialize(key)?, serializer.deserialize(value)?))
            })
            .collect(),
        other => Err(ReadError::unexpected_kind(&[ValueKind::Map], other)),
    }
}

fn sequence_view<'a, T, I>(items: I) -> View<'a>
where
    T: Form,
    I: Iterator<Item = &'a T> + 'a,
{
    View::Sequence(Box::new(items.map(|item| item as &dyn Object)))
}

impl<T: Form> Form for Vec<T> {
    fn write_with(&self, serializer: &Serializer) -> Value {
        write_sequence(serializer, self.iter())
    }

    fn read_with(serializer: &Serializer, value: &Value) -> Result<Self, ReadError> {
        read_sequence(serializer, value)
    }

    fn view(&self) -> View<'_> {
        sequence_view(self.iter())
    }
}

impl<T: Form> Form for VecDeque<T> {
    fn write_with(&self, serializer: &Serializer) -> Value {
        write_sequence(serializer, self.iter())
    }

    fn read_with(serializer: &Serializer, value: &Value) -> Result<Self, ReadError> {
        read_sequence(serializer, value)
    }

    fn view(&self) -> View<'_> {
        sequence_view(self.iter())
    }
}

impl<T: Form, const N: usize> Form for [T; N] {
    fn write_with(&self, serializer: &Serializer) -> Value {
        write_sequence(serializer, self.iter())
    }

    fn read_with(serializer: &Serializer, value: &Value) -> Result<Self, ReadError> {
        let items: Vec<T> = read_sequence(serializer, value)?;
        let actual = items.len();
        items.try_into().map_err(|_| ReadError::WrongLength {
            expected: N,
            actual,
        })
    }

    fn view(&self) -> View<'_> {
        sequence_view(self.iter())
    }
}

/// Sets are written in iteration order and compared by membership.
impl<T: Form + Eq + Hash> Form for HashSet<T> {
    fn write_with(&self, serializer: &Serializer) -> Value {
        write_sequence(serializer, self.iter())
    }

    fn read_with(serializer: &Serializer, value: &Value) -> Result<Self, ReadError> {
        read_sequence(serializer, value)
    }

    fn view(&self) -> View<'_> {
        View::Set(self)
    }
}

impl<T: Form + Ord> Form for BTreeSet<T> {
    fn write_with(&self, serializer: &Serializer) -> Value {
        write_sequence(serializer, self.iter())
    }

    fn read_with(serializer: &Serializer, value: &Value) -> Result<Self, ReadError> {
        read_sequence(serializer, value)
    }

    fn view(&self) -> View<'_> {
        sequence_view(self.iter())
    }
}

impl<K: Form + Eq + Hash, V: Form> Form for HashMap<K, V> {
    fn write_with(&self, serializer: &Serializer) -> Value {
        write_entries(serializer, self.iter())
    }

    fn read_with(serializer: &Serializer, value: &Value) -> Result<Self, ReadError> {
        read_entries(serializer, value)
    }

    fn view(&self) -> View<'_> {
        View::Dictionary(self)
    }
}

impl<K: Form + Ord, V: Form> Form for BTreeMap<K, V> {
    fn write_with(&self, serializer: &Serializer) -> Value {
        write_entries(serializer, self.iter())
    }

    fn read_with(serializer: &Serializer, value: &Value) -> Result<Self, ReadError> {
        read_entries(serializer, value)
    }

    fn view(&self) -> View<'_> {
        View::Dictionary(self)
    }
}
