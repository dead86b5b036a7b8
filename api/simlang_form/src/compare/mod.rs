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

#[cfg(test)]
mod tests;

use std::any::Any;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::Hash;

use simlang_model::Value;

use crate::{Form, Object};

/// The structure of a value as seen by [`deep_equals`].
pub enum View<'a> {
    /// An absent value. Equal only to another absent value.
    Null,
    /// A primitive compared with its own equality.
    Scalar(&'a dyn Scalar),
    /// A wrapper whose identity is that of the value it holds.
    Indirect(&'a dyn Object),
    /// An ordered sequence, compared pairwise.
    Sequence(Box<dyn Iterator<Item = &'a dyn Object> + 'a>),
    /// A keyed collection, compared regardless of order.
    Dictionary(&'a dyn Dictionary),
    /// An unordered set, compared by membership.
    Set(&'a dyn Membership),
    /// A structured value, compared member by member.
    Members(Vec<(&'static str, Member<'a>)>),
}

/// Equality for primitive values. Implemented for everything with a [`PartialEq`].
pub trait Scalar: Any {
    fn scalar_eq(&self, other: &dyn Any) -> bool;
}

impl<T: PartialEq + Any> Scalar for T {
    fn scalar_eq(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<T>().map_or(false, |other| self == other)
    }
}

pub trait Dictionary {
    fn len(&self) -> usize;

    fn entries(&self) -> Box<dyn Iterator<Item = (&dyn Object, &dyn Object)> + '_>;

    /// Find the value for a key using the standard equality of the key type.
    fn lookup(&self, key: &dyn Object) -> Option<&dyn Object>;
}

pub trait Membership {
    fn len(&self) -> usize;

    fn members(&self) -> Box<dyn Iterator<Item = &dyn Object> + '_>;

    fn contains_member(&self, item: &dyn Object) -> bool;
}

/// A member of a structured value. Computed members are owned by the view.
pub enum Member<'a> {
    Borrowed(&'a dyn Object),
    Owned(Box<dyn Object>),
}

impl<'a> Member<'a> {
    pub fn get(&self) -> &dyn Object {
        match self {
            Member::Borrowed(object) => *object,
            Member::Owned(object) => &**object,
        }
    }
}

impl<'a> Member<'a> {
    pub fn computed<T: Form>(value: T) -> Self {
        Member::Owned(Box::new(value))
    }
}

/// Structural equality with strict nominal typing. Values of different concrete types are never
/// equal, even where their contents match (an `i32` never equals an `i64`, a `Vec` never equals
/// an array, a typed map never equals a [`Value`] map). Maps compare regardless of key order and
/// structured values compare every member, including read-only ones.
///
/// Cyclic values are not supported.
///
/// ```
/// use simlang_form::deep_equals;
///
/// assert!(deep_equals(&vec![1, 2, 3], &vec![1, 2, 3]));
/// assert!(!deep_equals(&vec![1, 2, 3], &[1, 2, 3]));
/// assert!(!deep_equals(&1i32, &1i64));
/// ```
pub fn deep_equals(a: &dyn Object, b: &dyn Object) -> bool {
    match (resolve(a), resolve(b)) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            Any::type_id(a.as_any()) == Any::type_id(b.as_any()) && compare_views(a, b)
        }
        _ => false,
    }
}

fn resolve(object: &dyn Object) -> Option<&dyn Object> {
    let mut current = object;
    loop {
        match current.shape() {
            View::Null => return None,
            View::Indirect(inner) => current = inner,
            _ => return Some(current),
        }
    }
}

fn compare_views(a: &dyn Object, b: &dyn Object) -> bool {
    match (a.shape(), b.shape()) {
        (View::Scalar(x), View::Scalar(_)) => both_nan(a, b) || x.scalar_eq(b.as_any()),
        (View::Sequence(mut xs), View::Sequence(mut ys)) => loop {
            match (xs.next(), ys.next()) {
                (None, None) => break true,
                (Some(x), Some(y)) if deep_equals(x, y) => continue,
                _ => break false,
            }
        },
        (View::Dictionary(x), View::Dictionary(y)) => {
            x.len() == y.len()
                && x.entries().all(|(key, value)| {
                    y.lookup(key)
                        .map_or(false, |other| deep_equals(value, other))
                })
        }
        (View::Set(x), View::Set(y)) => {
            x.len() == y.len() && x.members().all(|item| y.contains_member(item))
        }
        (View::Members(xs), View::Members(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .zip(ys.iter())
                    .all(|((x_name, x), (y_name, y))| {
                        x_name == y_name && deep_equals(x.get(), y.get())
                    })
        }
        _ => false,
    }
}

// NaN equals itself here.
fn both_nan(a: &dyn Object, b: &dyn Object) -> bool {
    fn is_nan(object: &dyn Object) -> bool {
        let any = object.as_any();
        any.downcast_ref::<f64>().map_or(false, |x| x.is_nan())
            || any.downcast_ref::<f32>().map_or(false, |x| x.is_nan())
    }
    is_nan(a) && is_nan(b)
}

impl<K, V> Dictionary for HashMap<K, V>
where
    K: Form + Eq + Hash,
    V: Form,
{
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&dyn Object, &dyn Object)> + '_> {
        Box::new(
            self.iter()
                .map(|(k, v)| (k as &dyn Object, v as &dyn Object)),
        )
    }

    fn lookup(&self, key: &dyn Object) -> Option<&dyn Object> {
        key.as_any()
            .downcast_ref::<K>()
            .and_then(|key| self.get(key))
            .map(|value| value as &dyn Object)
    }
}

impl<K, V> Dictionary for BTreeMap<K, V>
where
    K: Form + Ord,
    V: Form,
{
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&dyn Object, &dyn Object)> + '_> {
        Box::new(
            self.iter()
                .map(|(k, v)| (k as &dyn Object, v as &dyn Object)),
        )
    }

    fn lookup(&self, key: &dyn Object) -> Option<&dyn Object> {
        key.as_any()
            .downcast_ref::<K>()
            .and_then(|key| self.get(key))
            .map(|value| value as &dyn Object)
    }
}

impl Dictionary for Vec<(Value, Value)> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&dyn Object, &dyn Object)> + '_> {
        Box::new(
            self.iter()
                .map(|(k, v)| (k as &dyn Object, v as &dyn Object)),
        )
    }

    fn lookup(&self, key: &dyn Object) -> Option<&dyn Object> {
        let key = key.as_any().downcast_ref::<Value>()?;
        self.iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value as &dyn Object)
    }
}

impl<T> Membership for HashSet<T>
where
    T: Form + Eq + Hash,
{
    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn members(&self) -> Box<dyn Iterator<Item = &dyn Object> + '_> {
        Box::new(self.iter().map(|item| item as &dyn Object))
    }

    fn contains_member(&self, item: &dyn Object) -> bool {
        item.as_any()
            .downcast_ref::<T>()
            .map_or(false, |item| self.contains(item))
    }
}
