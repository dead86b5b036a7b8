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

use crate::identifier::{is_keyword, is_simple_string};
use crate::{list, map, Value, ValueKind};

#[test]
fn numeric_conversions_widen() {
    assert_eq!(Value::from(42u8), Value::UInt64(42));
    assert_eq!(Value::from(42usize), Value::UInt64(42));
    assert_eq!(Value::from(-3i8), Value::Int64(-3));
    assert_eq!(Value::from(7isize), Value::Int64(7));
    assert_eq!(Value::from(1.5f64), Value::Float64(1.5));
}

#[test]
fn single_precision_widens_through_decimal() {
    assert_eq!(Value::from(0.1f32), Value::Float64(0.1));
    assert_eq!(Value::from(1.123456f32), Value::Float64(1.123456));
}

#[test]
fn from_entries_replaces_duplicates() {
    let value = Value::from_entries(vec![("a", 1i64), ("b", 2i64), ("a", 3i64)]);
    assert_eq!(
        value,
        Value::Map(vec![
            (Value::text("a"), Value::Int64(3)),
            (Value::text("b"), Value::Int64(2)),
        ])
    );
}

#[test]
fn lookups() {
    let value = map! { "name" => "Dennis", 1i64 => list![true] };
    assert_eq!(value.get_field("name"), Some(&Value::text("Dennis")));
    assert_eq!(
        value.get(&Value::Int64(1)),
        Some(&Value::List(vec![Value::Bool(true)]))
    );
    assert_eq!(value.get_field("missing"), None);
    assert_eq!(Value::Int64(1).get_field("name"), None);
    assert_eq!(value.len(), Some(2));
    assert_eq!(Value::Null.len(), None);
}

#[test]
fn kinds() {
    assert_eq!(Value::Null.kind(), ValueKind::Null);
    assert_eq!(list![].kind(), ValueKind::List);
    assert_eq!(map!().kind(), ValueKind::Map);
    assert!(list![].is_container());
    assert!(!Value::text("x").is_container());
    assert_eq!(ValueKind::UInt64.to_string(), "UInt64");
}

#[test]
fn simple_strings() {
    assert!(is_simple_string("HelloWorld"));
    assert!(is_simple_string("_Hello"));
    assert!(is_simple_string("string_foo-bar"));
    assert!(is_simple_string("a123"));
    assert!(is_simple_string("s-1"));
    assert!(is_simple_string("#unknowntoken"));

    assert!(!is_simple_string(""));
    assert!(!is_simple_string("1abc"));
    assert!(!is_simple_string("-hello"));
    assert!(!is_simple_string("c:\\windows"));
    assert!(!is_simple_string("#true"));
    assert!(!is_simple_string("a.b"));
}

#[test]
fn keywords() {
    assert!(is_keyword("#null"));
    assert!(!is_keyword("null"));
}
