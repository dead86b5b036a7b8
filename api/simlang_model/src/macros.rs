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

/// Creates a list value from the provided items.
///
/// ```
/// use simlang_model::{list, Value};
///
/// let value = list![1i64, "two", true];
/// assert_eq!(
///     value,
///     Value::List(vec![Value::Int64(1), Value::text("two"), Value::Bool(true)])
/// );
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::Value::List(::std::vec::Vec::new())
    };
    ($($item:expr),+ $(,)?) => {
        $crate::Value::List(vec![$($crate::Value::from($item)),+])
    };
}

/// Creates a map value from the provided pairs.
///
/// ```
/// use simlang_model::{map, Value};
///
/// let value = map! { "name" => "Dennis", "age" => 37i64 };
/// assert_eq!(value.get_field("age"), Some(&Value::Int64(37)));
/// ```
#[macro_export]
macro_rules! map {
    () => {
        $crate::Value::Map(::std::vec::Vec::new())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::Value::from_entries(vec![$(($crate::Value::from($key), $crate::Value::from($value))),+])
    };
}
