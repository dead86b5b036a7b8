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

use simlang_model::{list, map, Value};

use crate::deep_equals;
use crate::tests::classes::{
    test_generics, test_one, test_struct, ClassA, ClassB, IClass, TestClassOne,
};
use crate::Object;

#[test]
fn null_equals_only_null() {
    let none: Option<i32> = None;
    assert!(deep_equals(&none, &none));
    assert!(deep_equals(&none, &Value::Null));
    assert!(!deep_equals(&none, &Some(0)));
    assert!(!deep_equals(&Value::Null, &0i32));
}

#[test]
fn primitives() {
    assert!(deep_equals(&1i32, &1i32));
    assert!(!deep_equals(&1i32, &2i32));
    assert!(deep_equals(&"foo".to_string(), &"foo".to_string()));
    assert!(deep_equals(&true, &true));
    assert!(deep_equals(&'x', &'x'));
    assert!(deep_equals(&1.5f64, &1.5f64));
}

#[test]
fn strict_nominal_typing() {
    assert!(!deep_equals(&1i32, &1i64));
    assert!(!deep_equals(&1u64, &1i64));
    assert!(!deep_equals(&1.0f32, &1.0f64));
    assert!(!deep_equals(&Value::Int64(1), &Value::Float64(1.0)));
    assert!(!deep_equals(&Value::Int64(1), &Value::UInt64(1)));
    assert!(!deep_equals(&Value::text("1"), &Value::Int64(1)));
}

#[test]
fn array_is_not_vec() {
    let array = [1, 2, 3];
    let vec = vec![1, 2, 3];
    assert!(deep_equals(&array, &[1, 2, 3]));
    assert!(deep_equals(&vec, &vec![1, 2, 3]));
    assert!(!deep_equals(&array, &vec));
    assert!(!deep_equals(&vec, &VecDeque::from(vec![1, 2, 3])));
}

#[test]
fn typed_map_is_not_untyped_map() {
    let typed: HashMap<String, i64> = [("a".to_string(), 1)].into();
    let untyped = map! { "a" => 1i64 };
    assert!(!deep_equals(&typed, &untyped));
    assert!(!deep_equals(&vec![Value::Int64(1)], &list![1i64]));
}

#[test]
fn value_scalars_compare_as_native() {
    assert!(deep_equals(&Value::Int64(3), &3i64));
    assert!(deep_equals(&Value::text("a"), &"a".to_string()));
    assert!(!deep_equals(&Value::Int64(3), &3i32));
}

#[test]
fn nan_equals_itself() {
    assert!(deep_equals(&f64::NAN, &f64::NAN));
    assert!(deep_equals(&f32::NAN, &f32::NAN));
    assert!(deep_equals(&Value::Float64(f64::NAN), &Value::Float64(f64::NAN)));
    assert!(deep_equals(&vec![1.0, f64::NAN], &vec![1.0, f64::NAN]));
    assert!(deep_equals(&list![f64::NAN], &list![f64::NAN]));

    assert!(!deep_equals(&f64::NAN, &1.0f64));
    assert!(!deep_equals(&1.0f64, &f64::NAN));
    assert!(!deep_equals(&f64::NAN, &f32::NAN));
}

#[test]
fn sequences_pairwise() {
    assert!(deep_equals(&list![1i64, "a", Value::Null], &list![1i64, "a", Value::Null]));
    assert!(!deep_equals(&list![1i64, 2i64], &list![2i64, 1i64]));
    assert!(!deep_equals(&vec![1, 2], &vec![1, 2, 3]));
    assert!(!deep_equals(&vec![1, 2, 3], &vec![1, 2]));
    assert!(deep_equals(&Vec::<i32>::new(), &Vec::<i32>::new()));
}

#[test]
fn maps_ignore_order() {
    let first = map! { "a" => 1i64, "b" => list![2i64] };
    let second = map! { "b" => list![2i64], "a" => 1i64 };
    assert!(deep_equals(&first, &second));

    let third = map! { "a" => 1i64, "b" => list![3i64] };
    assert!(!deep_equals(&first, &third));

    let fourth = map! { "a" => 1i64 };
    assert!(!deep_equals(&first, &fourth));
    assert!(!deep_equals(&fourth, &first));

    let x: BTreeMap<i32, String> = [(1, "one".to_string()), (2, "two".to_string())].into();
    let y: BTreeMap<i32, String> = [(2, "two".to_string()), (1, "one".to_string())].into();
    assert!(deep_equals(&x, &y));
}

#[test]
fn map_values_compared_deeply() {
    let x: HashMap<i32, Vec<i32>> = [(1, vec![1, 2])].into();
    let y: HashMap<i32, Vec<i32>> = [(1, vec![1, 2])].into();
    let z: HashMap<i32, Vec<i32>> = [(1, vec![1, 3])].into();
    assert!(deep_equals(&x, &y));
    assert!(!deep_equals(&x, &z));
}

#[test]
fn sets() {
    let x: HashSet<i32> = (0..100).collect();
    let y: HashSet<i32> = (0..100).rev().collect();
    let z: HashSet<i32> = (1..101).collect();
    assert!(deep_equals(&x, &y));
    assert!(!deep_equals(&x, &z));

    let ordered: BTreeSet<i32> = (0..100).collect();
    assert!(!deep_equals(&x, &ordered));
}

#[test]
fn records_compare_members() {
    assert!(deep_equals(&test_one(), &test_one()));

    let mut other = test_one();
    other.public_field_string = "bar".to_string();
    assert!(!deep_equals(&test_one(), &other));

    assert!(deep_equals(&test_struct(1, 2, "a"), &test_struct(1, 2, "a")));
    assert!(!deep_equals(&test_struct(1, 2, "a"), &test_struct(2, 1, "a")));
}

#[test]
fn records_compare_read_only_members() {
    // Not serialized, but still part of the comparison.
    let mut other = test_one();
    other.private_field += 1;
    assert!(!deep_equals(&test_one(), &other));
}

#[test]
fn records_of_different_types() {
    let a = ClassA { fielda: 0 };
    let b = ClassB {
        fieldb: String::new(),
    };
    assert!(!deep_equals(&a, &b));
    assert!(!deep_equals(&TestClassOne::default(), &a));
}

#[test]
fn boxed_values_compare_contents() {
    let a: Box<dyn IClass> = Box::new(ClassA { fielda: 1 });
    let same: Box<dyn IClass> = Box::new(ClassA { fielda: 1 });
    let different: Box<dyn IClass> = Box::new(ClassB {
        fieldb: "1".to_string(),
    });
    assert!(deep_equals(&a, &same));
    assert!(!deep_equals(&a, &different));
    assert!(deep_equals(&a, &ClassA { fielda: 1 }));

    let any: Box<dyn Object> = Box::new(5i32);
    assert!(deep_equals(&any, &5i32));
    assert!(deep_equals(&Box::new(5i32), &5i32));
    assert!(!deep_equals(&any, &5i64));
}

#[test]
fn reflexive_on_complex_values() {
    let generics = test_generics();
    assert!(deep_equals(&generics, &generics));
    assert!(deep_equals(&generics, &test_generics()));
}
