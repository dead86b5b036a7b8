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

use super::{parse, parse_span, Container, ParseError, Span};
use simlang_model::{list, map, Value};

fn parse_ok(rep: &str) -> Value {
    match parse(rep) {
        Ok(value) => value,
        Err(err) => panic!("Failed to parse {:?}: {}", rep, err),
    }
}

#[test]
fn keywords() {
    assert_eq!(parse_ok("#true"), Value::Bool(true));
    assert_eq!(parse_ok("#false"), Value::Bool(false));
    assert_eq!(parse_ok("#null"), Value::Null);
    assert_eq!(parse_ok("  #null  "), Value::Null);
}

#[test]
fn hash_prefixed_strings() {
    assert_eq!(parse_ok("#type"), Value::text("#type"));
    assert_eq!(parse_ok("#truest"), Value::text("#truest"));
    assert_eq!(parse_ok("#"), Value::text("#"));
}

#[test]
fn integers() {
    assert_eq!(parse_ok("0"), Value::Int64(0));
    assert_eq!(parse_ok("42"), Value::Int64(42));
    assert_eq!(parse_ok("-42"), Value::Int64(-42));
    assert_eq!(parse_ok("+42"), Value::Int64(42));
    assert_eq!(parse_ok("9223372036854775807"), Value::Int64(i64::MAX));
    assert_eq!(parse_ok("-9223372036854775808"), Value::Int64(i64::MIN));
}

#[test]
fn large_integers_widen() {
    assert_eq!(parse_ok("9223372036854775808"), Value::UInt64(9223372036854775808));
    assert_eq!(parse_ok("18446744073709551615"), Value::UInt64(u64::MAX));
    assert_eq!(
        parse_ok("18446744073709551616"),
        Value::Float64(18446744073709551616.0)
    );
    assert_eq!(
        parse_ok("-9223372036854775809"),
        Value::Float64(-9223372036854775809.0)
    );
}

#[test]
fn floats() {
    assert_eq!(parse_ok("1.5"), Value::Float64(1.5));
    assert_eq!(parse_ok("-0.25"), Value::Float64(-0.25));
    assert_eq!(parse_ok("2.0"), Value::Float64(2.0));
}

#[test]
fn number_stops_at_first_non_numeric() {
    assert_eq!(parse_ok("31337haxxor"), Value::Int64(31337));
    assert_eq!(parse_ok("1.5.6"), Value::Float64(1.5));

    let (rest, value) = parse_span(Span::new("12.x")).unwrap();
    assert_eq!(value, Value::Int64(12));
    assert_eq!(*rest.fragment(), ".x");
}

#[test]
fn malformed_numbers() {
    assert!(matches!(
        parse("-hello"),
        Err(ParseError::MalformedNumber { .. })
    ));
    assert!(matches!(parse("+"), Err(ParseError::MalformedNumber { .. })));
    assert!(matches!(
        parse(".5"),
        Err(ParseError::UnexpectedCharacter { found: '.', .. })
    ));
}

#[test]
fn simple_strings() {
    assert_eq!(parse_ok("hello"), Value::text("hello"));
    assert_eq!(parse_ok("s-1"), Value::text("s-1"));
    assert_eq!(parse_ok("_private"), Value::text("_private"));
    assert_eq!(parse_ok("héllo"), Value::text("héllo"));
    assert_eq!(parse_ok("two words"), Value::text("two"));
}

#[test]
fn double_quoted_strings() {
    assert_eq!(parse_ok("\"\""), Value::text(""));
    assert_eq!(parse_ok("\"two words\""), Value::text("two words"));
    assert_eq!(
        parse_ok(r#""a\"b\\c\nd\re\tf""#),
        Value::text("a\"b\\c\nd\re\tf")
    );
    assert_eq!(parse_ok("\"line\nbreak\""), Value::text("line\nbreak"));
}

#[test]
fn invalid_escape() {
    let err = parse(r#""ab\qc""#).unwrap_err();
    match err {
        ParseError::InvalidEscape { found, location } => {
            assert_eq!(found, 'q');
            assert_eq!(location.offset, 3);
        }
        ow => panic!("Unexpected error: {:?}", ow),
    }
}

#[test]
fn single_quoted_strings() {
    assert_eq!(parse_ok("'it\"s'"), Value::text("it\"s"));
    assert_eq!(parse_ok(r"'a\nb'"), Value::text(r"a\nb"));
    assert_eq!(parse_ok(r"'O\'Hare'"), Value::text(r"O\"));
}

#[test]
fn unterminated_strings() {
    assert!(matches!(
        parse("\"abc"),
        Err(ParseError::UnterminatedString { .. })
    ));
    assert!(matches!(
        parse("\"abc\\"),
        Err(ParseError::UnterminatedString { .. })
    ));
    assert!(matches!(
        parse("'abc"),
        Err(ParseError::UnterminatedString { .. })
    ));
}

#[test]
fn lists() {
    assert_eq!(parse_ok("[]"), list![]);
    assert_eq!(parse_ok("[ ]"), list![]);
    assert_eq!(
        parse_ok("[ foo \"bar\\n\" 1 2.1 #true #null ]"),
        list!["foo", "bar\n", 1i64, 2.1, true, Value::Null]
    );
    assert_eq!(parse_ok("[[1][2 [3]]]"), list![list![1i64], list![2i64, list![3i64]]]);
}

#[test]
fn maps() {
    assert_eq!(parse_ok("{}"), map!());
    assert_eq!(
        parse_ok("{ name Bob level 5 }"),
        map! { "name" => "Bob", "level" => 5i64 }
    );
    assert_eq!(
        parse_ok("{ 1 one #true [a] }"),
        map! { 1i64 => "one", true => list!["a"] }
    );
    assert_eq!(
        parse_ok("{ [1 2] {} }"),
        Value::Map(vec![(list![1i64, 2i64], map!())])
    );
}

#[test]
fn repeated_map_key_keeps_last() {
    assert_eq!(
        parse_ok("{ a 1 b 2 a 3 }"),
        Value::Map(vec![
            (Value::text("a"), Value::Int64(3)),
            (Value::text("b"), Value::Int64(2)),
        ])
    );
}

#[test]
fn comments() {
    let rep = "; leading comment\n[ 1 ; one\n  2 ; two\n]";
    assert_eq!(parse_ok(rep), list![1i64, 2i64]);
    assert_eq!(parse_ok("{;c\na;c\n1;c\n}"), map! { "a" => 1i64 });
}

#[test]
fn trailing_input_ignored() {
    assert_eq!(parse_ok("[1] [2]"), list![1i64]);
    assert_eq!(parse_ok("a b c"), Value::text("a"));
}

#[test]
fn empty_input() {
    assert!(matches!(parse(""), Err(ParseError::UnexpectedEnd { .. })));
    assert!(matches!(
        parse("   ; only a comment"),
        Err(ParseError::UnexpectedEnd { .. })
    ));
}

#[test]
fn unterminated_containers() {
    assert_eq!(
        parse("[1 2").map_err(|e| matches!(
            e,
            ParseError::Unterminated {
                container: Container::List,
                ..
            }
        )),
        Err(true)
    );
    assert_eq!(
        parse("{a 1").map_err(|e| matches!(
            e,
            ParseError::Unterminated {
                container: Container::Map,
                ..
            }
        )),
        Err(true)
    );
}

#[test]
fn mismatched_close() {
    match parse("[1 2}") {
        Err(ParseError::MismatchedClose {
            found,
            container,
            opened,
            location,
        }) => {
            assert_eq!(found, '}');
            assert_eq!(container, Container::List);
            assert_eq!(opened.offset, 0);
            assert_eq!(location.offset, 4);
        }
        ow => panic!("Unexpected result: {:?}", ow),
    }
    assert!(matches!(
        parse("{a 1]"),
        Err(ParseError::MismatchedClose {
            found: ']',
            container: Container::Map,
            ..
        })
    ));
}

#[test]
fn odd_map_arity() {
    assert!(matches!(parse("{a}"), Err(ParseError::OddMapArity { .. })));
    assert!(matches!(
        parse("{a 1 b}"),
        Err(ParseError::OddMapArity { .. })
    ));
}

#[test]
fn unexpected_characters() {
    assert!(matches!(
        parse("]"),
        Err(ParseError::UnexpectedCharacter { found: ']', .. })
    ));
    assert!(matches!(
        parse("[1 @]"),
        Err(ParseError::UnexpectedCharacter { found: '@', .. })
    ));
}

#[test]
fn error_locations() {
    let err = parse("[\n  1\n  ?\n]").unwrap_err();
    let location = err.location();
    assert_eq!(location.line, 3);
    assert_eq!(location.column, 3);
    assert_eq!(location.offset, 8);
    assert_eq!(
        err.to_string(),
        "Unexpected character '?' at line 3, column 3."
    );
}
