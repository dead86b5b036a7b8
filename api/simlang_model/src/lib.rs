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

//! # SimLang value model
//!
//! The canonical, untyped tree that every SimFile document and every serialized object is
//! represented as. The parser produces it, the printer consumes it and `simlang_form` maps it
//! to and from typed Rust values.

use std::fmt::Formatter;

pub mod identifier;
#[macro_use]
pub mod macros;
#[cfg(test)]
mod tests;
mod value;

pub use value::{Value, ValueKind};

/// Write a string in the SimFile representation: bare when it is a simple string, otherwise
/// double quoted with escapes.
pub fn write_string_literal(literal: &str, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
    if identifier::is_simple_string(literal) {
        f.write_str(literal)
    } else if needs_escape(literal) {
        write!(f, "\"{}\"", escape_text(literal))
    } else {
        write!(f, "\"{}\"", literal)
    }
}

fn escape_text(text: &str) -> String {
    let mut output = String::with_capacity(text.len() + 2);
    for c in text.chars() {
        match c {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\r' => output.push_str("\\r"),
            '\n' => output.push_str("\\n"),
            '\t' => output.push_str("\\t"),
            _ => output.push(c),
        }
    }
    output
}

fn needs_escape(text: &str) -> bool {
    text.chars()
        .any(|c| matches!(c, '"' | '\\' | '\r' | '\n' | '\t'))
}
