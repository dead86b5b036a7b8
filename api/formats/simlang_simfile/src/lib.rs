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

//! # SimFile
//!
//! Parsing and printing of the SimFile text format. A document is a single value: `#true`,
//! `#false`, `#null`, a number, a bare or quoted string, a list `[ ... ]` or a map
//! `{ key value ... }`. Comments run from `;` to the end of the line.
//!
//! ```
//! use simlang_model::{list, Value};
//! use simlang_simfile::{parse, print};
//!
//! let value = parse("[foo #null [1 2 #true]] ; trailing comment").unwrap();
//! assert_eq!(value, list!["foo", Value::Null, list![1i64, 2i64, true]]);
//! assert_eq!(print(&list!["foo", "bar baz"]), "[ foo \"bar baz\" ]");
//! ```

pub mod parser;
pub mod printer;

pub use parser::{parse, Container, Location, ParseError, Span};
pub use printer::{print, print_simfile, print_simfile_with, print_with, PrintOptions};
