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

use std::fmt::{Display, Formatter};

use nom::InputTake;
use nom_locate::LocatedSpan;
use simlang_model::identifier::is_simple_start;
use simlang_model::Value;
use thiserror::Error;

mod tokens;

#[cfg(test)]
mod tests;

pub type Span<'a> = LocatedSpan<&'a str>;

/// A position in the input text. Lines and columns are 1-based; the offset is in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub offset: usize,
    pub line: u32,
    pub column: usize,
}

impl Location {
    pub(crate) fn of(span: &Span<'_>) -> Self {
        Location {
            offset: span.location_offset(),
            line: span.location_line(),
            column: span.get_utf8_column(),
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    List,
    Map,
}

impl Display for Container {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Container::List => f.write_str("list"),
            Container::Map => f.write_str("map"),
        }
    }
}

/// Errors that can occur when parsing a SimFile document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("The input ended before a value was found at {location}.")]
    UnexpectedEnd { location: Location },
    #[error("Unexpected character '{found}' at {location}.")]
    UnexpectedCharacter { found: char, location: Location },
    #[error("Malformed number at {location}.")]
    MalformedNumber { location: Location },
    #[error("Invalid escape sequence '\\{found}' at {location}.")]
    InvalidEscape { found: char, location: Location },
    #[error("String starting at {location} is not terminated.")]
    UnterminatedString { location: Location },
    #[error("The {container} opened at {location} is not closed.")]
    Unterminated {
        container: Container,
        location: Location,
    },
    #[error("Found '{found}' at {location} closing the {container} opened at {opened}.")]
    MismatchedClose {
        found: char,
        container: Container,
        opened: Location,
        location: Location,
    },
    #[error("The map opened at {location} has a key with no value.")]
    OddMapArity { location: Location },
}

impl ParseError {
    /// Where in the input the problem was detected.
    pub fn location(&self) -> Location {
        match self {
            ParseError::UnexpectedEnd { location }
            | ParseError::UnexpectedCharacter { location, .. }
            | ParseError::MalformedNumber { location }
            | ParseError::InvalidEscape { location, .. }
            | ParseError::UnterminatedString { location }
            | ParseError::Unterminated { location, .. }
            | ParseError::MismatchedClose { location, .. }
            | ParseError::OddMapArity { location } => *location,
        }
    }
}

/// Parse a single value from a SimFile document. Anything following the first complete value
/// is ignored.
///
/// ```
/// use simlang_model::{map, Value};
/// use simlang_simfile::parse;
///
/// assert_eq!(parse("{ name Bob level 5 }"), Ok(map! { "name" => "Bob", "level" => 5i64 }));
/// assert_eq!(parse("31337haxxor"), Ok(Value::Int64(31337)));
/// assert!(parse("").is_err());
/// ```
pub fn parse(text: &str) -> Result<Value, ParseError> {
    parse_span(Span::new(text)).map(|(_, value)| value)
}

/// Parse a single value from the start of a span, returning the remaining input.
pub fn parse_span(input: Span<'_>) -> Result<(Span<'_>, Value), ParseError> {
    value(tokens::skip_trivia(input))
}

fn value(input: Span<'_>) -> Result<(Span<'_>, Value), ParseError> {
    match input.fragment().chars().next() {
        None => Err(ParseError::UnexpectedEnd {
            location: Location::of(&input),
        }),
        Some('[') => list(input),
        Some('{') => map(input),
        Some('"') => tokens::double_quoted(input).map(|(rest, s)| (rest, Value::String(s))),
        Some('\'') => tokens::single_quoted(input).map(|(rest, s)| (rest, Value::String(s))),
        Some('#') => {
            let (rest, token) = tokens::hash_token(input);
            let value = match token {
                "#true" => Value::Bool(true),
                "#false" => Value::Bool(false),
                "#null" => Value::Null,
                other => Value::text(other),
            };
            Ok((rest, value))
        }
        Some(c) if c == '+' || c == '-' || c.is_ascii_digit() => tokens::number(input),
        Some(c) if is_simple_start(c) => {
            tokens::simple_string(input).map(|(rest, s)| (rest, Value::text(s)))
        }
        Some(c) => Err(ParseError::UnexpectedCharacter {
            found: c,
            location: Location::of(&input),
        }),
    }
}

fn advance(input: Span<'_>, bytes: usize) -> Span<'_> {
    input.take_split(bytes).0
}

fn list(input: Span<'_>) -> Result<(Span<'_>, Value), ParseError> {
    let opened = Location::of(&input);
    let mut rest = advance(input, 1);
    let mut items = vec![];
    loop {
        rest = tokens::skip_trivia(rest);
        match rest.fragment().chars().next() {
            None => {
                return Err(ParseError::Unterminated {
                    container: Container::List,
                    location: opened,
                })
            }
            Some(']') => return Ok((advance(rest, 1), Value::List(items))),
            Some(c @ '}') => {
                return Err(ParseError::MismatchedClose {
                    found: c,
                    container: Container::List,
                    opened,
                    location: Location::of(&rest),
                })
            }
            Some(_) => {
                let (remainder, item) = value(rest)?;
                items.push(item);
                rest = remainder;
            }
        }
    }
}

fn map(input: Span<'_>) -> Result<(Span<'_>, Value), ParseError> {
    let opened = Location::of(&input);
    let mut rest = advance(input, 1);
    let mut items = vec![];
    loop {
        rest = tokens::skip_trivia(rest);
        match rest.fragment().chars().next() {
            None => {
                return Err(ParseError::Unterminated {
                    container: Container::Map,
                    location: opened,
                })
            }
            Some('}') if items.len() % 2 != 0 => {
                return Err(ParseError::OddMapArity { location: opened })
            }
            Some('}') => {
                let mut flat = items.into_iter();
                let mut entries = vec![];
                while let (Some(key), Some(value)) = (flat.next(), flat.next()) {
                    entries.push((key, value));
                }
                return Ok((advance(rest, 1), Value::from_entries(entries)));
            }
            Some(c @ ']') => {
                return Err(ParseError::MismatchedClose {
                    found: c,
                    container: Container::Map,
                    opened,
                    location: Location::of(&rest),
                })
            }
            Some(_) => {
                let (remainder, item) = value(rest)?;
                items.push(item);
                rest = remainder;
            }
        }
    }
}
