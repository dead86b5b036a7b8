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

use nom::branch::alt;
use nom::bytes::complete::take_while;
use nom::character::complete::{char, digit1, multispace1, one_of, satisfy};
use nom::combinator::{opt, recognize};
use nom::multi::many0_count;
use nom::sequence::{pair, tuple};
use nom::{IResult, InputTake};
use simlang_model::identifier::{is_simple_char, is_simple_start};
use simlang_model::Value;

use super::{Location, ParseError, Span};

fn comment(input: Span<'_>) -> IResult<Span<'_>, Span<'_>> {
    recognize(pair(char(';'), take_while(|c: char| c != '\n')))(input)
}

/// Consume any whitespace and comments.
pub fn skip_trivia(input: Span<'_>) -> Span<'_> {
    let result: IResult<Span<'_>, usize> = many0_count(alt((multispace1, comment)))(input);
    match result {
        Ok((rest, _)) => rest,
        Err(_) => input,
    }
}

fn number_literal(input: Span<'_>) -> IResult<Span<'_>, Span<'_>> {
    recognize(tuple((
        opt(one_of("+-")),
        digit1,
        opt(pair(char('.'), digit1)),
    )))(input)
}

/// A numeric literal. Integers are 64-bit signed where they fit, then unsigned, then floating
/// point. Anything with a fractional part is floating point.
pub fn number(input: Span<'_>) -> Result<(Span<'_>, Value), ParseError> {
    let malformed = || ParseError::MalformedNumber {
        location: Location::of(&input),
    };
    let (rest, literal) = number_literal(input).map_err(|_| malformed())?;
    let literal = *literal.fragment();
    let value = if literal.contains('.') {
        literal.parse::<f64>().map(Value::Float64)
    } else if let Ok(n) = literal.parse::<i64>() {
        Ok(Value::Int64(n))
    } else if let Ok(n) = literal.parse::<u64>() {
        Ok(Value::UInt64(n))
    } else {
        literal.parse::<f64>().map(Value::Float64)
    };
    value.map(|v| (rest, v)).map_err(|_| malformed())
}

fn simple_chars(input: Span<'_>) -> IResult<Span<'_>, Span<'_>> {
    take_while(is_simple_char)(input)
}

pub fn simple_string(input: Span<'_>) -> Result<(Span<'_>, &str), ParseError> {
    let result: IResult<Span<'_>, Span<'_>> =
        recognize(pair(satisfy(is_simple_start), simple_chars))(input);
    match result {
        Ok((rest, token)) => Ok((rest, *token.fragment())),
        Err(_) => Err(ParseError::UnexpectedCharacter {
            found: input.fragment().chars().next().unwrap_or_default(),
            location: Location::of(&input),
        }),
    }
}

/// A `#` followed by any run of identifier characters. The caller decides whether it is a
/// keyword.
pub fn hash_token(input: Span<'_>) -> (Span<'_>, &str) {
    let result: IResult<Span<'_>, Span<'_>> = recognize(pair(char('#'), simple_chars))(input);
    match result {
        Ok((rest, token)) => (rest, *token.fragment()),
        Err(_) => (input, ""),
    }
}

pub fn double_quoted(input: Span<'_>) -> Result<(Span<'_>, String), ParseError> {
    let text = *input.fragment();
    let mut output = String::new();
    let mut chars = text.char_indices().skip(1);
    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return Ok((input.take_split(i + 1).0, output)),
            '\\' => match chars.next() {
                Some((_, '"')) => output.push('"'),
                Some((_, '\\')) => output.push('\\'),
                Some((_, 'n')) => output.push('\n'),
                Some((_, 'r')) => output.push('\r'),
                Some((_, 't')) => output.push('\t'),
                Some((_, other)) => {
                    return Err(ParseError::InvalidEscape {
                        found: other,
                        location: Location::of(&input.take_split(i).0),
                    })
                }
                None => break,
            },
            _ => output.push(c),
        }
    }
    Err(ParseError::UnterminatedString {
        location: Location::of(&input),
    })
}

/// Single quoted strings have no escapes and end at the next `'`.
pub fn single_quoted(input: Span<'_>) -> Result<(Span<'_>, String), ParseError> {
    let text = *input.fragment();
    match text[1..].find('\'') {
        Some(end) => {
            let content = text[1..end + 1].to_string();
            Ok((input.take_split(end + 2).0, content))
        }
        None => Err(ParseError::UnterminatedString {
            location: Location::of(&input),
        }),
    }
}
