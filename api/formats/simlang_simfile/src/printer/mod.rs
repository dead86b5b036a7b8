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

use simlang_model::{write_string_literal, Value};

/// The number of fractional digits printed when no limit is configured.
pub const UNLIMITED_FRACTION_DIGITS: usize = 17;

const INDENT: usize = 2;

/// Controls the textual form produced by the printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrintOptions {
    /// Fractional digits beyond this are truncated. `None` prints as many as are needed, up to
    /// [`UNLIMITED_FRACTION_DIGITS`].
    pub max_fraction_digits: Option<usize>,
    /// Print map entries ordered by the printed text of their keys.
    pub sort_map_keys: bool,
}

impl PrintOptions {
    pub fn with_max_fraction_digits(mut self, digits: Option<usize>) -> Self {
        self.max_fraction_digits = digits;
        self
    }

    pub fn with_sorted_keys(mut self, sort_map_keys: bool) -> Self {
        self.sort_map_keys = sort_map_keys;
        self
    }
}

/// Print the SimFile representation of a [`Value`] with the default options.
pub fn print_simfile(value: &Value) -> impl Display + '_ {
    SimFilePrint(value, PrintOptions::default())
}

/// Print the SimFile representation of a [`Value`].
pub fn print_simfile_with(value: &Value, options: PrintOptions) -> impl Display + '_ {
    SimFilePrint(value, options)
}

/// Render a value as SimFile text with the default options.
///
/// ```
/// use simlang_model::{list, Value};
/// use simlang_simfile::print;
///
/// assert_eq!(print(&Value::Float64(1.0e10)), "10000000000");
/// assert_eq!(print(&list![1i64, list![2i64]]), "[\n  1\n  [ 2 ]\n]");
/// ```
pub fn print(value: &Value) -> String {
    print_simfile(value).to_string()
}

pub fn print_with(value: &Value, options: PrintOptions) -> String {
    print_simfile_with(value, options).to_string()
}

struct SimFilePrint<'a>(&'a Value, PrintOptions);

impl<'a> Display for SimFilePrint<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let SimFilePrint(value, options) = self;
        Printer {
            fmt: f,
            options: *options,
        }
        .write_value(value, 0)
    }
}

struct Printer<'a, 'b> {
    fmt: &'a mut Formatter<'b>,
    options: PrintOptions,
}

impl<'a, 'b> Printer<'a, 'b> {
    fn write_value(&mut self, value: &Value, depth: usize) -> std::fmt::Result {
        match value {
            Value::Null => self.fmt.write_str("#null"),
            Value::Bool(true) => self.fmt.write_str("#true"),
            Value::Bool(false) => self.fmt.write_str("#false"),
            Value::Int64(n) => write!(self.fmt, "{}", n),
            Value::UInt64(n) => write!(self.fmt, "{}", n),
            Value::Float64(x) => self
                .fmt
                .write_str(&format_float(*x, self.options.max_fraction_digits)),
            Value::String(s) => write_string_literal(s, self.fmt),
            Value::List(items) => self.write_list(items, depth),
            Value::Map(entries) => self.write_map(entries, depth),
        }
    }

    fn indent(&mut self, depth: usize) -> std::fmt::Result {
        write!(self.fmt, "{:width$}", "", width = depth * INDENT)
    }

    fn write_list(&mut self, items: &[Value], depth: usize) -> std::fmt::Result {
        if items.is_empty() {
            return self.fmt.write_str("[]");
        }
        if items.iter().all(|item| !item.is_container()) {
            self.fmt.write_str("[")?;
            for item in items {
                self.fmt.write_str(" ")?;
                self.write_value(item, depth)?;
            }
            self.fmt.write_str(" ]")
        } else {
            self.fmt.write_str("[\n")?;
            for item in items {
                self.indent(depth + 1)?;
                self.write_value(item, depth + 1)?;
                self.fmt.write_str("\n")?;
            }
            self.indent(depth)?;
            self.fmt.write_str("]")
        }
    }

    fn write_map(&mut self, entries: &[(Value, Value)], depth: usize) -> std::fmt::Result {
        if entries.is_empty() {
            return self.fmt.write_str("{}");
        }
        let mut ordered: Vec<&(Value, Value)> = entries.iter().collect();
        if self.options.sort_map_keys {
            let options = self.options;
            ordered.sort_by_cached_key(|(key, _)| print_with(key, options));
        }
        let flat = ordered
            .iter()
            .all(|(key, value)| !key.is_container() && !value.is_container());
        if flat {
            self.fmt.write_str("{")?;
            for (key, value) in ordered {
                self.fmt.write_str(" ")?;
                self.write_value(key, depth)?;
                self.fmt.write_str(" ")?;
                self.write_value(value, depth)?;
            }
            self.fmt.write_str(" }")
        } else {
            self.fmt.write_str("{\n")?;
            for (key, value) in ordered {
                self.indent(depth + 1)?;
                self.write_value(key, depth + 1)?;
                self.fmt.write_str(" ")?;
                self.write_value(value, depth + 1)?;
                self.fmt.write_str("\n")?;
            }
            self.indent(depth)?;
            self.fmt.write_str("}")
        }
    }
}

/// Format a float in positional notation. Fractional digits past the limit are dropped, not
/// rounded, and trailing zeros are trimmed. The integral part is always printed in full.
pub fn format_float(x: f64, max_fraction_digits: Option<usize>) -> String {
    if !x.is_finite() {
        return x.to_string();
    }
    let limit = max_fraction_digits.unwrap_or(UNLIMITED_FRACTION_DIGITS);
    let repr = x.to_string();
    let printed = match repr.split_once('.') {
        Some((integral, fraction)) => {
            let fraction = fraction[..fraction.len().min(limit)].trim_end_matches('0');
            if fraction.is_empty() {
                integral.to_string()
            } else {
                format!("{}.{}", integral, fraction)
            }
        }
        None => repr,
    };
    if printed == "-0" {
        "0".to_string()
    } else {
        printed
    }
}
