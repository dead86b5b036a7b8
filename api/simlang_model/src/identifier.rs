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

//! Classification of the bare (unquoted) strings of the SimFile grammar.

/// Keywords that would be misread as literals if a string with the same text were printed bare.
pub const KEYWORDS: [&str; 3] = ["#true", "#false", "#null"];

/// Determine if a character may start a simple string.
///
/// ```
/// use simlang_model::identifier::is_simple_start;
///
/// assert!(is_simple_start('a'));
/// assert!(is_simple_start('_'));
/// assert!(!is_simple_start('2'));
/// assert!(!is_simple_start('-'));
/// ```
pub fn is_simple_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Determine if a character may continue a simple string.
///
/// ```
/// use simlang_model::identifier::is_simple_char;
///
/// assert!(is_simple_char('a'));
/// assert!(is_simple_char('2'));
/// assert!(is_simple_char('-'));
/// assert!(!is_simple_char('@'));
/// ```
pub fn is_simple_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

/// Whether the text is one of the `#` keywords.
pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.contains(&text)
}

/// Determine if a string can be written without quotes and read back unchanged. This covers
/// identifier-shaped strings and `#` tokens that are not keywords.
///
/// ```
/// use simlang_model::identifier::is_simple_string;
///
/// assert!(is_simple_string("foo-bar_baz-123"));
/// assert!(is_simple_string("#type"));
/// assert!(!is_simple_string("#null"));
/// assert!(!is_simple_string("two words"));
/// assert!(!is_simple_string("-hello"));
/// ```
pub fn is_simple_string(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some('#') => !is_keyword(text) && chars.all(is_simple_char),
        Some(c) if is_simple_start(c) => chars.all(is_simple_char),
        _ => false,
    }
}
