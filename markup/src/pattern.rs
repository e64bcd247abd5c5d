//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

use crate::consts::BACKGROUND_MARKER;
use regex::{Captures, Regex};

/// The two token matchers bound to one marker character.
///
/// - `symbolic` recognizes `<marker>[~]<code>` with `<code>` in `0-9`, `a-g`, `l-o` or `r`.
/// - `literal` recognizes `<marker>[~][#RRGGBB]`.
///
/// Both expose a `background` group, present when `~` follows the marker, and a `code`
/// group holding the code body. The marker is escaped before it is spliced into the
/// expressions, so metacharacters such as `$` or `.` are matched literally.
#[derive(Clone, Debug)]
pub struct MarkupPatterns {
    marker: char,
    symbolic: Regex,
    literal: Regex,
}

/// A token found by one of the [`MarkupPatterns`] matchers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// Code body without marker, background flag or brackets
    pub code: &'a str,
    /// Whether the background marker was present
    pub background: bool,
}

impl<'a> Token<'a> {
    fn from_captures(captures: &Captures<'a>) -> Token<'a> {
        Token {
            code: captures.name("code").map_or("", |code| code.as_str()),
            background: captures.name("background").is_some(),
        }
    }
}

impl MarkupPatterns {
    /// Compiles both matchers for `marker`.
    pub fn new(marker: char) -> MarkupPatterns {
        let escaped = regex::escape(marker.encode_utf8(&mut [0; 4]));
        let background = regex::escape(BACKGROUND_MARKER.encode_utf8(&mut [0; 4]));
        MarkupPatterns {
            marker,
            symbolic: compile(&format!(
                r"{escaped}(?P<background>{background})?(?P<code>[0-9a-gl-or])"
            )),
            literal: compile(&format!(
                r"{escaped}(?P<background>{background})?\[#(?P<code>[0-9a-fA-F]{{6}})\]"
            )),
        }
    }

    /// The marker these patterns were compiled for.
    pub fn marker(&self) -> char {
        self.marker
    }

    /// Matcher for the single character form.
    pub fn symbolic(&self) -> &Regex {
        &self.symbolic
    }

    /// Matcher for the bracketed hex form.
    pub fn literal(&self) -> &Regex {
        &self.literal
    }

    /// Rewrites every match of `pattern` in `text` with `replace`, stopping at the first
    /// error. Matches are global and non-overlapping, scanned left to right.
    pub fn replace_tokens<E>(
        pattern: &Regex,
        text: &str,
        mut replace: impl FnMut(Token<'_>) -> Result<String, E>,
    ) -> Result<String, E> {
        let mut output = String::with_capacity(text.len());
        let mut last = 0;
        for captures in pattern.captures_iter(text) {
            let whole = captures.get_match();
            output.push_str(&text[last..whole.start()]);
            output.push_str(&replace(Token::from_captures(&captures))?);
            last = whole.end();
        }
        output.push_str(&text[last..]);
        Ok(output)
    }

    /// Removes every token, symbolic form first, then literal form.
    ///
    /// Removal repeats until nothing matches, so a stray marker left next to a code by
    /// an earlier removal (`&&33`) is removed too and the result is stable.
    pub fn strip(&self, text: &str) -> String {
        let mut current = text.to_string();
        loop {
            let without_symbolic = self.symbolic.replace_all(&current, "");
            let stripped = self.literal.replace_all(&without_symbolic, "").into_owned();
            if stripped.len() == current.len() {
                return stripped;
            }
            current = stripped;
        }
    }
}

// Only the escaped marker varies, which always yields a valid expression.
#[allow(clippy::expect_used)]
fn compile(expression: &str) -> Regex {
    Regex::new(expression).expect("markup pattern must compile")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens<'a>(pattern: &Regex, text: &'a str) -> Vec<Token<'a>> {
        pattern
            .captures_iter(text)
            .map(|captures| Token::from_captures(&captures))
            .collect()
    }

    #[test]
    fn test_symbolic_matches() {
        let patterns = MarkupPatterns::new('&');
        let found = tokens(patterns.symbolic(), "&3a&~fb&lc&rd");
        assert_eq!(
            found,
            vec![
                Token { code: "3", background: false },
                Token { code: "f", background: true },
                Token { code: "l", background: false },
                Token { code: "r", background: false },
            ]
        );
    }

    #[test]
    fn test_symbolic_rejects_other_letters() {
        let patterns = MarkupPatterns::new('&');
        for text in ["&h", "&k", "&p", "&z", "&A", "&~", "& 3"] {
            assert!(!patterns.symbolic().is_match(text), "{text}");
        }
    }

    #[test]
    fn test_literal_matches() {
        let patterns = MarkupPatterns::new('&');
        let found = tokens(patterns.literal(), "&[#00aaFF]x&~[#123456]");
        assert_eq!(
            found,
            vec![
                Token { code: "00aaFF", background: false },
                Token { code: "123456", background: true },
            ]
        );
    }

    #[test]
    fn test_literal_requires_six_digits() {
        let patterns = MarkupPatterns::new('&');
        for text in ["&[#12345]", "&[#1234567]", "&[#12345g]", "&[123456]", "&#123456"] {
            assert!(!patterns.literal().is_match(text), "{text}");
        }
    }

    #[test]
    fn test_literal_is_not_symbolic() {
        let patterns = MarkupPatterns::new('&');
        assert!(!patterns.symbolic().is_match("&[#123456]"));
        assert!(!patterns.symbolic().is_match("&~[#123456]"));
    }

    #[test]
    fn test_metacharacter_markers() {
        for marker in ['$', '.', '*', '+', '?', '^', '|', '\\', '(', '['] {
            let patterns = MarkupPatterns::new(marker);
            let text = format!("x{marker}3y{marker}~[#010203]");
            assert_eq!(tokens(patterns.symbolic(), &text).len(), 1, "{marker}");
            assert_eq!(tokens(patterns.literal(), &text).len(), 1, "{marker}");
            assert!(!patterns.symbolic().is_match("x3y"), "{marker}");
        }
    }

    #[test]
    fn test_replace_tokens_stops_on_error() {
        let patterns = MarkupPatterns::new('&');
        let result: Result<String, String> =
            MarkupPatterns::replace_tokens(patterns.symbolic(), "&1 &2 &3", |token| {
                if token.code == "2" {
                    Err(token.code.to_string())
                } else {
                    Ok(String::from("<>"))
                }
            });
        assert_eq!(result, Err(String::from("2")));
    }

    #[test]
    fn test_strip() {
        let patterns = MarkupPatterns::new('!');
        assert_eq!(patterns.strip("i'm !4!lballing!r!"), "i'm balling!");
        assert_eq!(patterns.strip("!~[#FFFFFF]white!~0"), "white");
    }

    #[test]
    fn test_strip_removes_joined_tokens() {
        let patterns = MarkupPatterns::new('&');
        assert_eq!(patterns.strip("&&33"), "");
        assert_eq!(patterns.strip("&&[#000000]3x"), "x");
        assert_eq!(patterns.strip("&[#&1123456]"), "");
        assert_eq!(patterns.strip("&&z"), "&&z");
    }
}
