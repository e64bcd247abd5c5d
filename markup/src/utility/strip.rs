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

use crate::pattern::MarkupPatterns;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Escape sequences emitted by a converter:
/// - bare attributes and 3/4-bit colors: `ESC[<n>m`
/// - 256-color: `ESC[38;5;<n>m`, `ESC[48;5;<n>m`
/// - 24-bit: `ESC[38;2;<r>;<g>;<b>m`, `ESC[48;2;<r>;<g>;<b>m`
#[allow(clippy::expect_used)]
static ESCAPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"\x1b\[[0-9]+m",
        r"|\x1b\[[34]8;5;[0-9]+m",
        r"|\x1b\[[34]8;2;[0-9]+;[0-9]+;[0-9]+m",
    ))
    .expect("escape sequence regex must compile")
});

/// Removes all markup tokens for `marker` without resolving them.
///
/// Symbolic tokens are removed first, then literal `[#RRGGBB]` tokens. Unknown codes
/// are not tokens and are left in place.
///
/// # Examples
///
/// ```
/// use colormark_markup::strip_markup;
///
/// assert_eq!(strip_markup("i'm !4!lballing!r!", '!'), "i'm balling!");
/// ```
pub fn strip_markup(text: &str, marker: char) -> String {
    MarkupPatterns::new(marker).strip(text)
}

/// Removes the color and attribute sequences a converter emits.
///
/// Other escape sequences, such as cursor movement, are left untouched. Returns a
/// borrowed string when nothing had to be removed.
///
/// # Examples
///
/// ```
/// use colormark_markup::strip_escape_sequences;
///
/// let converted = "hmm \x1b[38;2;0;170;170m\x1b[3myes\x1b[0m.\x1b[0m";
/// assert_eq!(strip_escape_sequences(converted), "hmm yes.");
/// ```
pub fn strip_escape_sequences(text: &str) -> Cow<'_, str> {
    if !text.contains('\x1b') {
        return Cow::Borrowed(text);
    }
    ESCAPE_REGEX.replace_all(text, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markup() {
        assert_eq!(strip_markup("i'm !4!lballing!r!", '!'), "i'm balling!");
        assert_eq!(strip_markup("&~[#ABCDEF]x&[#000000]y&~g", '&'), "xy");
        assert_eq!(strip_markup("&z stays", '&'), "&z stays");
        assert_eq!(strip_markup("no markup", '&'), "no markup");
    }

    #[test]
    fn test_strip_markup_is_stable() {
        let once = strip_markup("&&33 &&&lll", '&');
        assert_eq!(once, " ");
        assert_eq!(strip_markup(&once, '&'), once);
    }

    #[test]
    fn test_strip_markup_ignores_other_markers() {
        assert_eq!(strip_markup("&3@3", '@'), "&3");
    }

    #[test]
    fn test_strip_escape_sequences() {
        assert_eq!(
            strip_escape_sequences("hmm \x1b[38;2;0;170;170m\x1b[3myes\x1b[0m.\x1b[0m"),
            "hmm yes."
        );
        assert_eq!(
            strip_escape_sequences("\x1b[48;5;214mA\x1b[38;5;0mB\x1b[101mC"),
            "ABC"
        );
    }

    #[test]
    fn test_strip_escape_sequences_borrows_plain_text() {
        let result = strip_escape_sequences("Plain Text");
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, "Plain Text");
    }

    #[test]
    fn test_strip_escape_sequences_keeps_other_sequences() {
        assert_eq!(strip_escape_sequences("\x1b[2Aup\x1b[1m"), "\x1b[2Aup");
        assert_eq!(strip_escape_sequences("\x1b[1;31mx"), "\x1b[1;31mx");
    }
}
