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

use crate::{MarkupError, MarkupResult};

/// Environment variable consulted by [`MarkupConfig::no_color_from_env`].
pub const NO_COLOR_VAR: &str = "NO_COLOR";

/// Color capability tier of the target terminal.
///
/// The depth selects which color table and which escape templates are used when a
/// symbolic color code is resolved. Literal `[#RRGGBB]` codes and format codes are not
/// affected by the depth.
///
/// | Depth       | Bits | Foreground           | Background           |
/// |-------------|------|----------------------|----------------------|
/// | `Basic`     | 3    | `ESC[<n>m`           | `ESC[<n+10>m`        |
/// | `Extended`  | 4    | `ESC[<n>m`           | `ESC[<n+10>m`        |
/// | `Indexed`   | 8    | `ESC[38;5;<n>m`      | `ESC[48;5;<n>m`      |
/// | `TrueColor` | 24   | `ESC[38;2;<r>;<g>;<b>m` | `ESC[48;2;<r>;<g>;<b>m` |
///
/// `Extended` is a declared tier without a table of its own; it shares the `Basic`
/// table and templates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorDepth {
    /// 3-bit, 8 basic colors.
    Basic,
    /// 4-bit, 16 colors.
    Extended,
    /// 8-bit, 256 color palette.
    Indexed,
    /// 24-bit RGB.
    #[default]
    TrueColor,
}

impl ColorDepth {
    /// Number of bits per color for this tier.
    pub fn bits(&self) -> u8 {
        match self {
            ColorDepth::Basic => 3,
            ColorDepth::Extended => 4,
            ColorDepth::Indexed => 8,
            ColorDepth::TrueColor => 24,
        }
    }

    /// Returns `true` for the tiers that encode colors as a single SGR parameter and
    /// select the background variant by adding 10 to it.
    pub fn uses_background_offset(&self) -> bool {
        matches!(self, ColorDepth::Basic | ColorDepth::Extended)
    }
}

impl TryFrom<u8> for ColorDepth {
    type Error = MarkupError;

    fn try_from(bits: u8) -> MarkupResult<Self> {
        match bits {
            3 => Ok(ColorDepth::Basic),
            4 => Ok(ColorDepth::Extended),
            8 => Ok(ColorDepth::Indexed),
            24 => Ok(ColorDepth::TrueColor),
            other => Err(MarkupError::UnsupportedDepth(other)),
        }
    }
}

impl std::fmt::Display for ColorDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// Configuration of a [`MarkupConverter`](crate::MarkupConverter).
///
/// A configuration is fixed once a converter is built from it. The `no_color` flag is
/// a plain value; callers that want to honour the environment should derive it with
/// [`MarkupConfig::no_color_from_env`] or [`parse_flag`] before construction.
///
/// # Examples
///
/// ```
/// use colormark_markup::{ColorDepth, MarkupConfig};
///
/// let config = MarkupConfig::default()
///     .with_marker('@')
///     .with_depth(ColorDepth::Indexed)
///     .with_no_reset(true);
/// assert_eq!(config.marker, '@');
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarkupConfig {
    /// Character that introduces every token
    pub marker: char,
    /// Color tier used for symbolic color codes
    pub depth: ColorDepth,
    /// Do not append a trailing reset token
    pub no_reset: bool,
    /// Strip all tokens instead of emitting escape sequences
    pub no_color: bool,
}

impl MarkupConfig {
    /// Configuration with the given marker and depth, resets enabled, colors enabled.
    pub fn new(marker: char, depth: ColorDepth) -> MarkupConfig {
        MarkupConfig {
            marker,
            depth,
            no_reset: false,
            no_color: false,
        }
    }

    /// Configuration that strips every token.
    pub fn plain() -> MarkupConfig {
        MarkupConfig {
            no_color: true,
            ..MarkupConfig::default()
        }
    }

    /// Replace the marker character.
    pub fn with_marker(mut self, marker: char) -> MarkupConfig {
        self.marker = marker;
        self
    }

    /// Replace the color depth.
    pub fn with_depth(mut self, depth: ColorDepth) -> MarkupConfig {
        self.depth = depth;
        self
    }

    /// Set whether the trailing reset token is suppressed.
    pub fn with_no_reset(mut self, no_reset: bool) -> MarkupConfig {
        self.no_reset = no_reset;
        self
    }

    /// Set whether color output is suppressed.
    pub fn with_no_color(mut self, no_color: bool) -> MarkupConfig {
        self.no_color = no_color;
        self
    }

    /// Reads [`NO_COLOR_VAR`] and interprets it with [`parse_flag`].
    ///
    /// An unset or non-unicode variable counts as `false`.
    pub fn no_color_from_env() -> bool {
        std::env::var(NO_COLOR_VAR)
            .map(|value| parse_flag(&value))
            .unwrap_or(false)
    }
}

impl Default for MarkupConfig {
    fn default() -> Self {
        MarkupConfig::new('&', ColorDepth::TrueColor)
    }
}

/// Interprets a flag value: `"1"` or `"true"` in any letter case are `true`, anything
/// else is `false`.
pub fn parse_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_from_bits() {
        assert_eq!(ColorDepth::try_from(3).unwrap(), ColorDepth::Basic);
        assert_eq!(ColorDepth::try_from(4).unwrap(), ColorDepth::Extended);
        assert_eq!(ColorDepth::try_from(8).unwrap(), ColorDepth::Indexed);
        assert_eq!(ColorDepth::try_from(24).unwrap(), ColorDepth::TrueColor);
        assert!(matches!(
            ColorDepth::try_from(16),
            Err(MarkupError::UnsupportedDepth(16))
        ));
    }

    #[test]
    fn test_depth_bits_roundtrip() {
        for depth in [
            ColorDepth::Basic,
            ColorDepth::Extended,
            ColorDepth::Indexed,
            ColorDepth::TrueColor,
        ] {
            assert_eq!(ColorDepth::try_from(depth.bits()).unwrap(), depth);
        }
    }

    #[test]
    fn test_background_offset_tiers() {
        assert!(ColorDepth::Basic.uses_background_offset());
        assert!(ColorDepth::Extended.uses_background_offset());
        assert!(!ColorDepth::Indexed.uses_background_offset());
        assert!(!ColorDepth::TrueColor.uses_background_offset());
    }

    #[test]
    fn test_default_config() {
        let config = MarkupConfig::default();
        assert_eq!(config.marker, '&');
        assert_eq!(config.depth, ColorDepth::TrueColor);
        assert!(!config.no_reset);
        assert!(!config.no_color);
        assert!(MarkupConfig::plain().no_color);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("true"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag("tRuE"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("yes"));
        assert!(!parse_flag(""));
        assert!(!parse_flag(" true"));
    }
}
