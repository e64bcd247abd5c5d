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

use crate::consts::{BACKGROUND_MARKER, COLOR_CODES, FORMAT_CODES, RESET_CODE};
use crate::pattern::{MarkupPatterns, Token};
use crate::resolver::resolve;
use crate::{MarkupConfig, MarkupResult};
use tracing::{debug, instrument};

/// Converts marker/code notation into ANSI escape sequences.
///
/// A converter is bound to one [`MarkupConfig`]. The token matchers are compiled once
/// from the configured marker and reused by every call, so a single converter can be
/// shared freely between threads.
///
/// # Examples
///
/// ```
/// use colormark_markup::{MarkupConfig, MarkupConverter};
///
/// let converter = MarkupConverter::new(MarkupConfig::default());
/// let output = converter.convert("hmm &3&oyes&r.").unwrap();
/// assert_eq!(output, "hmm \x1b[38;2;0;170;170m\x1b[3myes\x1b[0m.\x1b[0m");
/// ```
#[derive(Clone, Debug)]
pub struct MarkupConverter {
    config: MarkupConfig,
    patterns: MarkupPatterns,
}

impl MarkupConverter {
    /// Creates a converter for `config`.
    pub fn new(config: MarkupConfig) -> MarkupConverter {
        let patterns = MarkupPatterns::new(config.marker);
        MarkupConverter { config, patterns }
    }

    /// The configuration this converter was built with.
    pub fn config(&self) -> &MarkupConfig {
        &self.config
    }

    /// The compiled token matchers.
    pub fn patterns(&self) -> &MarkupPatterns {
        &self.patterns
    }

    /// Converts every token in `text`.
    ///
    /// With `no_color` set, tokens are removed and no escape sequence is emitted.
    /// Otherwise a reset token is appended unless `no_reset` is set or `text` already
    /// ends with one, then all symbolic tokens are replaced, and only afterwards all
    /// literal `[#RRGGBB]` tokens.
    ///
    /// # Errors
    ///
    /// Fails with [`MarkupError::InvalidCode`](crate::MarkupError::InvalidCode) on the
    /// first token that does not resolve; no partial output is returned.
    #[instrument(skip_all, fields(depth = %self.config.depth, marker = %self.config.marker))]
    pub fn convert(&self, text: &str) -> MarkupResult<String> {
        if self.config.no_color {
            debug!("color suppressed, stripping markup");
            return Ok(self.patterns.strip(text));
        }

        let mut source = text.to_string();
        let reset = self.token(RESET_CODE);
        if !self.config.no_reset && !source.ends_with(&reset) {
            source.push_str(&reset);
        }

        let depth = self.config.depth;
        let substitute = |token: Token<'_>| resolve(token.code, token.background, depth);
        let symbolic =
            MarkupPatterns::replace_tokens(self.patterns.symbolic(), &source, substitute)?;
        MarkupPatterns::replace_tokens(self.patterns.literal(), &symbolic, substitute)
    }

    /// Converts each argument independently, failing on the first invalid one.
    ///
    /// # Errors
    ///
    /// See [`MarkupConverter::convert`].
    pub fn convert_all<S: AsRef<str>>(&self, parts: &[S]) -> MarkupResult<Vec<String>> {
        parts
            .iter()
            .map(|part| self.convert(part.as_ref()))
            .collect()
    }

    /// Builds a line exercising every color, background and format code plus both
    /// literal forms, and converts it.
    ///
    /// # Errors
    ///
    /// See [`MarkupConverter::convert`].
    pub fn color_test(&self) -> MarkupResult<String> {
        let marker = self.config.marker;
        let reset = self.token(RESET_CODE);
        let mut line = String::new();
        for code in COLOR_CODES.chars() {
            line.push_str(&format!("{marker}{code}{code}{reset}"));
        }
        line.push(' ');
        for code in COLOR_CODES.chars() {
            line.push_str(&format!("{marker}{BACKGROUND_MARKER}{code}{code}{reset}"));
        }
        line.push(' ');
        for code in FORMAT_CODES.chars() {
            line.push_str(&format!("{marker}{code}{code}{reset}"));
        }
        line.push_str(&format!(
            " {marker}[#FF8800]hex{reset} {marker}{BACKGROUND_MARKER}[#0088FF]hex{reset}"
        ));
        self.convert(&line)
    }

    fn token(&self, code: char) -> String {
        format!("{}{}", self.config.marker, code)
    }
}

impl Default for MarkupConverter {
    fn default() -> Self {
        MarkupConverter::new(MarkupConfig::default())
    }
}

impl From<MarkupConfig> for MarkupConverter {
    fn from(config: MarkupConfig) -> Self {
        MarkupConverter::new(config)
    }
}
