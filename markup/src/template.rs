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

use crate::ColorDepth;

const PLACEHOLDER: &str = "{}";

/// An escape sequence skeleton with `{}` placeholders.
///
/// Templates are trusted: a single-value template carries exactly one placeholder and an
/// RGB template exactly three.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Template(&'static str);

impl Template {
    /// Bare SGR attribute, `ESC[<n>m`. Also the 3/4-bit color shape.
    pub const ATTRIBUTE: Template = Template("\x1b[{}m");
    /// 256-color foreground, `ESC[38;5;<n>m`.
    pub const INDEXED_FOREGROUND: Template = Template("\x1b[38;5;{}m");
    /// 256-color background, `ESC[48;5;<n>m`.
    pub const INDEXED_BACKGROUND: Template = Template("\x1b[48;5;{}m");
    /// RGB foreground, `ESC[38;2;<r>;<g>;<b>m`.
    pub const RGB_FOREGROUND: Template = Template("\x1b[38;2;{};{};{}m");
    /// RGB background, `ESC[48;2;<r>;<g>;<b>m`.
    pub const RGB_BACKGROUND: Template = Template("\x1b[48;2;{};{};{}m");

    /// Replaces the placeholder with `value`.
    pub fn fill_single(&self, value: u8) -> String {
        self.0.replacen(PLACEHOLDER, &value.to_string(), 1)
    }

    /// Replaces the three placeholders with `r`, `g` and `b` in order.
    pub fn fill_rgb(&self, r: u8, g: u8, b: u8) -> String {
        [r, g, b].iter().fold(self.0.to_string(), |filled, channel| {
            filled.replacen(PLACEHOLDER, &channel.to_string(), 1)
        })
    }

    /// Foreground and background templates used for symbolic colors at `depth`.
    pub fn for_depth(depth: ColorDepth) -> (Template, Template) {
        match depth {
            ColorDepth::Basic | ColorDepth::Extended => (Template::ATTRIBUTE, Template::ATTRIBUTE),
            ColorDepth::Indexed => (Template::INDEXED_FOREGROUND, Template::INDEXED_BACKGROUND),
            ColorDepth::TrueColor => (Template::RGB_FOREGROUND, Template::RGB_BACKGROUND),
        }
    }

    /// Picks the foreground or background template for `depth`.
    pub fn select(depth: ColorDepth, background: bool) -> Template {
        let (foreground, background_template) = Template::for_depth(depth);
        if background {
            background_template
        } else {
            foreground
        }
    }
}
