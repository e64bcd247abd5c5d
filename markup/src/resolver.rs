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

use crate::consts::BACKGROUND_OFFSET;
use crate::table::{basic_color, format_attribute, indexed_color, rgb_color};
use crate::template::Template;
use crate::{ColorDepth, MarkupError, MarkupResult};
use tracing::{debug, trace};

/// Resolves a code body into an escape sequence fragment.
///
/// The decision order is fixed:
///
/// 1. Six hex digits are a literal RGB color, rendered with the 24-bit templates at every
///    depth.
/// 2. A format code is rendered as a bare SGR attribute. Depth and `background` are
///    ignored.
/// 3. Anything else is a symbolic color looked up in the table for `depth`. At 3 and
///    4 bits the background variant is the foreground parameter plus 10.
///
/// # Errors
///
/// Returns [`MarkupError::InvalidCode`] when the code does not resolve at `depth`.
pub fn resolve(code: &str, background: bool, depth: ColorDepth) -> MarkupResult<String> {
    if let Some((r, g, b)) = parse_hex(code) {
        return Ok(Template::select(ColorDepth::TrueColor, background).fill_rgb(r, g, b));
    }

    let invalid = || MarkupError::InvalidCode {
        code: code.to_string(),
        depth,
    };
    let mut chars = code.chars();
    let (Some(symbol), None) = (chars.next(), chars.next()) else {
        debug!(code, %depth, "invalid code");
        return Err(invalid());
    };

    if let Some(attribute) = format_attribute(symbol) {
        return Ok(Template::ATTRIBUTE.fill_single(attribute));
    }

    let template = Template::select(depth, background);
    let fragment = match depth {
        ColorDepth::TrueColor => rgb_color(symbol).map(|(r, g, b)| template.fill_rgb(r, g, b)),
        ColorDepth::Indexed => indexed_color(symbol).map(|index| template.fill_single(index)),
        ColorDepth::Basic | ColorDepth::Extended => basic_color(symbol).map(|parameter| {
            if background && depth.uses_background_offset() {
                template.fill_single(parameter + BACKGROUND_OFFSET)
            } else {
                template.fill_single(parameter)
            }
        }),
    };
    let Some(fragment) = fragment else {
        debug!(code, %depth, "invalid code");
        return Err(invalid());
    };
    trace!(code, background, %depth, "resolved symbolic color");
    Ok(fragment)
}

/// Parses `RRGGBB` into its channels.
fn parse_hex(code: &str) -> Option<(u8, u8, u8)> {
    if code.len() != 6 || !code.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&code[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
