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

//! Marker/code color markup for ANSI terminals.
//!
//! Text such as `"&3hello &~[#102030]world&r"` is converted into SGR escape sequences
//! for one of four color depths, or stripped back to plain text.

mod config;
mod consts;
mod converter;
mod pattern;
mod resolver;
mod result;
mod table;
mod template;
pub mod utility;

pub use self::config::{ColorDepth, MarkupConfig, NO_COLOR_VAR, parse_flag};
pub use self::consts::{BACKGROUND_MARKER, COLOR_CODES, FORMAT_CODES, RESET_CODE};
pub use self::converter::MarkupConverter;
pub use self::pattern::{MarkupPatterns, Token};
pub use self::resolver::resolve;
pub use self::result::{MarkupError, MarkupResult};
pub use self::table::{basic_color, format_attribute, indexed_color, rgb_color};
pub use self::template::Template;
pub use self::utility::{strip_escape_sequences, strip_markup};
