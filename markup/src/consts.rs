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

/// Symbolic color codes, in palette order.
pub const COLOR_CODES: &str = "0123456789abcdefg";

/// Symbolic format codes: bold, strikethrough, underline, italic and reset.
pub const FORMAT_CODES: &str = "lmnor";

/// Character placed between the marker and the code to select the background.
pub const BACKGROUND_MARKER: char = '~';

/// Code that resets all attributes.
pub const RESET_CODE: char = 'r';

/// Added to a 3/4-bit foreground SGR parameter to obtain its background parameter.
pub const BACKGROUND_OFFSET: u8 = 10;
