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

//! Static color and format tables.
//!
//! | Code | 3/4-bit | 8-bit | 24-bit    |
//! |------|---------|-------|-----------|
//! | `0`  | `30`    | `0`   | `#000000` |
//! | `1`  | `34`    | `19`  | `#0000AA` |
//! | `2`  | `32`    | `34`  | `#00AA00` |
//! | `3`  | `36`    | `37`  | `#00AAAA` |
//! | `4`  | `31`    | `124` | `#AA0000` |
//! | `5`  | `35`    | `127` | `#AA00AA` |
//! | `6`  | `33`    | `214` | `#FFAA00` |
//! | `7`  | `37`    | `248` | `#AAAAAA` |
//! | `8`  | `30`    | `240` | `#555555` |
//! | `9`  | `34`    | `147` | `#5555FF` |
//! | `a`  | `32`    | `83`  | `#55FF55` |
//! | `b`  | `36`    | `87`  | `#55FFFF` |
//! | `c`  | `31`    | `203` | `#FF5555` |
//! | `d`  | `35`    | `207` | `#FF55FF` |
//! | `e`  | `33`    | `227` | `#FFFF55` |
//! | `f`  | `37`    | `15`  | `#FFFFFF` |
//! | `g`  | `33`    | `184` | `#DDD605` |
//!
//! | Code | Attribute     | SGR |
//! |------|---------------|-----|
//! | `l`  | Bold          | `1` |
//! | `m`  | Strikethrough | `9` |
//! | `n`  | Underline     | `4` |
//! | `o`  | Italic        | `3` |
//! | `r`  | Reset         | `0` |

const BASIC_COLORS: [(char, u8); 17] = [
    ('0', 30),
    ('1', 34),
    ('2', 32),
    ('3', 36),
    ('4', 31),
    ('5', 35),
    ('6', 33),
    ('7', 37),
    ('8', 30),
    ('9', 34),
    ('a', 32),
    ('b', 36),
    ('c', 31),
    ('d', 35),
    ('e', 33),
    ('f', 37),
    ('g', 33),
];

const INDEXED_COLORS: [(char, u8); 17] = [
    ('0', 0),
    ('1', 19),
    ('2', 34),
    ('3', 37),
    ('4', 124),
    ('5', 127),
    ('6', 214),
    ('7', 248),
    ('8', 240),
    ('9', 147),
    ('a', 83),
    ('b', 87),
    ('c', 203),
    ('d', 207),
    ('e', 227),
    ('f', 15),
    ('g', 184),
];

const RGB_COLORS: [(char, (u8, u8, u8)); 17] = [
    ('0', (0x00, 0x00, 0x00)),
    ('1', (0x00, 0x00, 0xAA)),
    ('2', (0x00, 0xAA, 0x00)),
    ('3', (0x00, 0xAA, 0xAA)),
    ('4', (0xAA, 0x00, 0x00)),
    ('5', (0xAA, 0x00, 0xAA)),
    ('6', (0xFF, 0xAA, 0x00)),
    ('7', (0xAA, 0xAA, 0xAA)),
    ('8', (0x55, 0x55, 0x55)),
    ('9', (0x55, 0x55, 0xFF)),
    ('a', (0x55, 0xFF, 0x55)),
    ('b', (0x55, 0xFF, 0xFF)),
    ('c', (0xFF, 0x55, 0x55)),
    ('d', (0xFF, 0x55, 0xFF)),
    ('e', (0xFF, 0xFF, 0x55)),
    ('f', (0xFF, 0xFF, 0xFF)),
    ('g', (0xDD, 0xD6, 0x05)),
];

const FORMATS: [(char, u8); 5] = [('l', 1), ('m', 9), ('n', 4), ('o', 3), ('r', 0)];

fn lookup<T: Copy>(table: &[(char, T)], code: char) -> Option<T> {
    table
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, value)| *value)
}

/// SGR foreground parameter of `code` for the 3 and 4-bit tiers.
pub fn basic_color(code: char) -> Option<u8> {
    lookup(&BASIC_COLORS, code)
}

/// 256-color palette index of `code`.
pub fn indexed_color(code: char) -> Option<u8> {
    lookup(&INDEXED_COLORS, code)
}

/// RGB triple of `code` for the 24-bit tier.
pub fn rgb_color(code: char) -> Option<(u8, u8, u8)> {
    lookup(&RGB_COLORS, code)
}

/// SGR attribute number of a format `code`.
pub fn format_attribute(code: char) -> Option<u8> {
    lookup(&FORMATS, code)
}
