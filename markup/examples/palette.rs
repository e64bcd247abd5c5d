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

//! Prints the color test line at every depth, or converts the given arguments.
//!
//! ```text
//! cargo run --example palette
//! cargo run --example palette -- 8 "&~1&e warning &r"
//! NO_COLOR=1 cargo run --example palette -- 24 "&4plain"
//! ```

use colormark_markup::{ColorDepth, MarkupConfig, MarkupConverter};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let no_color = MarkupConfig::no_color_from_env();
    let mut args = std::env::args().skip(1);

    if let Some(bits) = args.next() {
        let depth = ColorDepth::try_from(bits.parse::<u8>()?)?;
        let converter = MarkupConverter::new(
            MarkupConfig::default()
                .with_depth(depth)
                .with_no_color(no_color),
        );
        let parts: Vec<String> = args.collect();
        info!(%depth, no_color, count = parts.len(), "Converting arguments");
        println!("{}", converter.convert_all(&parts)?.join(" "));
        return Ok(());
    }

    for depth in [
        ColorDepth::Basic,
        ColorDepth::Extended,
        ColorDepth::Indexed,
        ColorDepth::TrueColor,
    ] {
        let converter = MarkupConverter::new(
            MarkupConfig::default()
                .with_depth(depth)
                .with_no_color(no_color),
        );
        println!("{:>6}: {}", depth.to_string(), converter.color_test()?);
    }
    Ok(())
}
