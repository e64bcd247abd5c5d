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

//! Error types for the markup crate.
//!
//! Conversion is all-or-nothing: the first token that fails to resolve aborts the whole
//! call and is reported through [`MarkupError::InvalidCode`].

use crate::ColorDepth;
use thiserror::Error;

/// Result type alias for operations that may fail with a [`MarkupError`].
pub type MarkupResult<T> = Result<T, MarkupError>;

/// Errors that can occur while converting markup.
#[derive(Debug, Error)]
pub enum MarkupError {
    /// A scanned token's code does not resolve for the active color depth.
    ///
    /// This covers unknown code characters as well as codes that only exist at a
    /// different depth.
    #[error("Invalid code '{code}' for {depth} color depth")]
    InvalidCode {
        /// The offending code body, without marker or background flag
        code: String,
        /// The color depth the code was resolved against
        depth: ColorDepth,
    },

    /// A numeric color depth outside of 3, 4, 8 and 24 bits.
    #[error("Unsupported color depth: {0} bits")]
    UnsupportedDepth(u8),
}

impl MarkupError {
    /// Returns the offending code if this is an [`MarkupError::InvalidCode`].
    pub fn code(&self) -> Option<&str> {
        match self {
            MarkupError::InvalidCode { code, .. } => Some(code.as_str()),
            MarkupError::UnsupportedDepth(_) => None,
        }
    }
}
