// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for strict parsing
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the strict validation layer
///
/// The core parser itself never fails; these only come from [`crate::strict`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Empty input")]
    Empty,

    #[error("Byte {byte:#04x} cannot start a number")]
    InvalidStart { byte: u8 },

    #[error("No digits in numeric literal (consumed {consumed} bytes)")]
    NoDigits { consumed: usize },

    #[error("Trailing characters after number at byte {consumed} of {len}")]
    TrailingCharacters { consumed: usize, len: usize },
}
