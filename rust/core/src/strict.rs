// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Optional validation on top of the permissive parser
//!
//! The core always returns a number. Callers that must know whether a token
//! actually was numeric go through these wrappers instead; the parsed value
//! is identical to [`crate::fast_atof`] whenever validation passes.

use crate::atof::parse_partial;
use crate::error::{Error, Result};
use crate::fast_parse::{has_mantissa_digits, is_number_start};

/// Parse a numeric prefix of `input`, returning the value and bytes consumed
///
/// Fails if `input` is empty, starts with a byte that cannot begin a number,
/// or has no mantissa digits. Trailing bytes after the literal are allowed.
pub fn parse_f32_prefix_strict<S: AsRef<[u8]>>(input: S) -> Result<(f32, usize)> {
    let bytes = input.as_ref();
    let first = *bytes.first().ok_or(Error::Empty)?;

    if !is_number_start(first) {
        tracing::debug!(byte = first, "rejected numeric literal: invalid start");
        return Err(Error::InvalidStart { byte: first });
    }

    let (value, consumed) = parse_partial(bytes);

    if !has_mantissa_digits(&bytes[..consumed]) {
        tracing::debug!(consumed, "rejected numeric literal: no digits");
        return Err(Error::NoDigits { consumed });
    }

    Ok((value, consumed))
}

/// Parse `input` as exactly one numeric literal
///
/// Same checks as [`parse_f32_prefix_strict`], and additionally rejects any
/// bytes left over after the literal.
pub fn parse_f32_strict<S: AsRef<[u8]>>(input: S) -> Result<f32> {
    let bytes = input.as_ref();
    let (value, consumed) = parse_f32_prefix_strict(bytes)?;

    if consumed != bytes.len() {
        tracing::debug!(
            consumed,
            len = bytes.len(),
            "rejected numeric literal: trailing characters"
        );
        return Err(Error::TrailingCharacters {
            consumed,
            len: bytes.len(),
        });
    }

    Ok(value)
}
