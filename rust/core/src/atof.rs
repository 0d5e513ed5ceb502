// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Single-pass float parser
//!
//! Parses a decimal literal starting at the cursor without measuring the
//! input first, so parsing a short number inside a multi-megabyte buffer
//! costs only the bytes of that number.
//!
//! Grammar, each part optional:
//!
//! ```text
//! [-] digits [. digits] [e [-] digits]
//! ```
//!
//! Only a lowercase `e` starts an exponent and only `-` is recognised as a
//! sign, both for the mantissa and the exponent. Malformed input is never
//! rejected: whatever prefix matches is consumed and a best-effort value is
//! returned. Use [`crate::strict`] when validation is needed.

use crate::cursor::Cursor;
use crate::digits::{strtol10, strtol10_64};
use crate::table::fraction_scale;

/// Parse a float at the cursor and advance the cursor past it
///
/// The cursor ends immediately after the last byte that belongs to the
/// literal. If no digits follow, the result is 0.0 and only a leading `-`
/// (if present) is consumed.
///
/// # Example
/// ```
/// use fast_atof_core::{fast_atof_move, Cursor};
///
/// let mut cursor = Cursor::new(b"1.5 -2");
/// assert_eq!(fast_atof_move(&mut cursor), 1.5);
/// assert_eq!(cursor.position(), 3);
/// ```
#[inline]
pub fn fast_atof_move(cursor: &mut Cursor<'_>) -> f32 {
    let negative = cursor.eat(b'-');

    let mut value = strtol10_64(cursor) as f32;

    if cursor.eat(b'.') {
        let start = cursor.position();
        let magnitude = strtol10_64(cursor);
        let digits = cursor.position() - start;

        // Single precision loses accuracy past ~6 digits here, so only this
        // step is widened to f64.
        let fraction = magnitude as f64 * fraction_scale(digits);
        value += fraction as f32;
    }

    if cursor.eat(b'e') {
        let negative_exp = cursor.eat(b'-');
        let mut exp = strtol10(cursor) as f32;
        if negative_exp {
            exp = -exp;
        }
        value *= 10f32.powf(exp);
    }

    if negative {
        -value
    } else {
        value
    }
}

/// Parse a float from the start of `input`
///
/// Returns the value and the number of bytes consumed, so the caller can
/// resume tokenizing at `input[consumed..]`.
///
/// # Example
/// ```
/// use fast_atof_core::parse_partial;
///
/// let (value, consumed) = parse_partial("3.25,4.0");
/// assert_eq!(value, 3.25);
/// assert_eq!(consumed, 4);
/// ```
#[inline]
pub fn parse_partial<S: AsRef<[u8]>>(input: S) -> (f32, usize) {
    let mut cursor = Cursor::new(input.as_ref());
    let value = fast_atof_move(&mut cursor);
    (value, cursor.position())
}

/// Parse a float from the start of `input`, discarding the consumed length
///
/// For isolated tokens whose end is already known.
#[inline]
pub fn fast_atof<S: AsRef<[u8]>>(input: S) -> f32 {
    parse_partial(input).0
}
