// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Unsigned decimal digit scanners
//!
//! Both scanners consume a maximal run of ASCII digits and stop at the first
//! other byte (or the end of the buffer). An empty run is a valid match with
//! value 0. There is no overflow detection: magnitudes past the accumulator
//! width wrap.
//!
//! The 32-bit scanner is enough for exponents and mesh indices. Mantissa
//! digits go through the 64-bit scanner so that long integer or fractional
//! runs keep their precision.

use crate::cursor::Cursor;

/// Scan digits into a `u32` accumulator, advancing the cursor past them
#[inline]
pub fn strtol10(cursor: &mut Cursor<'_>) -> u32 {
    let mut value: u32 = 0;
    while let Some(digit) = cursor.eat_digit() {
        value = value.wrapping_mul(10).wrapping_add(digit as u32);
    }
    value
}

/// Scan digits into a `u64` accumulator, advancing the cursor past them
#[inline]
pub fn strtol10_64(cursor: &mut Cursor<'_>) -> u64 {
    let mut value: u64 = 0;
    while let Some(digit) = cursor.eat_digit() {
        value = value.wrapping_mul(10).wrapping_add(digit as u64);
    }
    value
}

/// Slice form of [`strtol10`]: returns `(value, digits consumed)`
#[inline]
pub fn strtol10_slice(bytes: &[u8]) -> (u32, usize) {
    let mut cursor = Cursor::new(bytes);
    let value = strtol10(&mut cursor);
    (value, cursor.position())
}

/// Slice form of [`strtol10_64`]: returns `(value, digits consumed)`
#[inline]
pub fn strtol10_64_slice(bytes: &[u8]) -> (u64, usize) {
    let mut cursor = Cursor::new(bytes);
    let value = strtol10_64(&mut cursor);
    (value, cursor.position())
}
