// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fractional-magnitude table
//!
//! Places a fractional digit run at its decimal position with one multiply
//! instead of a per-digit division.

/// `FRACTION_TABLE[i] == 10^-i` for `i` in `0..16`
pub const FRACTION_TABLE: [f64; 16] = [
    1.0,
    0.1,
    0.01,
    0.001,
    0.0001,
    0.00001,
    0.000001,
    0.0000001,
    0.00000001,
    0.000000001,
    0.0000000001,
    0.00000000001,
    0.000000000001,
    0.0000000000001,
    0.00000000000001,
    0.000000000000001,
];

/// Highest digit count covered by [`FRACTION_TABLE`]
pub const MAX_TABLE_DIGITS: usize = FRACTION_TABLE.len() - 1;

/// Scale factor `10^-digits` for a fractional run of `digits` digits
///
/// Counts up to [`MAX_TABLE_DIGITS`] are a table lookup. Longer runs continue
/// from the last entry by repeated division, which underflows to 0.0 for
/// absurdly long runs rather than reading outside the table.
#[inline(always)]
pub fn fraction_scale(digits: usize) -> f64 {
    match FRACTION_TABLE.get(digits) {
        Some(&scale) => scale,
        None => extended_scale(digits),
    }
}

#[cold]
#[inline(never)]
fn extended_scale(digits: usize) -> f64 {
    let mut scale = FRACTION_TABLE[MAX_TABLE_DIGITS];
    for _ in MAX_TABLE_DIGITS..digits {
        scale /= 10.0;
        if scale == 0.0 {
            break;
        }
    }
    scale
}
