// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fast Direct Parsing Module
//!
//! Buffer-level helpers for the tokenizers of text mesh formats: pull every
//! number out of a coordinate list or index list without building tokens.
//! All of them drive [`fast_atof_move`] or [`strtol10`] over one [`Cursor`]
//! and allocate nothing but the output vector.

use crate::atof::fast_atof_move;
use crate::cursor::Cursor;
use crate::digits::strtol10;

/// Tuning for the buffer-level scanners
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanConfig {
    /// Convert 1-based indices (STEP, OBJ) to 0-based
    pub one_based_indices: bool,
    /// Average bytes per float, including delimiters, for pre-allocation
    pub bytes_per_float: usize,
    /// Average bytes per index, including delimiters, for pre-allocation
    pub bytes_per_index: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            one_based_indices: true,
            bytes_per_float: 8,
            bytes_per_index: 4,
        }
    }
}

impl ScanConfig {
    #[inline]
    fn estimate_float_count(&self, bytes: &[u8]) -> usize {
        bytes.len() / self.bytes_per_float.max(1)
    }

    #[inline]
    fn estimate_int_count(&self, bytes: &[u8]) -> usize {
        bytes.len() / self.bytes_per_index.max(1)
    }
}

/// Check if byte is a digit, minus sign, or decimal point (start of number)
#[inline(always)]
pub fn is_number_start(b: u8) -> bool {
    b.is_ascii_digit() || b == b'-' || b == b'.'
}

/// Whether a consumed literal carries at least one mantissa digit
///
/// Exponent digits alone (`.e5`) do not count.
#[inline]
pub fn has_mantissa_digits(literal: &[u8]) -> bool {
    let mantissa_end = memchr::memchr(b'e', literal).unwrap_or(literal.len());
    literal[..mantissa_end].iter().any(u8::is_ascii_digit)
}

/// Lazy iterator over the floats in a buffer
///
/// Skips any bytes that cannot start a number, parses the next literal, and
/// yields it. The offset after each literal is available through
/// [`FloatScanner::position`], so a tokenizer can stop partway and carry on
/// with its own grammar.
#[derive(Debug, Clone)]
pub struct FloatScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> FloatScanner<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(bytes),
        }
    }

    /// Byte offset of the scanner within its buffer
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Skip to the next possible number start
    #[inline]
    fn skip_to_number(&mut self) -> bool {
        let rest = self.cursor.remaining();
        match rest.iter().position(|&b| is_number_start(b)) {
            Some(offset) => {
                self.cursor.seek(self.cursor.position() + offset);
                true
            }
            None => {
                self.cursor.seek(self.cursor.buffer().len());
                false
            }
        }
    }
}

impl Iterator for FloatScanner<'_> {
    type Item = f32;

    #[inline]
    fn next(&mut self) -> Option<f32> {
        while self.skip_to_number() {
            let start = self.cursor.position();
            let value = fast_atof_move(&mut self.cursor);

            // Lone '-' or '.' are separators, not numbers
            let literal = &self.cursor.buffer()[start..self.cursor.position()];
            if has_mantissa_digits(literal) {
                return Some(value);
            }

            tracing::trace!(offset = start, "skipping non-numeric bytes");
            if self.cursor.position() == start {
                self.cursor.bump();
            }
        }
        None
    }
}

/// Parse every float in `bytes` into a flat `Vec<f32>`
///
/// This parses coordinate data like:
/// `((0.,0.,150.),(0.,40.,140.),...)` or `v 0.5 1.0 -2.25`
///
/// Returns flattened f32 array: [x0, y0, z0, x1, y1, z1, ...]
#[inline]
pub fn parse_floats_direct(bytes: &[u8], config: &ScanConfig) -> Vec<f32> {
    let mut result = Vec::with_capacity(config.estimate_float_count(bytes));
    result.extend(FloatScanner::new(bytes));

    tracing::debug!(bytes = bytes.len(), floats = result.len(), "parsed float list");
    result
}

/// Parse every unsigned integer in `bytes` into a `Vec<u32>`
///
/// This parses face index data like:
/// `((1,2,3),(2,1,4),...)` or `f 1 2 3`
///
/// With [`ScanConfig::one_based_indices`] set, indices are shifted to 0-based
/// (saturating, so a stray 0 stays 0).
#[inline]
pub fn parse_indices_direct(bytes: &[u8], config: &ScanConfig) -> Vec<u32> {
    let mut result = Vec::with_capacity(config.estimate_int_count(bytes));
    let mut cursor = Cursor::new(bytes);

    loop {
        // Skip to next digit
        let offset = match cursor.remaining().iter().position(u8::is_ascii_digit) {
            Some(offset) => offset,
            None => break,
        };
        cursor.seek(cursor.position() + offset);

        let value = strtol10(&mut cursor);
        if config.one_based_indices {
            result.push(value.saturating_sub(1));
        } else {
            result.push(value);
        }
    }

    tracing::debug!(bytes = bytes.len(), indices = result.len(), "parsed index list");
    result
}

/// Find the outermost parenthesized list in an entity line
///
/// From `#78=IFCCARTESIANPOINTLIST3D(((0.,0.,150.),(100.,0.,0.)));` returns
/// the bytes from the first `(` to the last `)`, inclusive.
#[inline]
pub fn extract_parenthesized_list(bytes: &[u8]) -> Option<&[u8]> {
    let start = memchr::memchr(b'(', bytes)?;
    let end = memchr::memrchr(b')', bytes)?;

    if end <= start {
        return None;
    }

    Some(&bytes[start..=end])
}

/// Parse the coordinate list of a single entity line
#[inline]
pub fn extract_coordinate_list(bytes: &[u8], config: &ScanConfig) -> Option<Vec<f32>> {
    let list = extract_parenthesized_list(bytes)?;
    Some(parse_floats_direct(list, config))
}
