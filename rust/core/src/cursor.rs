// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Read cursor over a caller-owned byte buffer
//!
//! A `Cursor` is a bounds-described view: the borrowed slice plus the current
//! offset. Reading at or past the end of the slice yields `None`, which every
//! scanner treats like any other byte that cannot extend a match. Parsers can
//! therefore never read outside the buffer, and the buffer does not need a
//! terminator.

/// Zero-copy read position into a byte buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `bytes`
    #[inline]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Create a cursor at `pos`, clamped to the end of `bytes`
    #[inline]
    pub fn at(bytes: &'a [u8], pos: usize) -> Self {
        Self {
            bytes,
            pos: pos.min(bytes.len()),
        }
    }

    /// Current offset from the start of the buffer
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The whole underlying buffer
    #[inline]
    pub fn buffer(&self) -> &'a [u8] {
        self.bytes
    }

    /// Bytes from the current offset to the end of the buffer
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Byte under the cursor, `None` at end of buffer
    #[inline(always)]
    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Advance one byte (no-op at end of buffer)
    #[inline(always)]
    pub fn bump(&mut self) {
        if self.pos < self.bytes.len() {
            self.pos += 1;
        }
    }

    /// Consume `expected` if it is the byte under the cursor
    #[inline(always)]
    pub fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume the byte under the cursor if it is an ASCII digit, returning its value
    #[inline(always)]
    pub fn eat_digit(&mut self) -> Option<u8> {
        let digit = self.peek()?.wrapping_sub(b'0');
        if digit < 10 {
            self.pos += 1;
            Some(digit)
        } else {
            None
        }
    }

    /// Move the cursor to `pos`, clamped to the end of the buffer
    #[inline]
    pub fn seek(&mut self, pos: usize) {
        self.pos = pos.min(self.bytes.len());
    }
}
