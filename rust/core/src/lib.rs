// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Fast-Atof Core
//!
//! Single-pass ASCII-to-float parsing for text-based 3D asset formats.
//!
//! ## Overview
//!
//! Text model formats (OBJ, STEP, ASCII PLY, ...) are mostly numbers, and a
//! loader parses millions of them out of one large buffer. The standard
//! conversions want an isolated, length-known string; this crate parses the
//! literal in place and tells the caller where it ended.
//!
//! - **Digit scanners**: `u32` and `u64` accumulators over a [`Cursor`]
//! - **Float parser**: sign, integer, fraction, and exponent in one pass
//! - **Fraction table**: precomputed `10^-i` so fractions cost one multiply
//! - **Direct parsing**: pull every number out of a coordinate or index list
//! - **Strict layer**: optional validation for callers that need it
//!
//! ## Quick Start
//!
//! ```rust
//! use fast_atof_core::{fast_atof, fast_atof_move, Cursor};
//!
//! // Isolated token
//! assert_eq!(fast_atof("-2.5"), -2.5);
//!
//! // Keep tokenizing after the number
//! let line = b"v 0.5 1.25 -3";
//! let mut cursor = Cursor::at(line, 2);
//! let x = fast_atof_move(&mut cursor);
//! assert_eq!(x, 0.5);
//! assert_eq!(&line[cursor.position()..], b" 1.25 -3");
//! ```
//!
//! ## Direct Parsing
//!
//! ```rust
//! use fast_atof_core::{parse_floats_direct, parse_indices_direct, ScanConfig};
//!
//! let config = ScanConfig::default();
//! let positions = parse_floats_direct(b"((0.,0.,150.),(0.,40.,140.))", &config);
//! assert_eq!(positions, vec![0.0, 0.0, 150.0, 0.0, 40.0, 140.0]);
//!
//! let indices = parse_indices_direct(b"((1,2,3))", &config);
//! assert_eq!(indices, vec![0, 1, 2]);
//! ```
//!
//! ## Accuracy
//!
//! Results are single precision. The fractional part is scaled in `f64`, so
//! literals up to roughly seven significant digits come back within `f32`
//! rounding. Longer mantissas lose precision and magnitudes past `u64` wrap.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization support for [`ScanConfig`]

pub mod atof;
pub mod cursor;
pub mod digits;
pub mod error;
pub mod fast_parse;
pub mod strict;
pub mod table;

pub use atof::{fast_atof, fast_atof_move, parse_partial};
pub use cursor::Cursor;
pub use digits::{strtol10, strtol10_64, strtol10_64_slice, strtol10_slice};
pub use error::{Error, Result};
pub use fast_parse::{
    extract_coordinate_list, extract_parenthesized_list, has_mantissa_digits, is_number_start,
    parse_floats_direct, parse_indices_direct, FloatScanner, ScanConfig,
};
pub use strict::{parse_f32_prefix_strict, parse_f32_strict};
pub use table::{fraction_scale, FRACTION_TABLE, MAX_TABLE_DIGITS};
