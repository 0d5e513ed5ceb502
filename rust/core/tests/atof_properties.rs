// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use fast_atof_core::{fast_atof, fast_atof_move, parse_partial, Cursor};

/// Deterministic spread of test values without pulling in an RNG
fn sample_values() -> Vec<f32> {
    let mut values = vec![0.0, 1.0, -1.0, 0.5, 0.1, 123.456, -987.654, 1e-5, 3.0e7];
    let mut state: u32 = 0x9E37_79B9;
    for _ in 0..2000 {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let mantissa = (state >> 8) as f32 / (1u32 << 24) as f32;
        let exponent = (state % 21) as i32 - 10;
        let sign = if state & 1 == 0 { 1.0 } else { -1.0 };
        values.push(sign * mantissa * 10f32.powi(exponent));
    }
    values
}

#[test]
fn integers_parse_exactly_and_advance_by_length() {
    let samples: [u64; 10] = [
        0,
        1,
        9,
        10,
        255,
        65_535,
        16_777_216,
        4_294_967_296,
        1_000_000_000_000,
        u64::MAX,
    ];

    for n in samples {
        let text = n.to_string();
        let (value, consumed) = parse_partial(&text);
        assert_eq!(value, n as f32, "parsing {text}");
        assert_eq!(consumed, text.len(), "cursor after {text}");
    }

    for n in 0..=10_000u32 {
        let text = n.to_string();
        assert_eq!(parse_partial(&text), (n as f32, text.len()));
    }
}

#[test]
fn negative_zero_compares_equal_to_zero() {
    let (value, consumed) = parse_partial("-0");
    assert_eq!(value, 0.0);
    assert_eq!(consumed, 2);
}

#[test]
fn decimal_literal_stops_after_last_digit() {
    let buffer = b"3.14 next";
    let mut cursor = Cursor::new(buffer);
    let value = fast_atof_move(&mut cursor);

    assert_abs_diff_eq!(value, 3.14, epsilon = 1e-6);
    assert_eq!(cursor.position(), 4);
    assert_eq!(cursor.peek(), Some(b' '));
}

#[test]
fn exponent_literal_is_fully_consumed() {
    let (value, consumed) = parse_partial("1.5e-3");
    assert_abs_diff_eq!(value, 0.0015, epsilon = 1e-6);
    assert_eq!(consumed, 6);
}

#[test]
fn fifteen_fractional_digits_stay_in_table() {
    let (value, consumed) = parse_partial("1.23456789012345");
    assert_abs_diff_eq!(value, 1.234_567_9, epsilon = 1e-6);
    assert_eq!(consumed, 16);
}

#[test]
fn long_fractions_do_not_panic() {
    for digits in 14..64 {
        let text = format!("0.{}", "3".repeat(digits));
        let (value, consumed) = parse_partial(&text);
        assert_eq!(consumed, text.len());
        assert!(value.is_finite(), "{text} gave {value}");
    }

    // Below the u64 wrap point the value is still right
    let (value, _) = parse_partial("0.3333333333333333333");
    assert_abs_diff_eq!(value, 0.333_333_34, epsilon = 1e-6);
}

#[test]
fn non_numeric_start_leaves_cursor_unmoved() {
    for input in ["x", "abc", " 1", "+1", "E5", "#12", "$"] {
        let (value, consumed) = parse_partial(input);
        assert_eq!(value, 0.0, "value for {input:?}");
        assert_eq!(consumed, 0, "cursor for {input:?}");
    }
}

#[test]
fn six_digit_round_trip_in_scientific_notation() {
    for original in sample_values() {
        let text = format!("{:.5e}", original);
        let expected: f32 = fast_float::parse(&text).unwrap();
        let (value, consumed) = parse_partial(&text);

        assert_eq!(consumed, text.len(), "cursor after {text}");
        assert_relative_eq!(value, expected, max_relative = 1e-6);
    }
}

#[test]
fn six_digit_round_trip_in_fixed_notation() {
    for original in sample_values() {
        if original.abs() >= 1000.0 {
            continue;
        }
        let text = format!("{:.3}", original);
        let expected: f32 = fast_float::parse(&text).unwrap();
        let value = fast_atof(&text);

        assert_abs_diff_eq!(value, expected, epsilon = 1e-4);
        assert_relative_eq!(value, expected, max_relative = 1e-6, epsilon = 1e-6);
    }
}

#[test]
fn wrapper_is_idempotent() {
    let input = String::from("-12.3456e-2");
    let first = fast_atof(&input);
    let second = fast_atof(&input);
    assert_eq!(first.to_bits(), second.to_bits());
    assert_eq!(input, "-12.3456e-2");
}

#[test]
fn concurrent_parsing_shares_only_the_table() {
    let buffer: Vec<u8> = (0..1000)
        .map(|i| format!("{}.{} ", i, i % 97))
        .collect::<String>()
        .into_bytes();
    let expected: Vec<f32> = fast_atof_core::FloatScanner::new(&buffer).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| fast_atof_core::FloatScanner::new(&buffer).collect::<Vec<f32>>()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
