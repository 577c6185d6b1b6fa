// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Rounds `value` to `decimals` places and prints it in its shortest form: trailing
/// zeros and a dangling `.` are dropped, and negative zero prints as `0`. Ties round
/// away from zero (`0.125` → `0.13`), not to even.
///
/// ```
/// use r3bl_oklch::round_to_string;
/// assert_eq!(round_to_string(0.70001, 4), "0.7");
/// assert_eq!(round_to_string(12.5, 0), "13");
/// assert_eq!(round_to_string(180.0, 2), "180");
/// assert_eq!(round_to_string(-0.00001, 4), "0");
/// ```
#[must_use]
pub fn round_to_string(value: f64, decimals: usize) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let rounded = round_to(value, decimals as i32);
    let fixed = format!("{rounded:.decimals$}");
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    match trimmed {
        "-0" => "0".to_string(),
        _ => trimmed.to_string(),
    }
}

/// Rounds `value` to `decimals` places, keeping it a number.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Wraps any angle in degrees into `[0, 360)`.
#[must_use]
pub fn normalize_hue(degrees: f64) -> f64 { ((degrees % 360.0) + 360.0) % 360.0 }
