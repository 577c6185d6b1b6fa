// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Declarative macros shared by the library and its tests.

/// Wrapper for [`pretty_assertions::assert_eq!`] so that a failing comparison of two
/// colors or matches prints a colored diff.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Asserts that two `f64` values are within `tolerance` of each other.
///
/// ```
/// use r3bl_oklch::assert_approx;
/// assert_approx!(0.1 + 0.2, 0.3, 1e-9);
/// ```
#[macro_export]
macro_rules! assert_approx {
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {{
        let (left, right, tolerance): (f64, f64, f64) = ($left, $right, $tolerance);
        assert!(
            (left - right).abs() <= tolerance,
            "left: {left}, right: {right}, tolerance: {tolerance}\n{} != {}",
            stringify!($left),
            stringify!($right),
        );
    }};
}
