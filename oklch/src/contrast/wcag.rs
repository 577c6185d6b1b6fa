// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! WCAG 2.x contrast ratio.
//!
//! Reference: <https://www.w3.org/TR/WCAG21/#dfn-contrast-ratio>

use serde::Serialize;

use crate::{SrgbColor, srgb_to_linear};

const R_WEIGHT: f64 = 0.2126;
const G_WEIGHT: f64 = 0.7152;
const B_WEIGHT: f64 = 0.0722;
const FLARE: f64 = 0.05;

/// Relative luminance, `0` for black and `1` for white.
#[must_use]
pub fn relative_luminance(it: SrgbColor) -> f64 {
    R_WEIGHT * srgb_to_linear(it.r)
        + G_WEIGHT * srgb_to_linear(it.g)
        + B_WEIGHT * srgb_to_linear(it.b)
}

/// Symmetric contrast ratio in `[1, 21]`.
#[must_use]
pub fn compute_wcag(lhs: SrgbColor, rhs: SrgbColor) -> f64 {
    let lhs = relative_luminance(lhs);
    let rhs = relative_luminance(rhs);
    (lhs.max(rhs) + FLARE) / (lhs.min(rhs) + FLARE)
}

/// Which WCAG 2.x success criteria a contrast ratio meets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
pub struct WcagLevel {
    pub aa: bool,
    pub aaa: bool,
}

/// Large text (18pt, or 14pt bold) has lower minimums.
///
/// | Text   | AA      | AAA     |
/// |--------|---------|---------|
/// | normal | `>= 4.5`| `>= 7`  |
/// | large  | `>= 3`  | `>= 4.5`|
#[must_use]
pub fn wcag_level(ratio: f64, is_large_text: bool) -> WcagLevel {
    let (aa_min, aaa_min) = if is_large_text { (3.0, 4.5) } else { (4.5, 7.0) };
    WcagLevel {
        aa: ratio >= aa_min,
        aaa: ratio >= aaa_min,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_approx, assert_eq2};
    use test_case::test_case;

    #[test]
    fn test_black_and_white() {
        assert_approx!(compute_wcag(SrgbColor::BLACK, SrgbColor::WHITE), 21.0, 1e-9);
        assert_approx!(compute_wcag(SrgbColor::WHITE, SrgbColor::WHITE), 1.0, 1e-12);
    }

    #[test]
    fn test_symmetric_and_bounded() {
        let samples = [
            SrgbColor::BLACK,
            SrgbColor::WHITE,
            SrgbColor::new(0.5, 0.5, 0.5),
            SrgbColor::new(1.0, 0.4, 0.0),
            SrgbColor::new(0.1, 0.2, 0.9),
        ];
        for lhs in samples {
            for rhs in samples {
                let ratio = compute_wcag(lhs, rhs);
                assert_eq2!(ratio, compute_wcag(rhs, lhs));
                assert!((1.0..=21.0 + 1e-9).contains(&ratio), "{ratio}");
            }
        }
    }

    #[test]
    fn test_mid_gray_on_white() {
        // #767676 is the lightest gray that passes AA on white.
        let gray = SrgbColor::from_u8(0x76, 0x76, 0x76);
        let ratio = compute_wcag(gray, SrgbColor::WHITE);
        assert_approx!(ratio, 4.54, 0.01);
        assert!(wcag_level(ratio, false).aa);
    }

    #[test_case(4.5, false, WcagLevel { aa: true, aaa: false })]
    #[test_case(7.0, false, WcagLevel { aa: true, aaa: true })]
    #[test_case(4.49, false, WcagLevel { aa: false, aaa: false })]
    #[test_case(3.0, true, WcagLevel { aa: true, aaa: false })]
    #[test_case(4.5, true, WcagLevel { aa: true, aaa: true })]
    #[test_case(2.99, true, WcagLevel { aa: false, aaa: false })]
    fn test_wcag_level(ratio: f64, is_large_text: bool, expected: WcagLevel) {
        assert_eq2!(wcag_level(ratio, is_large_text), expected);
    }
}
