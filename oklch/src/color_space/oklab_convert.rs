// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! OKLab / OKLCH conversions. The matrices are the published ones from
//! <https://bottosson.github.io/posts/oklab/>.

use super::{LinearSrgbColor, OklabColor, OklchColor, SrgbColor};

/// Lower and upper bound that each sRGB channel of an in gamut color may reach. The
/// slack absorbs floating point error from a round trip through OKLab.
pub const SRGB_GAMUT_TOLERANCE: f64 = 0.001;

#[allow(clippy::unreadable_literal)]
#[must_use]
pub fn linear_srgb_to_oklab(it: LinearSrgbColor) -> OklabColor {
    let l = 0.4122214708 * it.r + 0.5363325363 * it.g + 0.0514459929 * it.b;
    let m = 0.2119034982 * it.r + 0.6806995451 * it.g + 0.1073969566 * it.b;
    let s = 0.0883024619 * it.r + 0.2817188376 * it.g + 0.6299787005 * it.b;

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    OklabColor {
        l: 0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_,
        a: 1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_,
        b: 0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_,
    }
}

#[allow(clippy::unreadable_literal)]
#[must_use]
pub fn oklab_to_linear_srgb(it: OklabColor) -> LinearSrgbColor {
    let l_ = it.l + 0.3963377774 * it.a + 0.2158037573 * it.b;
    let m_ = it.l - 0.1055613458 * it.a - 0.0638541728 * it.b;
    let s_ = it.l - 0.0894841775 * it.a - 1.2914855480 * it.b;

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    LinearSrgbColor {
        r: 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
        g: -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
        b: -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
    }
}

/// Cartesian → polar. Hue comes out in `[0, 360)`.
#[must_use]
pub fn oklab_to_oklch(it: OklabColor) -> OklchColor {
    let c = it.a.hypot(it.b);
    let mut h = it.b.atan2(it.a).to_degrees();
    if h < 0.0 {
        h += 360.0;
    }
    OklchColor { l: it.l, c, h }
}

/// Polar → cartesian. When `c == 0`, `a` and `b` are zero whatever the hue is.
#[must_use]
pub fn oklch_to_oklab(it: OklchColor) -> OklabColor {
    let h_rad = it.h.to_radians();
    OklabColor {
        l: it.l,
        a: it.c * h_rad.cos(),
        b: it.c * h_rad.sin(),
    }
}

/// Result is not clamped, channels outside `[0, 1]` mean the color is out of gamut.
#[must_use]
pub fn oklch_to_srgb(it: OklchColor) -> SrgbColor {
    let linear = oklab_to_linear_srgb(oklch_to_oklab(it));
    SrgbColor::from(linear)
}

#[must_use]
pub fn srgb_to_oklch(it: SrgbColor) -> OklchColor {
    let oklab = linear_srgb_to_oklab(LinearSrgbColor::from(it));
    oklab_to_oklch(oklab)
}

#[must_use]
pub fn srgb_to_oklab(it: SrgbColor) -> OklabColor {
    linear_srgb_to_oklab(LinearSrgbColor::from(it))
}

/// `true` if every sRGB channel of `it` lies in `[-0.001, 1.001]`.
#[must_use]
pub fn is_in_srgb_gamut(it: OklchColor) -> bool {
    let range = -SRGB_GAMUT_TOLERANCE..=1.0 + SRGB_GAMUT_TOLERANCE;
    oklch_to_srgb(it)
        .channels()
        .iter()
        .all(|channel| range.contains(channel))
}

mod convenience_conversions {
    use super::{OklabColor, OklchColor, SrgbColor, oklab_to_oklch, oklch_to_oklab,
                oklch_to_srgb, srgb_to_oklch};

    impl From<OklabColor> for OklchColor {
        fn from(it: OklabColor) -> Self { oklab_to_oklch(it) }
    }

    impl From<OklchColor> for OklabColor {
        fn from(it: OklchColor) -> Self { oklch_to_oklab(it) }
    }

    impl From<SrgbColor> for OklchColor {
        fn from(it: SrgbColor) -> Self { srgb_to_oklch(it) }
    }

    impl From<OklchColor> for SrgbColor {
        fn from(it: OklchColor) -> Self { oklch_to_srgb(it) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx;
    use test_case::test_case;

    const TOLERANCE: f64 = 0.01;

    fn assert_srgb_approx(actual: SrgbColor, expected: SrgbColor, tolerance: f64) {
        assert_approx!(actual.r, expected.r, tolerance);
        assert_approx!(actual.g, expected.g, tolerance);
        assert_approx!(actual.b, expected.b, tolerance);
    }

    #[test]
    fn test_red_to_oklch() {
        let it = srgb_to_oklch(SrgbColor::new(1.0, 0.0, 0.0));
        assert_approx!(it.l, 0.6279, 0.001);
        assert_approx!(it.c, 0.2577, 0.001);
        assert_approx!(it.h, 29.23, 0.05);
    }

    #[test]
    fn test_white_and_black() {
        let white = srgb_to_oklch(SrgbColor::WHITE);
        assert_approx!(white.l, 1.0, 0.001);
        assert_approx!(white.c, 0.0, 0.001);

        let black = srgb_to_oklch(SrgbColor::BLACK);
        assert_approx!(black.l, 0.0, 0.001);
        assert_approx!(black.c, 0.0, 0.001);
    }

    #[test_case(1.0, 0.0, 0.0)]
    #[test_case(0.0, 1.0, 0.0)]
    #[test_case(0.0, 0.0, 1.0)]
    #[test_case(1.0, 1.0, 1.0)]
    #[test_case(0.0, 0.0, 0.0)]
    #[test_case(0.5, 0.5, 0.5)]
    #[test_case(0.2, 0.6, 0.9)]
    #[test_case(0.93, 0.11, 0.47)]
    fn test_srgb_round_trip(r: f64, g: f64, b: f64) {
        let original = SrgbColor::new(r, g, b);
        let round_trip = oklch_to_srgb(srgb_to_oklch(original));
        assert_srgb_approx(round_trip, original, TOLERANCE);
    }

    #[test]
    fn test_srgb_round_trip_grid() {
        let steps = [0.0, 0.25, 0.5, 0.75, 1.0];
        for r in steps {
            for g in steps {
                for b in steps {
                    let original = SrgbColor::new(r, g, b);
                    let round_trip = oklch_to_srgb(srgb_to_oklch(original));
                    assert_srgb_approx(round_trip, original, TOLERANCE);
                }
            }
        }
    }

    #[test]
    fn test_hue_is_normalized() {
        let samples = [
            SrgbColor::new(0.0, 0.0, 1.0),
            SrgbColor::new(1.0, 0.0, 1.0),
            SrgbColor::new(0.1, 0.9, 0.4),
            SrgbColor::new(0.9, 0.2, 0.3),
        ];
        for it in samples {
            let h = srgb_to_oklch(it).h;
            assert!((0.0..360.0).contains(&h), "hue {h} out of range for {it:?}");
        }
    }

    #[test]
    fn test_achromatic_is_hue_invariant() {
        for l in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let reference = oklch_to_srgb(OklchColor::new(l, 0.0, 0.0));
            for h in [45.0, 90.0, 180.0, 270.0, 359.0, -720.0] {
                assert_eq!(oklch_to_srgb(OklchColor::new(l, 0.0, h)), reference);
            }
        }
    }

    #[test]
    fn test_oklab_polar_round_trip() {
        let lab = OklabColor::new(0.5, 0.1, -0.1);
        let lch = oklab_to_oklch(lab);
        assert_approx!(lch.c, 0.1_f64.hypot(0.1), 1e-12);
        assert_approx!(lch.h, 315.0, 1e-9);
        let back = oklch_to_oklab(lch);
        assert_approx!(back.a, lab.a, 1e-12);
        assert_approx!(back.b, lab.b, 1e-12);
    }

    #[test]
    fn test_gamut() {
        assert!(is_in_srgb_gamut(OklchColor::new(0.7, 0.1, 180.0)));
        assert!(is_in_srgb_gamut(srgb_to_oklch(SrgbColor::new(1.0, 0.0, 0.0))));
        assert!(!is_in_srgb_gamut(OklchColor::new(0.7, 0.4, 150.0)));
        assert!(!is_in_srgb_gamut(OklchColor::new(1.2, 0.0, 0.0)));
    }

    #[test]
    fn test_out_of_gamut_is_not_clamped() {
        let it = oklch_to_srgb(OklchColor::new(0.7, 0.4, 150.0));
        assert!(it.channels().iter().any(|c| !(0.0..=1.0).contains(c)));
    }
}
