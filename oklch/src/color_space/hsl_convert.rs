// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{HslColor, SrgbColor};
use crate::normalize_hue;

/// Standard six sector HSL → sRGB conversion. The hue is wrapped into `[0, 360)`
/// first, so `-240`, `120` and `480` all give the same green.
#[must_use]
pub fn hsl_to_srgb(it: HslColor) -> SrgbColor {
    let HslColor { h, s, l } = it;
    let h = normalize_hue(h);

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = chroma * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - chroma / 2.0;

    let (r, g, b) = match h {
        h if h < 60.0 => (chroma, x, 0.0),
        h if h < 120.0 => (x, chroma, 0.0),
        h if h < 180.0 => (0.0, chroma, x),
        h if h < 240.0 => (0.0, x, chroma),
        h if h < 300.0 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    SrgbColor::new(r + m, g + m, b + m)
}

impl From<HslColor> for SrgbColor {
    fn from(it: HslColor) -> Self { hsl_to_srgb(it) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case(0.0, SrgbColor::new(1.0, 0.0, 0.0) ; "red")]
    #[test_case(120.0, SrgbColor::new(0.0, 1.0, 0.0) ; "green")]
    #[test_case(240.0, SrgbColor::new(0.0, 0.0, 1.0) ; "blue")]
    #[test_case(60.0, SrgbColor::new(1.0, 1.0, 0.0) ; "yellow")]
    #[test_case(180.0, SrgbColor::new(0.0, 1.0, 1.0) ; "cyan")]
    #[test_case(300.0, SrgbColor::new(1.0, 0.0, 1.0) ; "magenta")]
    fn test_primary_hues(hue: f64, expected: SrgbColor) {
        assert_eq2!(hsl_to_srgb(HslColor::new(hue, 1.0, 0.5)), expected);
    }

    #[test]
    fn test_hue_wraps() {
        let green = hsl_to_srgb(HslColor::new(120.0, 1.0, 0.5));
        assert_eq2!(hsl_to_srgb(HslColor::new(480.0, 1.0, 0.5)), green);
        assert_eq2!(hsl_to_srgb(HslColor::new(-240.0, 1.0, 0.5)), green);
    }

    #[test]
    fn test_grays() {
        assert_eq2!(hsl_to_srgb(HslColor::new(200.0, 0.0, 0.5)), SrgbColor::new(0.5, 0.5, 0.5));
        assert_eq2!(hsl_to_srgb(HslColor::new(0.0, 0.0, 1.0)), SrgbColor::WHITE);
        assert_eq2!(hsl_to_srgb(HslColor::new(0.0, 1.0, 0.0)), SrgbColor::BLACK);
    }
}
