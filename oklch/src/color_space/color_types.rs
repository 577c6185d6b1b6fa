// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::Serialize;

/// Gamma encoded sRGB color. Channels are nominally in `[0, 1]` but are **not**
/// clamped, so that an out of gamut conversion result stays visible to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize)]
pub struct SrgbColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl From<(f64, f64, f64)> for SrgbColor {
    fn from((r, g, b): (f64, f64, f64)) -> Self { Self { r, g, b } }
}

impl SrgbColor {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self { Self { r, g, b } }

    /// Channels in `[0, 255]`, eg: from a hex literal or a CSS named color.
    #[must_use]
    pub fn from_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            r: f64::from(red) / 255.0,
            g: f64::from(green) / 255.0,
            b: f64::from(blue) / 255.0,
        }
    }

    /// Clamps each channel to `[0, 1]`, for display.
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    #[must_use]
    pub fn channels(&self) -> [f64; 3] { [self.r, self.g, self.b] }
}

/// sRGB with the transfer function removed, ie: proportional to light intensity.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct LinearSrgbColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Cartesian OKLab. `l` is lightness (nominal `0..1`), `a` and `b` are the green/red
/// and blue/yellow axes (nominal `-0.4..0.4`).
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize)]
pub struct OklabColor {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl OklabColor {
    #[must_use]
    pub const fn new(l: f64, a: f64, b: f64) -> Self { Self { l, a, b } }
}

/// Polar OKLab, the canonical in-memory color of this crate.
///
/// - `l`: lightness, nominal `0..1`.
/// - `c`: chroma, the radial distance from the neutral axis, `>= 0`, nominal `0..0.4`.
/// - `h`: hue in degrees. Any value is accepted as input; every conversion that
///   produces an [`OklchColor`] normalizes it into `[0, 360)`.
///
/// When `c == 0` the hue has no effect on the color.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize)]
pub struct OklchColor {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl From<(f64, f64, f64)> for OklchColor {
    fn from((l, c, h): (f64, f64, f64)) -> Self { Self { l, c, h } }
}

impl OklchColor {
    #[must_use]
    pub const fn new(l: f64, c: f64, h: f64) -> Self { Self { l, c, h } }
}

/// HSL with hue in degrees (any value, wrapped on use), and saturation and lightness
/// as fractions in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct HslColor {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl HslColor {
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self { Self { h, s, l } }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_srgb_from_u8() {
        assert_eq2!(SrgbColor::from_u8(255, 0, 255), SrgbColor::new(1.0, 0.0, 1.0));
        assert_eq2!(SrgbColor::from_u8(0, 0, 0), SrgbColor::BLACK);
    }

    #[test]
    fn test_srgb_clamped() {
        let out_of_gamut = SrgbColor::new(1.2, -0.1, 0.5);
        assert_eq2!(out_of_gamut.clamped(), SrgbColor::new(1.0, 0.0, 0.5));
    }
}
