// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The piecewise sRGB transfer function, in both directions.

use super::{LinearSrgbColor, SrgbColor};

/// Gamma encoded channel → linear channel.
#[must_use]
pub fn srgb_to_linear(x: f64) -> f64 {
    if x <= 0.040_45 {
        x / 12.92
    } else {
        ((x + 0.055) / 1.055).powf(2.4)
    }
}

/// Linear channel → gamma encoded channel.
#[must_use]
pub fn linear_to_srgb(x: f64) -> f64 {
    if x <= 0.003_130_8 {
        12.92 * x
    } else {
        1.055 * x.powf(1.0 / 2.4) - 0.055
    }
}

impl From<SrgbColor> for LinearSrgbColor {
    fn from(it: SrgbColor) -> Self {
        Self {
            r: srgb_to_linear(it.r),
            g: srgb_to_linear(it.g),
            b: srgb_to_linear(it.b),
        }
    }
}

impl From<LinearSrgbColor> for SrgbColor {
    fn from(it: LinearSrgbColor) -> Self {
        Self {
            r: linear_to_srgb(it.r),
            g: linear_to_srgb(it.g),
            b: linear_to_srgb(it.b),
        }
    }
}
