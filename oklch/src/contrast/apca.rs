// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! APCA (Accessible Perceptual Contrast Algorithm), APCA-W3 `0.0.98G-4g` constants.
//!
//! Reference: <https://github.com/Myndex/SAPC-APCA>

use crate::SrgbColor;

/// Power curve used to linearize each channel. This is **not** the piecewise sRGB
/// transfer function.
const MAIN_TRC: f64 = 2.4;

const R_COEFFICIENT: f64 = 0.212_672_9;
const G_COEFFICIENT: f64 = 0.715_152_2;
const B_COEFFICIENT: f64 = 0.072_175;

const NORMAL_BG_EXPONENT: f64 = 0.56;
const NORMAL_TEXT_EXPONENT: f64 = 0.57;
const REVERSE_BG_EXPONENT: f64 = 0.65;
const REVERSE_TEXT_EXPONENT: f64 = 0.62;

const BLACK_THRESHOLD: f64 = 0.022;
const BLACK_CLAMP_EXPONENT: f64 = 1.414;

const SCALE: f64 = 1.14;
const LOW_OFFSET: f64 = 0.027;
/// Contrast below this (before scaling to Lc) is reported as `0`.
const LOW_CLIP: f64 = 0.1;

/// Screen luminance `Y` of `it`, with the soft clamp applied to near black values.
#[must_use]
pub fn apca_luminance(it: SrgbColor) -> f64 {
    let linearize = |channel: f64| channel.max(0.0).powf(MAIN_TRC);
    let y = R_COEFFICIENT * linearize(it.r)
        + G_COEFFICIENT * linearize(it.g)
        + B_COEFFICIENT * linearize(it.b);
    if y < BLACK_THRESHOLD {
        y + (BLACK_THRESHOLD - y).powf(BLACK_CLAMP_EXPONENT)
    } else {
        y
    }
}

/// Lightness contrast (Lc) of `text` drawn on `bg`.
///
/// - Positive: dark text on a light background.
/// - Negative: light text on a dark background.
///
/// The algorithm is polarity aware, so swapping the arguments does not just flip the
/// sign. Black on white is about `106`, white on black about `-108`, and any color on
/// itself is exactly `0`.
#[must_use]
pub fn compute_apca(text: SrgbColor, bg: SrgbColor) -> f64 {
    let y_text = apca_luminance(text);
    let y_bg = apca_luminance(bg);

    let lc = if y_bg > y_text {
        (y_bg.powf(NORMAL_BG_EXPONENT) - y_text.powf(NORMAL_TEXT_EXPONENT)) * SCALE
            - LOW_OFFSET
    } else {
        (y_bg.powf(REVERSE_BG_EXPONENT) - y_text.powf(REVERSE_TEXT_EXPONENT)) * SCALE
            + LOW_OFFSET
    };

    if lc.abs() < LOW_CLIP {
        0.0
    } else {
        lc * 100.0
    }
}

/// One row of the APCA usage table: the minimum `|Lc|` for a kind of content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ApcaThreshold {
    pub lc: f64,
    /// Used by [`apca_description`].
    pub description: &'static str,
    /// Compact form for narrow displays, eg: a legend next to a contrast graph.
    pub short_label: &'static str,
}

/// Sorted by `lc`, strictly descending.
pub const APCA_THRESHOLDS: [ApcaThreshold; 6] = [
    ApcaThreshold {
        lc: 90.0,
        description: "Preferred body text",
        short_label: "Preferred body",
    },
    ApcaThreshold {
        lc: 75.0,
        description: "Body text (18px+)",
        short_label: "Body 18px+",
    },
    ApcaThreshold {
        lc: 60.0,
        description: "Content text / 16px bold",
        short_label: "Content 16px bold",
    },
    ApcaThreshold {
        lc: 45.0,
        description: "Headlines / large text",
        short_label: "Headlines",
    },
    ApcaThreshold {
        lc: 30.0,
        description: "Spot text / minimum",
        short_label: "Spot text min",
    },
    ApcaThreshold {
        lc: 15.0,
        description: "Non-text only",
        short_label: "Non-text",
    },
];

pub const APCA_NOT_READABLE: &str = "Not readable";

/// What content `lc` (of either polarity) is good enough for.
///
/// ```
/// use r3bl_oklch::apca_description;
/// assert_eq!(apca_description(-92.0), "Preferred body text");
/// assert_eq!(apca_description(60.0), "Content text / 16px bold");
/// assert_eq!(apca_description(14.9), "Not readable");
/// ```
#[must_use]
pub fn apca_description(lc: f64) -> &'static str {
    let abs_lc = lc.abs();
    APCA_THRESHOLDS
        .iter()
        .find(|it| abs_lc >= it.lc)
        .map_or(APCA_NOT_READABLE, |it| it.description)
}
