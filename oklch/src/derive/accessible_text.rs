// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::Serialize;

use super::LightnessDirection;
use crate::{OklchColor, apca_luminance, compute_apca, oklch_to_srgb, round_to};

/// Backgrounds brighter than this (APCA screen luminance) get dark text.
const LIGHT_BACKGROUND_LUMINANCE: f64 = 0.2;
/// Text keeps a hint of the background hue, but no more chroma than this.
const MAX_TEXT_CHROMA: f64 = 0.03;
const TEXT_CHROMA_RATIO: f64 = 0.3;
const SEARCH_STEPS: usize = 32;

/// How far to move the lightness of a background color to get readable text on it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AccessibleLightness {
    pub direction: LightnessDirection,
    /// `|text L - background L|`, rounded to 2 decimals.
    pub amount: f64,
}

/// The chroma used for text derived from a background with chroma `base_chroma`.
#[must_use]
pub fn accessible_text_chroma(base_chroma: f64) -> f64 {
    (base_chroma * TEXT_CHROMA_RATIO).min(MAX_TEXT_CHROMA)
}

/// Bisects the lightness of text drawn on `base` until it is the closest one to `base`
/// that still reaches `target_abs_lc` (APCA, either polarity).
///
/// Light backgrounds (APCA luminance `> 0.2`) search darker text in `[0, L]`, dark
/// ones lighter text in `[L, 1]`. If even black (or white) text misses the target, the
/// text lightness goes all the way to `0` (or `1`).
#[must_use]
pub fn find_accessible_text_lightness(
    base: OklchColor,
    target_abs_lc: f64,
) -> AccessibleLightness {
    let base_srgb = oklch_to_srgb(base).clamped();
    let text_chroma = accessible_text_chroma(base.c);

    let direction = if apca_luminance(base_srgb) > LIGHT_BACKGROUND_LUMINANCE {
        LightnessDirection::Darker
    } else {
        LightnessDirection::Lighter
    };

    let (mut lo, mut hi, mut best_l) = match direction {
        LightnessDirection::Darker => (0.0, base.l, 0.0),
        LightnessDirection::Lighter => (base.l, 1.0, 1.0),
    };

    for _ in 0..SEARCH_STEPS {
        let mid = (lo + hi) / 2.0;
        let text_srgb = oklch_to_srgb(OklchColor::new(mid, text_chroma, base.h)).clamped();
        let passes = compute_apca(text_srgb, base_srgb).abs() >= target_abs_lc;

        // Passing moves toward the base (less contrast), failing away from it.
        match (direction, passes) {
            (LightnessDirection::Darker, true) | (LightnessDirection::Lighter, false) => {
                lo = mid;
            }
            (LightnessDirection::Darker, false) | (LightnessDirection::Lighter, true) => {
                hi = mid;
            }
        }
        if passes {
            best_l = mid;
        }
    }

    let it = AccessibleLightness {
        direction,
        amount: round_to((best_l - base.l).abs(), 2),
    };
    tracing::debug!(message = "accessible text lightness", ?base, target_abs_lc, result = ?it);
    it
}
