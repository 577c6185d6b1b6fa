// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{LightnessDirection, LightnessShift, RelativeTransform,
            find_accessible_text_lightness};
use crate::OklchColor;

/// APCA Lc that body text should reach.
pub const DEFAULT_TARGET_LC: f64 = 75.0;

/// Common roles for a color derived from a base (brand) color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DerivePreset {
    /// Text that is readable on the base color, at `|Lc| >= target_lc`.
    AccessibleText { target_lc: f64 },
    /// A faint tint of the base, for hover or selected backgrounds.
    SubtleBackground,
    /// A stronger step away from the base, for outlines and dividers.
    Border,
    /// Same lightness and chroma, opposite hue.
    Complementary,
}

impl Default for DerivePreset {
    fn default() -> Self {
        DerivePreset::AccessibleText {
            target_lc: DEFAULT_TARGET_LC,
        }
    }
}

/// Light bases (`L > 0.5`) step darker, dark ones lighter.
fn away_from_extreme(base: OklchColor, amount: f64) -> LightnessShift {
    let direction = if base.l > 0.5 {
        LightnessDirection::Darker
    } else {
        LightnessDirection::Lighter
    };
    LightnessShift { direction, amount }
}

impl RelativeTransform {
    /// | Preset              | Lightness                    | Chroma  | Hue     |
    /// |---------------------|------------------------------|---------|---------|
    /// | accessible text     | searched, see below          | `× 0.3` |         |
    /// | subtle background   | `0.05` away from the extreme | `× 0.5` |         |
    /// | border              | `0.15` away from the extreme | `× 0.7` |         |
    /// | complementary       |                              |         | `+ 180` |
    ///
    /// The accessible text lightness comes from [`find_accessible_text_lightness`].
    #[must_use]
    pub fn from_preset(preset: DerivePreset, base: OklchColor) -> Self {
        match preset {
            DerivePreset::AccessibleText { target_lc } => {
                let found = find_accessible_text_lightness(base, target_lc);
                Self {
                    lightness: Some(LightnessShift {
                        direction: found.direction,
                        amount: found.amount,
                    }),
                    chroma_scale: Some(0.3),
                    hue_shift: None,
                }
            }
            DerivePreset::SubtleBackground => Self {
                lightness: Some(away_from_extreme(base, 0.05)),
                chroma_scale: Some(0.5),
                hue_shift: None,
            },
            DerivePreset::Border => Self {
                lightness: Some(away_from_extreme(base, 0.15)),
                chroma_scale: Some(0.7),
                hue_shift: None,
            },
            DerivePreset::Complementary => Self {
                lightness: None,
                chroma_scale: None,
                hue_shift: Some(180.0),
            },
        }
    }
}
