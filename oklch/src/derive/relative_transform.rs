// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::Serialize;
use strum_macros::{Display, EnumString};

use crate::{OklchColor, normalize_hue};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LightnessDirection {
    Lighter,
    Darker,
}

impl LightnessDirection {
    fn sign(self) -> char {
        match self {
            LightnessDirection::Lighter => '+',
            LightnessDirection::Darker => '-',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LightnessShift {
    pub direction: LightnessDirection,
    /// In `L` units, ie: `0.1` is a tenth of the full lightness range.
    pub amount: f64,
}

/// Derives one color from a base color, the way CSS relative color syntax does
/// (`oklch(from var(--base) calc(l + 0.1) calc(c * 0.5) h)`). Each component is
/// optional and a [`None`] one passes the base value through.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize)]
pub struct RelativeTransform {
    pub lightness: Option<LightnessShift>,
    pub chroma_scale: Option<f64>,
    /// In degrees.
    pub hue_shift: Option<f64>,
}

impl RelativeTransform {
    /// Lightness is clamped to `[0, 1]` and hue wrapped into `[0, 360)`. Chroma is
    /// scaled as is.
    #[must_use]
    pub fn apply(&self, base: OklchColor) -> OklchColor {
        let l = match self.lightness {
            Some(LightnessShift {
                direction: LightnessDirection::Lighter,
                amount,
            }) => (base.l + amount).min(1.0),
            Some(LightnessShift {
                direction: LightnessDirection::Darker,
                amount,
            }) => (base.l - amount).max(0.0),
            None => base.l,
        };
        let c = self.chroma_scale.map_or(base.c, |scale| base.c * scale);
        let h = self.hue_shift.map_or(base.h, |shift| normalize_hue(base.h + shift));
        OklchColor { l, c, h }
    }

    /// CSS relative color expression relative to the custom property `base_var`, eg:
    /// `oklch(from var(--base) calc(l - 0.15) calc(c * 0.70) h)`.
    ///
    /// Components that would not change anything (no lightness amount, a chroma
    /// scale of `1`, no hue shift) are written as the bare channel keyword.
    ///
    /// ```
    /// use r3bl_oklch::RelativeTransform;
    ///
    /// let it = RelativeTransform { hue_shift: Some(180.0), ..Default::default() };
    /// assert_eq!(it.to_css_expression("--brand"), "oklch(from var(--brand) l c calc(h + 180deg))");
    /// ```
    #[must_use]
    pub fn to_css_expression(&self, base_var: &str) -> String {
        let l = match self.lightness {
            Some(LightnessShift { direction, amount }) if amount != 0.0 => {
                format!("calc(l {} {amount:.2})", direction.sign())
            }
            _ => "l".to_string(),
        };

        let c = match self.chroma_scale {
            Some(scale) if scale == 0.0 => "0".to_string(),
            Some(scale) if scale != 1.0 => format!("calc(c * {scale:.2})"),
            _ => "c".to_string(),
        };

        let h = match self.hue_shift {
            Some(shift) if shift != 0.0 => {
                let sign = if shift > 0.0 { '+' } else { '-' };
                format!("calc(h {sign} {}deg)", shift.abs())
            }
            _ => "h".to_string(),
        };

        format!("oklch(from var({base_var}) {l} {c} {h})")
    }
}
