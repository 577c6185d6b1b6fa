// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Glue for hosts that show color swatches and pickers: colors go out as clamped sRGB
//! and come back as `oklch()` text.

use serde::Serialize;

use super::{OklchFormatOptions, format_oklch};
use crate::{SrgbColor, find_all_oklch_colors, oklch_to_srgb, srgb_to_oklch};

/// One `oklch()` literal ready to be drawn as a swatch.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentColor {
    pub start_offset: usize,
    pub end_offset: usize,
    /// Clamped to `[0, 1]`, so out of gamut colors show as their nearest displayable
    /// neighbor.
    pub srgb: SrgbColor,
    pub alpha: f64,
}

/// Every `oklch()` literal in `text` with its display color. Other syntaxes are left
/// alone since hosts usually have their own swatches for them.
#[must_use]
pub fn document_colors(text: &str) -> Vec<DocumentColor> {
    find_all_oklch_colors(text)
        .into_iter()
        .map(|it| DocumentColor {
            start_offset: it.start_offset,
            end_offset: it.end_offset,
            srgb: oklch_to_srgb(it.color).clamped(),
            alpha: it.alpha,
        })
        .collect()
}

/// The text that replaces a literal after a color was picked in a host's color picker.
/// Always uses the default (plain number) [`OklchFormatOptions`].
///
/// ```
/// use r3bl_oklch::{SrgbColor, color_presentation};
///
/// assert_eq!(color_presentation(SrgbColor::new(1.0, 0.0, 0.0), 1.0), "oklch(0.628 0.2577 29.23)");
/// assert_eq!(color_presentation(SrgbColor::BLACK, 0.5), "oklch(0 0 0 / 0.5)");
/// ```
#[must_use]
pub fn color_presentation(srgb: SrgbColor, alpha: f64) -> String {
    format_oklch(srgb_to_oklch(srgb), alpha, &OklchFormatOptions::default())
}
