// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Range;

use serde::Serialize;
use strum_macros::{Display, EnumString};

use super::CharOffsets;
use crate::OklchColor;

/// The syntax a [`CssColorMatch`] was written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, Serialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum CssColorFormat {
    Oklch,
    Oklab,
    Hex,
    Rgb,
    Hsl,
    Named,
}

/// One color literal found in a piece of text, normalized to OKLCH + alpha.
///
/// `start_offset..end_offset` is the character range of the whole literal (eg:
/// `oklch(0.7 0.15 180)` including the function name and parens) in the exact text
/// that was scanned. `end_offset > start_offset` always holds.
///
/// Matches are created fresh on every scan call.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CssColorMatch {
    pub start_offset: usize,
    pub end_offset: usize,
    pub color: OklchColor,
    pub alpha: f64,
    pub original_format: CssColorFormat,
}

impl CssColorMatch {
    /// Inclusive on both ends, so a caret sitting just past the closing paren still
    /// counts as "on" the literal.
    #[must_use]
    pub fn contains_offset(&self, offset: usize) -> bool {
        (self.start_offset..=self.end_offset).contains(&offset)
    }

    #[must_use]
    pub fn char_len(&self) -> usize { self.end_offset - self.start_offset }
}

/// What each scan pass produces, before byte ranges are turned into char offsets.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ByteSpanMatch {
    pub byte_range: Range<usize>,
    pub color: OklchColor,
    pub alpha: f64,
    pub format: CssColorFormat,
}

impl ByteSpanMatch {
    pub fn into_css_color_match(self, offsets: &CharOffsets) -> CssColorMatch {
        CssColorMatch {
            start_offset: offsets.byte_to_char(self.byte_range.start),
            end_offset: offsets.byte_to_char(self.byte_range.end),
            color: self.color,
            alpha: self.alpha,
            original_format: self.format,
        }
    }
}
