// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `oklch(L C H [/ alpha])` literals.
//!
//! | Channel | Bare number     | Percentage      | Other units              |
//! |---------|-----------------|-----------------|--------------------------|
//! | `L`     | `0..1`          | `100% = 1`      |                          |
//! | `C`     | `0..0.4`        | `100% = 0.4`    |                          |
//! | `H`     | degrees         | degrees         | `deg`, `grad`, `rad`, `turn` |
//! | alpha   | `0..1`          | `100% = 1`      |                          |
//!
//! Only the space separated syntax is valid for `oklch()`. The hue is kept as
//! written (`400` stays `400`), so that reformatting a literal does not alter it.

use std::sync::LazyLock;

use regex::Regex;

use super::{ArgSyntax, ByteSpanMatch, CHROMA_PERCENT_REFERENCE, CssColorFormat,
            DecodeResult, NumericToken, Rejection, split_color_args};
use crate::OklchColor;

static OKLCH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)oklch\(\s*([^)]*)\s*\)").expect("Invalid oklch regex")
});

/// Keyword that starts the interior of a relative color, eg: `oklch(from red l c h)`.
pub const RELATIVE_COLOR_KEYWORD: &str = "from";

/// Every well formed `oklch()` literal in `text`, in order of appearance.
pub(crate) fn scan_oklch(text: &str) -> Vec<ByteSpanMatch> {
    OKLCH_REGEX
        .captures_iter(text)
        .filter_map(|captures| {
            let whole = captures.get(0)?;
            let interior = captures.get(1)?.as_str();
            match decode_oklch_interior(interior) {
                Ok((color, alpha)) => Some(ByteSpanMatch {
                    byte_range: whole.range(),
                    color,
                    alpha,
                    format: CssColorFormat::Oklch,
                }),
                Err(rejection) => {
                    tracing::trace!(
                        message = "skip oklch literal",
                        literal = whole.as_str(),
                        %rejection
                    );
                    None
                }
            }
        })
        .collect()
}

/// Decodes what is between the parens of `oklch(...)`.
///
/// # Errors
///
/// Returns the [`Rejection`] that explains why `interior` is not a valid literal.
pub fn decode_oklch_interior(interior: &str) -> DecodeResult<(OklchColor, f64)> {
    let interior = interior.trim();
    if interior.starts_with(RELATIVE_COLOR_KEYWORD) {
        return Err(Rejection::RelativeColorSyntax);
    }

    let args =
        split_color_args(interior, ArgSyntax::SpaceOnly).ok_or(Rejection::TooManySlashes)?;
    let [l, c, h] = args.three_channels().ok_or(Rejection::WrongChannelCount)?;
    let [l, c, h] = [l, c, h].map(NumericToken::try_parse);
    let (Some(l), Some(c), Some(h)) = (l, c, h) else {
        return Err(Rejection::BadNumericToken);
    };
    let alpha = args.alpha_value().ok_or(Rejection::BadAlpha)?;

    let color = OklchColor {
        l: l.scaled_percent_or_raw(1.0),
        c: c.scaled_percent_or_raw(CHROMA_PERCENT_REFERENCE),
        h: h.as_hue_degrees(),
    };
    Ok((color, alpha))
}
