// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa` literals.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{ByteSpanMatch, CssColorFormat, DecodeResult, Rejection};
use crate::{parse_hex_digits, srgb_to_oklch};

/// The word boundary is ASCII only, so a non-ASCII letter right after the digits ends
/// the literal, eg: `#fffé` scans as `#fff`.
static HEX_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#([0-9a-fA-F]{3,8})(?-u:\b)").expect("Invalid hex color regex")
});

/// A `#` right after one of these belongs to some other token, eg: `abc#fff` or a URL
/// fragment like `page#ff0000`.
#[must_use]
pub fn is_identifier_char(it: char) -> bool {
    it.is_ascii_alphanumeric() || it == '_' || it == '-'
}

/// Every well formed hex literal in `text`, in order of appearance.
pub(crate) fn scan_hex(text: &str) -> Vec<ByteSpanMatch> {
    HEX_COLOR_REGEX
        .captures_iter(text)
        .filter_map(|captures| match decode_hex_captures(text, &captures) {
            Ok(it) => Some(it),
            Err(rejection) => {
                tracing::trace!(
                    message = "skip hex literal",
                    literal = captures.get(0).map(|it| it.as_str()),
                    %rejection
                );
                None
            }
        })
        .collect()
}

fn decode_hex_captures(text: &str, captures: &Captures<'_>) -> DecodeResult<ByteSpanMatch> {
    let (Some(whole), Some(digits)) = (captures.get(0), captures.get(1)) else {
        return Err(Rejection::BadHexLength);
    };

    if text[..whole.start()]
        .chars()
        .next_back()
        .is_some_and(is_identifier_char)
    {
        return Err(Rejection::IdentifierBeforeHex);
    }

    let hex = parse_hex_digits(digits.as_str()).ok_or(Rejection::BadHexLength)?;
    Ok(ByteSpanMatch {
        byte_range: whole.range(),
        color: srgb_to_oklch(hex.srgb),
        alpha: hex.alpha,
        format: CssColorFormat::Hex,
    })
}
