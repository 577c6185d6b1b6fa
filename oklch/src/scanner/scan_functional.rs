// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `rgb()` / `rgba()`, `hsl()` / `hsla()` and `oklab()` literals, found in a single
//! pass. All of them accept both the modern space syntax (`rgb(255 0 0 / 50%)`) and
//! the legacy comma syntax (`rgba(255, 0, 0, 0.5)`).

use std::sync::LazyLock;

use regex::Regex;
use strum_macros::EnumString;

use super::{ArgSyntax, ByteSpanMatch, CHROMA_PERCENT_REFERENCE, ColorArgs,
            CssColorFormat, DecodeResult, NumericToken, RELATIVE_COLOR_KEYWORD,
            Rejection, split_color_args};
use crate::{HslColor, OklabColor, OklchColor, SrgbColor, hsl_to_srgb, oklab_to_oklch,
            srgb_to_oklch};

static FUNCTIONAL_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(rgba?|hsla?|oklab)\(\s*([^)]*)\s*\)")
        .expect("Invalid functional color regex")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ColorFunction {
    #[strum(serialize = "rgb", serialize = "rgba")]
    Rgb,
    #[strum(serialize = "hsl", serialize = "hsla")]
    Hsl,
    #[strum(serialize = "oklab")]
    Oklab,
}

impl ColorFunction {
    #[must_use]
    pub fn format(self) -> CssColorFormat {
        match self {
            ColorFunction::Rgb => CssColorFormat::Rgb,
            ColorFunction::Hsl => CssColorFormat::Hsl,
            ColorFunction::Oklab => CssColorFormat::Oklab,
        }
    }

    /// Decodes what is between the parens of this function.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] that explains why `interior` is not a valid literal.
    pub fn decode_interior(self, interior: &str) -> DecodeResult<(OklchColor, f64)> {
        let interior = interior.trim();
        if interior.starts_with(RELATIVE_COLOR_KEYWORD) {
            return Err(Rejection::RelativeColorSyntax);
        }

        let args = split_color_args(interior, ArgSyntax::SpaceOrLegacyComma)
            .ok_or(Rejection::TooManySlashes)?;
        let tokens = parse_three_tokens(&args)?;
        let alpha = args.alpha_value().ok_or(Rejection::BadAlpha)?;

        let color = match self {
            ColorFunction::Rgb => decode_rgb(tokens),
            ColorFunction::Hsl => decode_hsl(tokens),
            ColorFunction::Oklab => decode_oklab(tokens),
        };
        Ok((color, alpha))
    }
}

/// Every well formed functional literal in `text`, in order of appearance.
pub(crate) fn scan_functional(text: &str) -> Vec<ByteSpanMatch> {
    FUNCTIONAL_COLOR_REGEX
        .captures_iter(text)
        .filter_map(|captures| {
            let whole = captures.get(0)?;
            let function = captures.get(1)?.as_str().parse::<ColorFunction>().ok()?;
            let interior = captures.get(2)?.as_str();
            match function.decode_interior(interior) {
                Ok((color, alpha)) => Some(ByteSpanMatch {
                    byte_range: whole.range(),
                    color,
                    alpha,
                    format: function.format(),
                }),
                Err(rejection) => {
                    tracing::trace!(
                        message = "skip functional color literal",
                        literal = whole.as_str(),
                        %rejection
                    );
                    None
                }
            }
        })
        .collect()
}

fn parse_three_tokens(args: &ColorArgs<'_>) -> DecodeResult<[NumericToken; 3]> {
    let [first, second, third] = args.three_channels().ok_or(Rejection::WrongChannelCount)?;
    match [first, second, third].map(NumericToken::try_parse) {
        [Some(first), Some(second), Some(third)] => Ok([first, second, third]),
        _ => Err(Rejection::BadNumericToken),
    }
}

/// Channels are `0..255`, or percentages of the full range.
fn decode_rgb([r, g, b]: [NumericToken; 3]) -> OklchColor {
    let channel = |it: NumericToken| {
        if it.is_percent() {
            it.value / 100.0
        } else {
            it.value / 255.0
        }
    };
    srgb_to_oklch(SrgbColor::new(channel(r), channel(g), channel(b)))
}

/// Saturation and lightness are read as percentages whether or not they carry a `%`.
fn decode_hsl([h, s, l]: [NumericToken; 3]) -> OklchColor {
    let hsl = HslColor::new(h.as_hue_degrees(), s.value / 100.0, l.value / 100.0);
    srgb_to_oklch(hsl_to_srgb(hsl))
}

/// `L` is `0..1` or a percentage of 1, `a` and `b` percentages map `100%` to `0.4`.
fn decode_oklab([l, a, b]: [NumericToken; 3]) -> OklchColor {
    oklab_to_oklch(OklabColor::new(
        l.scaled_percent_or_raw(1.0),
        a.scaled_percent_or_raw(CHROMA_PERCENT_REFERENCE),
        b.scaled_percent_or_raw(CHROMA_PERCENT_REFERENCE),
    ))
}
