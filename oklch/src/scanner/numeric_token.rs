// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The numeric token grammar shared by every functional color syntax:
//!
//! ```text
//! token  = "none" | number [unit]
//! number = [+-] ( digits ["." digits*] | "." digits ) [ (e|E) [+-] digits ]
//! unit   = deg | grad | rad | turn | %        (case insensitive)
//! ```
//!
//! The whole token has to match, there are no partial matches.

use nom::{IResult, Parser,
          branch::alt,
          bytes::complete::{tag, tag_no_case},
          character::complete::{char, digit0, digit1, one_of},
          combinator::{all_consuming, map, map_res, opt, recognize, value}};

/// Keyword that stands for a missing component. Always evaluates to `0`.
pub const NONE_KEYWORD: &str = "none";

/// 100% chroma (OKLCH) and 100% of the `a` / `b` axes (OKLab).
pub const CHROMA_PERCENT_REFERENCE: f64 = 0.4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum TokenUnit {
    Deg,
    Grad,
    Rad,
    Turn,
    #[strum(serialize = "%")]
    Percent,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumericToken {
    pub value: f64,
    pub unit: Option<TokenUnit>,
}

impl NumericToken {
    pub const NONE: Self = Self {
        value: 0.0,
        unit: None,
    };

    /// Returns [`None`] if `token` is neither `none` nor a number with an optional unit.
    #[must_use]
    pub fn try_parse(token: &str) -> Option<Self> {
        all_consuming(parse_numeric_token)
            .parse(token)
            .ok()
            .map(|(_, it)| it)
    }

    #[must_use]
    pub fn is_percent(&self) -> bool { self.unit == Some(TokenUnit::Percent) }

    /// A percentage is scaled so that `100%` equals `full_scale`, any other value is
    /// taken as is.
    #[must_use]
    pub fn scaled_percent_or_raw(&self, full_scale: f64) -> f64 {
        if self.is_percent() {
            self.value / 100.0 * full_scale
        } else {
            self.value
        }
    }

    /// Angle in degrees. A bare number (or `deg`, or `%`) is already in degrees.
    #[must_use]
    pub fn as_hue_degrees(&self) -> f64 {
        match self.unit {
            Some(TokenUnit::Grad) => self.value * (360.0 / 400.0),
            Some(TokenUnit::Rad) => self.value.to_degrees(),
            Some(TokenUnit::Turn) => self.value * 360.0,
            Some(TokenUnit::Deg | TokenUnit::Percent) | None => self.value,
        }
    }

    /// Alpha is a raw value or a percentage of `1`.
    #[must_use]
    pub fn as_alpha(&self) -> f64 { self.scaled_percent_or_raw(1.0) }
}

/// Matches a whole [`NumericToken`] (or `none`) at the start of `input`.
///
/// # Errors
///
/// Returns a nom parsing error if the input starts with neither form.
pub fn parse_numeric_token(input: &str) -> IResult<&str, NumericToken> {
    alt((
        value(NumericToken::NONE, tag(NONE_KEYWORD)),
        map((parse_number, opt(parse_unit)), |(value, unit)| NumericToken {
            value,
            unit,
        }),
    ))
    .parse(input)
}

#[rustfmt::skip]
fn parse_number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize((
            /* sign */ opt(one_of("+-")),
            /* mantissa */
            alt((
                recognize((digit1, opt((char('.'), digit0)))),
                recognize((char('.'), digit1)),
            )),
            /* exponent */ opt((one_of("eE"), opt(one_of("+-")), digit1)),
        )),
        str::parse::<f64>,
    )
    .parse(input)
}

fn parse_unit(input: &str) -> IResult<&str, TokenUnit> {
    alt((
        value(TokenUnit::Deg, tag_no_case("deg")),
        value(TokenUnit::Grad, tag_no_case("grad")),
        value(TokenUnit::Rad, tag_no_case("rad")),
        value(TokenUnit::Turn, tag_no_case("turn")),
        value(TokenUnit::Percent, tag("%")),
    ))
    .parse(input)
}
