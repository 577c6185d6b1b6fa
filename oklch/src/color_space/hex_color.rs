// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Hex color encoding, and a [`nom`] parser that decodes the digits (without the
//! leading `#`) of a CSS hex color in any of its four lengths:
//!
//! | Digits | Form        | Alpha                       |
//! |--------|-------------|-----------------------------|
//! | 3      | `#rgb`      | 1                           |
//! | 4      | `#rgba`     | trailing nibble             |
//! | 6      | `#rrggbb`   | 1                           |
//! | 8      | `#rrggbbaa` | trailing byte               |
//!
//! In the short forms every nibble is duplicated, so `#f60` is `#ff6600`.

use nom::{IResult, Parser,
          bytes::complete::take_while_m_n,
          combinator::{all_consuming, map_res}};

use super::{OklchColor, SrgbColor, oklch_to_srgb};

/// An sRGB color with alpha decoded from hex digits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexColor {
    pub srgb: SrgbColor,
    pub alpha: f64,
}

impl HexColor {
    fn from_bytes(red: u8, green: u8, blue: u8, alpha: Option<u8>) -> Self {
        Self {
            srgb: SrgbColor::from_u8(red, green, blue),
            alpha: alpha.map_or(1.0, |it| f64::from(it) / 255.0),
        }
    }
}

/// Converts to sRGB, scales each channel to `[0, 255]`, rounds and clamps it, and
/// prints the result as lowercase `#rrggbb`.
#[must_use]
pub fn oklch_to_hex(it: OklchColor) -> String { srgb_to_hex(oklch_to_srgb(it)) }

/// Out of gamut channels are clamped to `00` or `ff`.
#[must_use]
pub fn srgb_to_hex(it: SrgbColor) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let to_byte = |channel: f64| (channel * 255.0).round().clamp(0.0, 255.0) as u8;
    format!("#{:02x}{:02x}{:02x}", to_byte(it.r), to_byte(it.g), to_byte(it.b))
}

/// Decodes hex digits **without** the leading `#`. Returns [`None`] unless `digits`
/// is made of exactly 3, 4, 6 or 8 hex digits.
#[must_use]
pub fn parse_hex_digits(digits: &str) -> Option<HexColor> {
    let result = match digits.len() {
        3 => all_consuming((parse_hex_nibble, parse_hex_nibble, parse_hex_nibble))
            .parse(digits)
            .map(|(rem, (r, g, b))| (rem, HexColor::from_bytes(r, g, b, None))),
        4 => all_consuming((
            parse_hex_nibble,
            parse_hex_nibble,
            parse_hex_nibble,
            parse_hex_nibble,
        ))
        .parse(digits)
        .map(|(rem, (r, g, b, a))| (rem, HexColor::from_bytes(r, g, b, Some(a)))),
        6 => all_consuming((parse_hex_seg, parse_hex_seg, parse_hex_seg))
            .parse(digits)
            .map(|(rem, (r, g, b))| (rem, HexColor::from_bytes(r, g, b, None))),
        8 => all_consuming((parse_hex_seg, parse_hex_seg, parse_hex_seg, parse_hex_seg))
            .parse(digits)
            .map(|(rem, (r, g, b, a))| (rem, HexColor::from_bytes(r, g, b, Some(a)))),
        _ => return None,
    };
    result.ok().map(|(_, it)| it)
}

/// Two hex digits → one byte.
fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
    map_res(
        take_while_m_n(2, 2, helper_fns::match_is_hex_digit),
        helper_fns::parse_str_to_hex_num,
    )
    .parse(input)
}

/// One hex digit → one byte, by duplicating the nibble (`a` → `aa`).
fn parse_hex_nibble(input: &str) -> IResult<&str, u8> {
    map_res(
        take_while_m_n(1, 1, helper_fns::match_is_hex_digit),
        |it: &str| helper_fns::parse_str_to_hex_num(it).map(|nibble| nibble * 17),
    )
    .parse(input)
}

/// Helper functions to match and parse hex digits. These are not [`Parser`]
/// implementations.
mod helper_fns {
    /// Used by [`nom::combinator::map_res`], returns a [`Result`], not
    /// [`nom::IResult`].
    pub fn parse_str_to_hex_num(input: &str) -> Result<u8, std::num::ParseIntError> {
        u8::from_str_radix(input, 16)
    }

    /// Used by [`nom::bytes::complete::take_while_m_n`]; as long as it returns `true`
    /// items will be taken from the input.
    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }
}
