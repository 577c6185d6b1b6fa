// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Splits the interior of a color function, eg: `0.7 0.15 180 / 50%` or
//! `255, 0, 0, 0.5`, into channel tokens and an optional alpha token.

use smallvec::SmallVec;

use super::NumericToken;

/// Which separators a color function accepts between its channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgSyntax {
    /// `oklch()`: channels are separated by whitespace only.
    SpaceOnly,
    /// `rgb()`, `hsl()`, `oklab()`: whitespace, or the legacy comma syntax where a
    /// fourth comma separated value is the alpha.
    SpaceOrLegacyComma,
}

/// Channel tokens are trimmed, never empty in the space syntax, and possibly empty in
/// the comma syntax (which then fails to parse as a number).
#[derive(Clone, Debug, PartialEq)]
pub struct ColorArgs<'a> {
    pub channels: SmallVec<[&'a str; 4]>,
    pub alpha: Option<&'a str>,
}

impl<'a> ColorArgs<'a> {
    /// Every supported color function has exactly three channels.
    #[must_use]
    pub fn three_channels(&self) -> Option<[&'a str; 3]> {
        match self.channels.as_slice() {
            &[first, second, third] => Some([first, second, third]),
            _ => None,
        }
    }

    /// `1` when there is no alpha term, [`None`] when there is one that is not a
    /// valid [`NumericToken`].
    #[must_use]
    pub fn alpha_value(&self) -> Option<f64> {
        match self.alpha {
            None => Some(1.0),
            Some(token) => NumericToken::try_parse(token).map(|it| it.as_alpha()),
        }
    }
}

/// Returns [`None`] if `interior` has more than one `/`.
#[must_use]
pub fn split_color_args(interior: &str, syntax: ArgSyntax) -> Option<ColorArgs<'_>> {
    let mut slash_parts = interior.split('/');
    let color_part = slash_parts.next().unwrap_or_default().trim();
    let alpha = slash_parts.next().map(str::trim);
    if slash_parts.next().is_some() {
        return None;
    }

    if syntax == ArgSyntax::SpaceOrLegacyComma && color_part.contains(',') {
        let mut channels: SmallVec<[&str; 4]> =
            color_part.split(',').map(str::trim).collect();
        if channels.len() == 4 && alpha.is_none() {
            let legacy_alpha = channels.pop();
            return Some(ColorArgs {
                channels,
                alpha: legacy_alpha,
            });
        }
        return Some(ColorArgs { channels, alpha });
    }

    Some(ColorArgs {
        channels: color_part.split_whitespace().collect(),
        alpha,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use smallvec::smallvec;

    #[test]
    fn test_space_syntax() {
        let it = split_color_args("0.7  0.15\t180", ArgSyntax::SpaceOnly).unwrap();
        assert_eq2!(it.three_channels(), Some(["0.7", "0.15", "180"]));
        assert_eq2!(it.alpha, None);
    }

    #[test]
    fn test_space_syntax_with_alpha() {
        let it = split_color_args("0.7 0.15 180 / 50%", ArgSyntax::SpaceOnly).unwrap();
        assert_eq2!(it.three_channels(), Some(["0.7", "0.15", "180"]));
        assert_eq2!(it.alpha, Some("50%"));
    }

    #[test]
    fn test_more_than_one_slash() {
        assert_eq2!(split_color_args("1 2 3 / 4 / 5", ArgSyntax::SpaceOnly), None);
    }

    #[test]
    fn test_empty_alpha_is_invalid() {
        let it = split_color_args("1 2 3 /", ArgSyntax::SpaceOnly).unwrap();
        assert_eq2!(it.alpha, Some(""));
        assert_eq2!(it.alpha_value(), None);
    }

    #[test]
    fn test_alpha_value() {
        let no_alpha = split_color_args("1 2 3", ArgSyntax::SpaceOnly).unwrap();
        assert_eq2!(no_alpha.alpha_value(), Some(1.0));

        let percent = split_color_args("1 2 3 / 25%", ArgSyntax::SpaceOnly).unwrap();
        assert_eq2!(percent.alpha_value(), Some(0.25));

        let none = split_color_args("1 2 3 / none", ArgSyntax::SpaceOnly).unwrap();
        assert_eq2!(none.alpha_value(), Some(0.0));
    }

    #[test]
    fn test_legacy_comma_alpha() {
        let it = split_color_args("255, 0, 0, 0.5", ArgSyntax::SpaceOrLegacyComma).unwrap();
        assert_eq2!(it.three_channels(), Some(["255", "0", "0"]));
        assert_eq2!(it.alpha, Some("0.5"));
    }

    #[test]
    fn test_legacy_comma_with_slash_alpha() {
        let it = split_color_args("255, 0, 0, 9 / 0.5", ArgSyntax::SpaceOrLegacyComma)
            .unwrap();
        assert_eq2!(it.channels.len(), 4);
        assert_eq2!(it.three_channels(), None);
        assert_eq2!(it.alpha, Some("0.5"));
    }

    #[test]
    fn test_commas_ignored_in_space_only_syntax() {
        let it = split_color_args("0.7,0.15,180", ArgSyntax::SpaceOnly).unwrap();
        let expected: SmallVec<[&str; 4]> = smallvec!["0.7,0.15,180"];
        assert_eq2!(it.channels, expected);
    }
}
