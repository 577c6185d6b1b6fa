// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Named colors, eg: `red`, `RebeccaPurple`, matched as whole words.

use std::sync::LazyLock;

use regex::Regex;

use super::{ByteSpanMatch, CssColorFormat, DecodeResult, NAMED_COLORS, Rejection,
            lookup_named_color};
use crate::{SrgbColor, srgb_to_oklch};

/// One alternation of every name, longest first, so that at any position the longest
/// name wins, eg: `lightgoldenrodyellow` over `lightgoldenrod...` prefixes. Word
/// boundaries are ASCII only (`redé` holds `red`). Built on first use and read-only
/// after that.
static NAMED_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let mut names: Vec<&str> = NAMED_COLORS.iter().map(|(name, _)| *name).collect();
    names.sort_by(|lhs, rhs| rhs.len().cmp(&lhs.len()).then(lhs.cmp(rhs)));
    Regex::new(&format!(r"(?i)(?-u:\b)(?:{})(?-u:\b)", names.join("|")))
        .expect("Invalid named color regex")
});

/// Every named color in `text` that is not part of a custom property or a function
/// call, in order of appearance. Named colors are always opaque.
pub(crate) fn scan_named(text: &str) -> Vec<ByteSpanMatch> {
    NAMED_COLOR_REGEX
        .find_iter(text)
        .filter_map(|found| match decode_named(text, found.range()) {
            Ok(it) => Some(it),
            Err(rejection) => {
                tracing::trace!(
                    message = "skip named color",
                    name = found.as_str(),
                    %rejection
                );
                None
            }
        })
        .collect()
}

fn decode_named(text: &str, byte_range: std::ops::Range<usize>) -> DecodeResult<ByteSpanMatch> {
    if text[..byte_range.start].ends_with('-') {
        return Err(Rejection::DashBeforeName);
    }
    if text[byte_range.end..].starts_with('(') {
        return Err(Rejection::ParenAfterName);
    }

    let [r, g, b] =
        lookup_named_color(&text[byte_range.clone()]).ok_or(Rejection::UnknownName)?;
    Ok(ByteSpanMatch {
        byte_range,
        color: srgb_to_oklch(SrgbColor::from_u8(r, g, b)),
        alpha: 1.0,
        format: CssColorFormat::Named,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, oklch_to_hex};
    use test_case::test_case;

    fn spans(text: &str) -> Vec<&str> {
        scan_named(text)
            .into_iter()
            .map(|it| &text[it.byte_range])
            .collect()
    }

    #[test]
    fn test_scan_named() {
        let text = "a { color: Red; border: 1px solid rebeccapurple }";
        assert_eq2!(spans(text), vec!["Red", "rebeccapurple"]);

        let matches = scan_named(text);
        assert_eq2!(oklch_to_hex(matches[0].color), "#ff0000");
        assert_eq2!(oklch_to_hex(matches[1].color), "#663399");
        assert!(matches.iter().all(|it| it.alpha == 1.0));
    }

    #[test]
    fn test_longest_name_wins() {
        assert_eq2!(spans("darkred"), vec!["darkred"]);
        assert_eq2!(spans("lightgoldenrodyellow"), vec!["lightgoldenrodyellow"]);
    }

    #[test_case("a: redé;", vec!["red"] ; "latin letter after")]
    #[test_case("a: éblue;", vec!["blue"] ; "latin letter before")]
    #[test_case("a: Tan中", vec!["Tan"] ; "cjk letter after")]
    fn test_scan_named_next_to_non_ascii_letter(text: &str, expected: Vec<&str>) {
        assert_eq2!(spans(text), expected);
    }

    #[test_case("var(--red)" ; "custom property")]
    #[test_case("dark-red" ; "hyphenated word")]
    #[test_case("red()" ; "function call")]
    #[test_case("reddish tangent" ; "inside a longer word")]
    #[test_case("border_red" ; "after underscore")]
    fn test_scan_named_rejections(text: &str) {
        assert_eq2!(spans(text), Vec::<&str>::new());
    }
}
