// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Public entry points of the scanner: point queries and whole text scans.

use super::{ByteSpanMatch, CharOffsets, CssColorMatch, scan_functional, scan_hex,
            scan_named, scan_oklch};

/// One scan pass per syntax, in priority order. When a point query lands on spans from
/// more than one pass, the earlier pass wins.
const SCAN_PASSES: [(&str, fn(&str) -> Vec<ByteSpanMatch>); 4] = [
    ("oklch", scan_oklch),
    ("functional", scan_functional),
    ("hex", scan_hex),
    ("named", scan_named),
];

/// Returns the color literal under the char offset `offset`, if any. An offset equal
/// to a literal's start or end counts as inside it.
///
/// Syntaxes are tried in this order, and the first one with a literal that contains
/// `offset` wins:
/// 1. `oklch()`.
/// 2. `rgb()` / `rgba()`, `hsl()` / `hsla()`, `oklab()`.
/// 3. Hex.
/// 4. Named colors.
///
/// Malformed literals are skipped, so a broken `rgb(` does not hide a valid hex or
/// name right next to it.
#[must_use]
pub fn find_color_at_offset(text: &str, offset: usize) -> Option<CssColorMatch> {
    let offsets = CharOffsets::new(text);
    // Past the end of the text nothing can contain the offset.
    offsets.char_to_byte(offset)?;

    SCAN_PASSES.iter().find_map(|(_, scan)| {
        scan(text)
            .into_iter()
            .map(|it| it.into_css_color_match(&offsets))
            .find(|it| it.contains_offset(offset))
    })
}

/// Every color literal in `text` (including `oklch()` ones, so that a caller can
/// reformat them in bulk), sorted by `start_offset`. Matches from different passes
/// that start at the same offset keep the priority order of
/// [`find_color_at_offset`].
#[must_use]
pub fn find_all_colors(text: &str) -> Vec<CssColorMatch> {
    let offsets = CharOffsets::new(text);
    let mut acc = Vec::new();
    for (pass_name, scan) in SCAN_PASSES {
        let matches = scan(text);
        tracing::debug!(message = "scan pass", pass = pass_name, count = matches.len());
        acc.extend(matches.into_iter().map(|it| it.into_css_color_match(&offsets)));
    }
    acc.sort_by_key(|it| it.start_offset);
    acc
}

/// Only the `oklch()` literals in `text`, in order of appearance.
#[must_use]
pub fn find_all_oklch_colors(text: &str) -> Vec<CssColorMatch> {
    let offsets = CharOffsets::new(text);
    scan_oklch(text)
        .into_iter()
        .map(|it| it.into_css_color_match(&offsets))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CssColorFormat, OklchColor, assert_approx, assert_eq2, oklch_to_hex};
    use test_case::test_case;

    fn char_offset_of(text: &str, needle: &str) -> usize {
        text[..text.find(needle).unwrap()].chars().count()
    }

    fn slice(text: &str, it: &CssColorMatch) -> String {
        text.chars()
            .skip(it.start_offset)
            .take(it.end_offset - it.start_offset)
            .collect()
    }

    #[test]
    fn test_end_to_end_point_query() {
        let text = "body { color: oklch(0.7 0.15 180); }";
        let it = find_color_at_offset(text, char_offset_of(text, "oklch")).unwrap();
        assert_eq2!(slice(text, &it), "oklch(0.7 0.15 180)");
        assert_eq2!(it.original_format, CssColorFormat::Oklch);
        assert_eq2!(it.color, OklchColor::new(0.7, 0.15, 180.0));
        assert_eq2!(it.alpha, 1.0);
    }

    #[test]
    fn test_point_query_bounds_are_inclusive() {
        let text = "a: #fff;";
        assert_eq2!(find_color_at_offset(text, 2), None);
        assert!(find_color_at_offset(text, 3).is_some());
        assert!(find_color_at_offset(text, 7).is_some());
        assert_eq2!(find_color_at_offset(text, 8), None);
        assert_eq2!(find_color_at_offset(text, 100), None);
    }

    #[test]
    fn test_oklch_wins_inside_its_span() {
        let text = "oklch(0.7 0.15 180)";
        for offset in 0..=text.len() {
            let it = find_color_at_offset(text, offset).unwrap();
            assert_eq2!(it.original_format, CssColorFormat::Oklch);
        }
    }

    #[test_case("content: abc#ff6600;", "#ff6600" ; "hex after identifier")]
    #[test_case("var(--red)", "red" ; "named in custom property")]
    #[test_case("oklch(from var(--x) l c h)", "from" ; "relative color")]
    fn test_point_query_rejections(text: &str, needle: &str) {
        assert_eq2!(find_color_at_offset(text, char_offset_of(text, needle)), None);
    }

    #[test_case("color: red", "red", CssColorFormat::Named)]
    #[test_case("color: #f60", "#f60", CssColorFormat::Hex)]
    #[test_case("color: rgb(255 0 0)", "rgb", CssColorFormat::Rgb)]
    #[test_case("color: hsl(0 100% 50%)", "hsl", CssColorFormat::Hsl)]
    #[test_case("color: oklab(0.5 0.1 0)", "oklab", CssColorFormat::Oklab)]
    fn test_point_query_formats(text: &str, needle: &str, format: CssColorFormat) {
        let it = find_color_at_offset(text, char_offset_of(text, needle)).unwrap();
        assert_eq2!(it.original_format, format);
    }

    #[test]
    fn test_alpha_defaults_to_one() {
        let text = "oklch(0.5 0.1 20) oklab(0.5 0.1 0) rgb(1 2 3) hsl(1 2% 3%) #abc #abcdef navy";
        let matches = find_all_colors(text);
        assert_eq2!(matches.len(), 7);
        assert!(matches.iter().all(|it| it.alpha == 1.0));
    }

    #[test]
    fn test_find_all_colors_sorted_by_start() {
        let text = "c: navy; a: #fff; b: rgba(0, 0, 0, 0.5); d: oklch(0.5 0.1 20 / 30%)";
        let matches = find_all_colors(text);
        let formats: Vec<_> = matches.iter().map(|it| it.original_format).collect();
        assert_eq2!(formats, vec![
            CssColorFormat::Named,
            CssColorFormat::Hex,
            CssColorFormat::Rgb,
            CssColorFormat::Oklch,
        ]);
        assert!(matches.windows(2).all(|pair| pair[0].start_offset <= pair[1].start_offset));
        assert!(matches.iter().all(|it| it.end_offset > it.start_offset));
        assert_approx!(matches[2].alpha, 0.5, 1e-12);
        assert_approx!(matches[3].alpha, 0.3, 1e-12);
    }

    #[test]
    fn test_malformed_functional_does_not_hide_hex() {
        let text = "rgb(#fff)";
        let it = find_color_at_offset(text, char_offset_of(text, "#")).unwrap();
        assert_eq2!(it.original_format, CssColorFormat::Hex);
    }

    #[test]
    fn test_char_offsets_with_multi_byte_text() {
        let text = "/* 🎨 palette */ a { color: #ff0000; b: oklch(0.5 0.1 20) }";
        let matches = find_all_colors(text);
        assert_eq2!(matches.len(), 2);
        assert_eq2!(slice(text, &matches[0]), "#ff0000");
        assert_eq2!(slice(text, &matches[1]), "oklch(0.5 0.1 20)");
        assert_eq2!(oklch_to_hex(matches[0].color), "#ff0000");

        let at = find_color_at_offset(text, matches[0].start_offset).unwrap();
        assert_eq2!(at, matches[0]);
    }

    #[test]
    fn test_markdown_and_jsx() {
        let text = "Use `#663399` or <div style={{ color: 'rebeccapurple' }} />";
        let spans: Vec<_> = find_all_colors(text).iter().map(|it| slice(text, it)).collect();
        assert_eq2!(spans, vec!["#663399", "rebeccapurple"]);
    }

    #[test]
    fn test_find_all_oklch_colors() {
        let text = "#fff oklch(0.5 0.1 20) red oklch(1 0 0 / 0.5)";
        let matches = find_all_oklch_colors(text);
        assert_eq2!(matches.len(), 2);
        assert!(matches.iter().all(|it| it.original_format == CssColorFormat::Oklch));
    }

    #[test]
    fn test_empty_text() {
        assert_eq2!(find_all_colors(""), vec![]);
        assert_eq2!(find_color_at_offset("", 0), None);
    }
}
