// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::LazyLock;

use regex::Regex;

/// How many chars before a color are searched for the property name.
pub const PROPERTY_CONTEXT_WINDOW: usize = 200;

/// A property name (or custom property) followed by `:` and then anything up to the
/// end of the window that does not cross a declaration or block boundary.
static PROPERTY_CONTEXT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([\w-]+)\s*:\s*[^;{}]*$").expect("Invalid property context regex")
});

/// Scans backwards from the color at char offset `color_start_offset` for the name of
/// the declaration it belongs to, eg: `--brand-primary` in
/// `--brand-primary: oklch(0.6 0.2 250)`. Only the [`PROPERTY_CONTEXT_WINDOW`] chars
/// before the color are searched. An offset past the end of `text` is clamped.
///
/// Callers that already hold a [`crate::CharOffsets`] table for `text` should use
/// [`find_property_context_before_byte`] instead, which does not walk the text from
/// its start.
///
/// ```
/// use r3bl_oklch::find_property_context;
///
/// let text = "a { color: red; }";
/// assert_eq!(find_property_context(text, 11).as_deref(), Some("color"));
/// assert_eq!(find_property_context("a { red }", 4), None);
/// ```
#[must_use]
pub fn find_property_context(text: &str, color_start_offset: usize) -> Option<String> {
    let color_start_byte = text
        .char_indices()
        .nth(color_start_offset)
        .map_or(text.len(), |(byte_index, _)| byte_index);
    find_property_context_before_byte(text, color_start_byte)
}

/// Same as [`find_property_context`], with the color start given as a byte index into
/// `text`. The window is found by walking back at most [`PROPERTY_CONTEXT_WINDOW`]
/// chars from there, so the cost does not grow with the position of the color. An
/// index past the end is clamped, and one that is not on a char boundary yields
/// [`None`].
#[must_use]
pub fn find_property_context_before_byte(text: &str, color_start_byte: usize) -> Option<String> {
    let head = text.get(..color_start_byte.min(text.len()))?;
    let window_start = head
        .char_indices()
        .rev()
        .nth(PROPERTY_CONTEXT_WINDOW - 1)
        .map_or(0, |(byte_index, _)| byte_index);
    let window = &head[window_start..];

    PROPERTY_CONTEXT_REGEX
        .captures(window)
        .and_then(|captures| captures.get(1))
        .map(|name| name.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    fn context_of(text: &str, needle: &str) -> Option<String> {
        let byte_index = text.find(needle).unwrap();
        find_property_context(text, text[..byte_index].chars().count())
    }

    #[test_case(":root { --brand-primary: oklch(0.6 0.2 250); }", "oklch", Some("--brand-primary"))]
    #[test_case("a { color: #fff }", "#fff", Some("color"))]
    #[test_case("a { border: 1px solid red }", "red", Some("border"))]
    #[test_case("a { background-color:blue }", "blue", Some("background-color"))]
    #[test_case("a { color: red; } b { red }", "red }", None)]
    #[test_case("const c = 'red'", "red", None)]
    #[test_case("{ tint: rgb(1 2 3) }", "rgb", Some("tint"))]
    fn test_find_property_context(text: &str, needle: &str, expected: Option<&str>) {
        assert_eq2!(context_of(text, needle).as_deref(), expected);
    }

    #[test]
    fn test_window_is_bounded() {
        let text = format!("color: {}red", " ".repeat(PROPERTY_CONTEXT_WINDOW));
        assert_eq2!(context_of(&text, "red"), None);

        let text = format!("color: {}red", " ".repeat(PROPERTY_CONTEXT_WINDOW - 10));
        assert_eq2!(context_of(&text, "red").as_deref(), Some("color"));
    }

    #[test]
    fn test_char_offsets() {
        let text = "a { --ñame: 🎨 red }";
        assert_eq2!(context_of(text, "red").as_deref(), Some("--ñame"));
        assert_eq2!(find_property_context(text, 10_000), None);
    }

    #[test]
    fn test_byte_and_char_variants_agree() {
        let text = "🎨 ñ { --brand: 🎨 red; border: 1px solid #fff; } b { red }";
        for (byte_index, _) in text.char_indices() {
            let char_index = text[..byte_index].chars().count();
            assert_eq2!(
                find_property_context_before_byte(text, byte_index),
                find_property_context(text, char_index),
                "at byte {byte_index}"
            );
        }
        assert_eq2!(find_property_context_before_byte(text, 1), None);
        assert_eq2!(
            find_property_context_before_byte(text, 10_000),
            find_property_context(text, 10_000)
        );
    }

    #[test]
    fn test_byte_window_counts_chars() {
        // The same window in chars holds more bytes when the padding is multi-byte.
        let text = format!("color: {}red", "é".repeat(PROPERTY_CONTEXT_WINDOW - 10));
        let byte_index = text.find("red").unwrap();
        assert_eq2!(find_property_context_before_byte(&text, byte_index).as_deref(), Some("color"));

        let text = format!("color: {}red", "é".repeat(PROPERTY_CONTEXT_WINDOW));
        let byte_index = text.find("red").unwrap();
        assert_eq2!(find_property_context_before_byte(&text, byte_index), None);
    }
}
