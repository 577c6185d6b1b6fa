// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The regexes in the scanner report byte indices, while callers (editors) think in
//! characters. [`CharOffsets`] converts between the two for one piece of text.

/// Byte ↔ char index table for one `&str`. Pure ASCII text (the common case for CSS)
/// needs no table at all since both indices are the same.
#[derive(Debug)]
pub struct CharOffsets {
    len_bytes: usize,
    /// Byte index of the start of every char. Empty for ASCII text.
    char_starts: Vec<usize>,
}

impl CharOffsets {
    #[must_use]
    pub fn new(text: &str) -> Self {
        let char_starts = if text.is_ascii() {
            vec![]
        } else {
            text.char_indices().map(|(byte_index, _)| byte_index).collect()
        };
        Self {
            len_bytes: text.len(),
            char_starts,
        }
    }

    fn is_ascii(&self) -> bool { self.char_starts.is_empty() }

    #[must_use]
    pub fn char_count(&self) -> usize {
        if self.is_ascii() {
            self.len_bytes
        } else {
            self.char_starts.len()
        }
    }

    /// Returns [`None`] if `char_index` is past the end of the text. The index one
    /// past the last char maps to the byte length of the text.
    #[must_use]
    pub fn char_to_byte(&self, char_index: usize) -> Option<usize> {
        if self.is_ascii() {
            return (char_index <= self.len_bytes).then_some(char_index);
        }
        match char_index.cmp(&self.char_starts.len()) {
            std::cmp::Ordering::Less => Some(self.char_starts[char_index]),
            std::cmp::Ordering::Equal => Some(self.len_bytes),
            std::cmp::Ordering::Greater => None,
        }
    }

    /// The chars `start..end` of `text`, which must be the text this table was built
    /// from. Returns [`None`] if the range is reversed or runs past the end.
    #[must_use]
    pub fn slice<'a>(&self, text: &'a str, start: usize, end: usize) -> Option<&'a str> {
        let start_byte = self.char_to_byte(start)?;
        let end_byte = self.char_to_byte(end)?;
        text.get(start_byte..end_byte)
    }

    /// `byte_index` must be on a char boundary (regex match bounds always are).
    #[must_use]
    pub fn byte_to_char(&self, byte_index: usize) -> usize {
        if self.is_ascii() {
            return byte_index;
        }
        self.char_starts.partition_point(|&start| start < byte_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_ascii() {
        let it = CharOffsets::new("red");
        assert_eq2!(it.char_count(), 3);
        assert_eq2!(it.char_to_byte(3), Some(3));
        assert_eq2!(it.char_to_byte(4), None);
        assert_eq2!(it.byte_to_char(2), 2);
    }

    #[test]
    fn test_multi_byte() {
        // "é" is 2 bytes, "😀" is 4 bytes.
        let text = "é😀#f00";
        let it = CharOffsets::new(text);
        assert_eq2!(it.char_count(), 6);
        assert_eq2!(it.char_to_byte(0), Some(0));
        assert_eq2!(it.char_to_byte(1), Some(2));
        assert_eq2!(it.char_to_byte(2), Some(6));
        assert_eq2!(it.char_to_byte(6), Some(text.len()));
        assert_eq2!(it.char_to_byte(7), None);

        assert_eq2!(it.byte_to_char(0), 0);
        assert_eq2!(it.byte_to_char(2), 1);
        assert_eq2!(it.byte_to_char(6), 2);
        assert_eq2!(it.byte_to_char(text.len()), 6);
    }

    #[test]
    fn test_slice() {
        let text = "é😀#f00";
        let it = CharOffsets::new(text);
        assert_eq2!(it.slice(text, 2, 6), Some("#f00"));
        assert_eq2!(it.slice(text, 1, 2), Some("😀"));
        assert_eq2!(it.slice(text, 3, 2), None);
        assert_eq2!(it.slice(text, 2, 7), None);
    }

    #[test]
    fn test_empty() {
        let it = CharOffsets::new("");
        assert_eq2!(it.char_count(), 0);
        assert_eq2!(it.char_to_byte(0), Some(0));
        assert_eq2!(it.char_to_byte(1), None);
    }
}
