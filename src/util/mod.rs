/// Length of `s` the way the browser measures `input.value.length`.
pub(crate) fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Byte offset in `s` of a browser caret position, which counts UTF-16 code
/// units. Positions past the end, or inside a surrogate pair, round up to the
/// next char boundary.
pub(crate) fn utf16_offset_to_byte(s: &str, offset: usize) -> usize {
    let mut units = 0;
    for (byte, ch) in s.char_indices() {
        if units >= offset {
            return byte;
        }
        units += ch.len_utf16();
    }
    s.len()
}

/// Short prompt for the browser's validation bubble: the message up to (not
/// including) its first `.`.
pub(crate) fn first_sentence(message: &str) -> &str {
    match message.find('.') {
        Some(i) => &message[..i],
        None => message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf16_len_counts_code_units() {
        assert_eq!(utf16_len(""), 0);
        assert_eq!(utf16_len("Foo"), 3);
        assert_eq!(utf16_len("Zürich"), 6);
        // Astral-plane characters take two code units.
        assert_eq!(utf16_len("🌉"), 2);
    }

    #[test]
    fn test_utf16_offset_to_byte() {
        assert_eq!(utf16_offset_to_byte("Foo", 0), 0);
        assert_eq!(utf16_offset_to_byte("Foo", 2), 2);
        assert_eq!(utf16_offset_to_byte("Foo", 9), 3);
        // "ü" is one unit but two bytes.
        assert_eq!(utf16_offset_to_byte("Zürich", 2), 3);
        assert_eq!(utf16_offset_to_byte("🌉x", 2), 4);
        assert_eq!(utf16_offset_to_byte("🌉x", 1), 4);
    }

    #[test]
    fn test_first_sentence() {
        assert_eq!(first_sentence("Duplicate of X. See Y."), "Duplicate of X");
        assert_eq!(first_sentence("No period here"), "No period here");
        assert_eq!(first_sentence(".leading"), "");
    }
}
