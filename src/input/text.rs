//! Cursor Arithmetic
//!
//! Cursors into text inputs are byte offsets that always sit on a char
//! boundary. These helpers step them one character at a time so that
//! multi-byte input (accented names, for instance) never lands a cursor
//! mid-character.

/// Byte offset of the character before `cursor`, or 0 at the start
pub fn prev_boundary(value: &str, cursor: usize) -> usize {
    value[..cursor]
        .char_indices()
        .next_back()
        .map_or(0, |(i, _)| i)
}

/// Byte offset just past the character at `cursor`, or `cursor` at the end
pub fn next_boundary(value: &str, cursor: usize) -> usize {
    value[cursor..]
        .chars()
        .next()
        .map_or(cursor, |c| cursor + c.len_utf8())
}

/// Screen column of a byte cursor: the number of characters before it
pub fn column(value: &str, cursor: usize) -> usize {
    value[..cursor].chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_on_ascii() {
        assert_eq!(prev_boundary("abc", 2), 1);
        assert_eq!(prev_boundary("abc", 0), 0);
        assert_eq!(next_boundary("abc", 1), 2);
        assert_eq!(next_boundary("abc", 3), 3);
    }

    #[test]
    fn test_boundaries_on_multibyte() {
        // "é" is two bytes
        let s = "éa";
        assert_eq!(next_boundary(s, 0), 2);
        assert_eq!(next_boundary(s, 2), 3);
        assert_eq!(prev_boundary(s, 3), 2);
        assert_eq!(prev_boundary(s, 2), 0);
    }

    #[test]
    fn test_column_counts_chars_not_bytes() {
        assert_eq!(column("éa", 2), 1);
        assert_eq!(column("éa", 3), 2);
        assert_eq!(column("", 0), 0);
    }
}
