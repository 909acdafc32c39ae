//! Display column width of characters and strings.
//!
//! A character is narrow (1 column) when its code point lies in
//! `0x01..=0x7E` or `0xA1..=0xDF`, and wide (2 columns) otherwise. This is a
//! coarse stand-in for East-Asian width classification: combining marks and
//! emoji are not measured precisely.

/// Width of a single character in display columns (1 or 2).
pub fn char_width(c: char) -> usize {
    match c as u32 {
        0x01..=0x7E | 0xA1..=0xDF => 1,
        _ => 2,
    }
}

/// Sum of [`char_width`] over every character of `s`.
pub fn string_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}
