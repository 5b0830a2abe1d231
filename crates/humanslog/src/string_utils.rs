//! Text measurement for table layout

use std::borrow::Cow;
use unicode_width::UnicodeWidthStr;

/// Remove ANSI CSI sequences (`ESC [ ... <letter>`) from `s`
pub(crate) fn strip_ansi_codes(s: &str) -> Cow<'_, str> {
    if !s.contains('\x1b') {
        return Cow::Borrowed(s);
    }
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\x1b' {
            result.push(ch);
            continue;
        }
        if chars.next_if_eq(&'[').is_some() {
            for ch in chars.by_ref() {
                if ch.is_ascii_alphabetic() {
                    break;
                }
            }
        }
    }
    Cow::Owned(result)
}

/// Terminal columns occupied by `s`, ignoring escape sequences.
///
/// East Asian wide characters and most emoji take two columns, combining
/// marks take none.
pub(crate) fn display_width(s: &str) -> usize {
    strip_ansi_codes(s).width()
}
