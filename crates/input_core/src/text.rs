//! UTF-8 helpers for caret handling in single-line fields.

use std::borrow::Cow;

/// Clamp an arbitrary byte index to a valid UTF-8 character boundary.
///
/// Indices past the end clamp to `s.len()`; indices inside a multi-byte
/// character move back to its start.
///
/// ```
/// use input_core::clamp_to_char_boundary;
///
/// let s = "1µ2"; // 'µ' is 2 bytes
/// assert_eq!(clamp_to_char_boundary(s, 2), 1);
/// assert_eq!(clamp_to_char_boundary(s, 3), 3);
/// assert_eq!(clamp_to_char_boundary(s, 99), 4);
/// ```
#[inline]
pub fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Previous caret position before `i`, or 0 at the start.
pub fn prev_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    s[..i].char_indices().last().map(|(idx, _)| idx).unwrap_or(0)
}

/// Next caret position after `i`, or `s.len()` at the end.
pub fn next_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    s[i..]
        .chars()
        .next()
        .map(|ch| i + ch.len_utf8())
        .unwrap_or(s.len())
}

/// Strip CR and LF, since parameter fields are single-line.
///
/// ```
/// use input_core::filter_single_line;
///
/// assert_eq!(filter_single_line("1-5"), "1-5");
/// assert_eq!(filter_single_line("1-\r\n5"), "1-5");
/// ```
pub fn filter_single_line(s: &str) -> Cow<'_, str> {
    if !s.contains(['\n', '\r']) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(|c| *c != '\n' && *c != '\r').collect())
}
