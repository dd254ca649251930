//! Text helpers behind the template filters.

use unicode_width::UnicodeWidthStr;

/// Returns the display width of a string in terminal columns.
///
/// Wide characters (CJK, most emoji) count as two columns.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Pads a string on the right to `width` display columns.
///
/// Strings already at or beyond `width` are returned unchanged; nothing is
/// truncated.
///
/// ```rust
/// use subverb_render::pad_right;
///
/// assert_eq!(pad_right("he", 5), "he   ");
/// assert_eq!(pad_right("toolong", 3), "toolong");
/// ```
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    let mut out = String::with_capacity(s.len() + pad);
    out.push_str(s);
    out.extend(std::iter::repeat(' ').take(pad));
    out
}

/// Upper-cases the first character and leaves the rest untouched.
///
/// ```rust
/// use subverb_render::capitalize;
///
/// assert_eq!(capitalize("hey does stuff"), "Hey does stuff");
/// assert_eq!(capitalize("eBay"), "EBay");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
