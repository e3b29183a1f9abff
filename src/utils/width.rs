//! Width-aware string measurement and truncation.
//!
//! The width of a code point is 1 if its value is at most 127 and 2
//! otherwise. This approximates East-Asian-width rules well enough for
//! CJK titles but is not correct for every script (combining marks,
//! emoji sequences and so on).

/// Suffix appended to a truncated string.
pub const ELLIPSIS: &str = "..";

/// Display width of a single code point.
pub fn char_width(c: char) -> usize {
    if c as u32 > 127 {
        2
    } else {
        1
    }
}

/// Display width of a string in terminal cells.
pub fn display_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Truncate `s` so that its display width never exceeds `max_width`.
///
/// Strings that already fit are returned unchanged. Otherwise the longest
/// prefix that leaves room for [`ELLIPSIS`] is kept and the suffix appended.
/// When `max_width` is too small to hold the suffix at all, the longest
/// fitting prefix is returned bare.
pub fn truncate_by_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }

    let suffix_width = display_width(ELLIPSIS);
    let (target, suffix) = if max_width >= suffix_width {
        (max_width - suffix_width, ELLIPSIS)
    } else {
        (max_width, "")
    };

    let mut out = String::with_capacity(s.len());
    let mut width = 0;
    for c in s.chars() {
        let w = char_width(c);
        if width + w > target {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push_str(suffix);
    out
}

/// Right-pad `s` with spaces until it is `width` cells wide.
///
/// Strings already at or over `width` are returned as is.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(s));
    let mut out = String::with_capacity(s.len() + padding);
    out.push_str(s);
    out.extend(std::iter::repeat(' ').take(padding));
    out
}
