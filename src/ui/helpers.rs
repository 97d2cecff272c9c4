//! Shared rendering utilities.
//!
//! Components append ANSI output to a frame buffer instead of printing, so a
//! whole frame can be inspected in tests and flushed to stdout in one go.
//!
//! # Example
//!
//! ```rust
//! use repopin::ui::helpers::{position_cursor, push_highlighted};
//! use repopin::Theme;
//!
//! let theme = Theme::default();
//! let mut out = String::new();
//! position_cursor(&mut out, 8, 1);
//! push_highlighted(&mut out, "react-router", &[(0, 5)], &theme, false);
//! assert!(out.starts_with("\u{1b}[8;1H"));
//! assert!(out.ends_with("-router"));
//! ```

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed `row`/`col`.
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    out.push_str(&format!("\u{1b}[{row};{col}H"));
}

/// Appends `text` with the character ranges in `ranges` highlighted.
///
/// Ranges are character indices, `(start, end)` with `end` exclusive. Selected
/// rows skip match highlighting so the selection colors stay intact.
pub fn push_highlighted(
    out: &mut String,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        out.extend(&chars[current_pos..start]);
        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(&Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    out.extend(&chars[current_pos..]);
}

/// Appends `count` spaces.
pub fn pad(out: &mut String, count: usize) {
    out.push_str(&" ".repeat(count));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_ansi(s: &str) -> String {
        let mut plain = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c.is_ascii_alphabetic() {
                        break;
                    }
                }
            } else {
                plain.push(c);
            }
        }
        plain
    }

    #[test]
    fn highlighting_keeps_text() {
        let theme = Theme::default();
        let mut out = String::new();
        push_highlighted(&mut out, "zellij-tile", &[(0, 2), (7, 11)], &theme, false);

        assert_eq!(strip_ansi(&out), "zellij-tile");
        assert!(out.contains(&Theme::bg(&theme.colors.match_highlight_bg)));
    }

    #[test]
    fn selected_rows_are_not_highlighted() {
        let theme = Theme::default();
        let mut out = String::new();
        push_highlighted(&mut out, "tokio", &[(0, 3)], &theme, true);
        assert_eq!(out, "tokio");
    }

    #[test]
    fn out_of_range_ranges_are_clamped() {
        let theme = Theme::default();
        let mut out = String::new();
        push_highlighted(&mut out, "ñandú", &[(3, 40)], &theme, false);
        assert_eq!(strip_ansi(&out), "ñandú");
    }
}
