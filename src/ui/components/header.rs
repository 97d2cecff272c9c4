//! Header component renderer.
//!
//! Centered title bar. While a search is in flight the loading indicator is
//! appended to the title.

use crate::ui::helpers::{pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Text of the loading indicator.
pub const LOADING_TEXT: &str = "searching...";

/// Renders the header at `row`, returning the next free row.
///
/// ```text
/// [padding] TITLE searching... [padding]
/// ```
pub fn render_header(out: &mut String, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = header.title.chars().count();
    let loader_len = if header.loading { LOADING_TEXT.len() + 1 } else { 0 };
    let padding = cols.saturating_sub(title_len + loader_len) / 2;

    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        out.push_str(&Theme::bg(bg));
    }

    pad(out, padding);
    out.push_str(&header.title);
    if header.loading {
        out.push(' ');
        out.push_str(&Theme::fg(&theme.colors.loader_fg));
        out.push_str(LOADING_TEXT);
    }
    pad(out, cols.saturating_sub(padding + title_len + loader_len));

    out.push_str(Theme::reset());
    row + 1
}
