//! "Nothing found." line shown in place of result rows.

use crate::ui::helpers::{pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the message centered on `row`.
pub fn render_nothing_found(out: &mut String, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let msg_len = empty.message.chars().count();
    let msg_padding = cols.saturating_sub(msg_len) / 2;

    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
    pad(out, msg_padding);
    out.push_str(&empty.message);
    pad(out, cols.saturating_sub(msg_padding + msg_len));
    out.push_str(Theme::reset());
    row + 1
}
