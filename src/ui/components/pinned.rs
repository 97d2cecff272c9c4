//! Pinned area renderer.
//!
//! Every block starts with its removal control so the control sits at a fixed
//! column for mouse hit-testing.
//!
//! ```text
//!  Pinned (2)
//! [x] Name: tokio  Owner: tokio-rs  Stars: 27000        3m ago
//! ```

use crate::ui::helpers::{pad, position_cursor};
use crate::ui::layout::REMOVE_CONTROL;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{PinnedRow, PinnedView};

pub fn render_pinned_heading(out: &mut String, row: usize, pinned: &PinnedView, theme: &Theme) -> usize {
    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str(&pinned.title);
    out.push_str(Theme::reset());
    row + 1
}

/// Renders one pinned block at `row` with its age right-aligned.
pub fn render_pinned_row(out: &mut String, row: usize, block: &PinnedRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);

    let (text_fg, row_bg) = if block.is_selected {
        (
            Theme::fg(&theme.colors.selection_fg),
            Some(Theme::bg(&theme.colors.selection_bg)),
        )
    } else {
        (Theme::fg(&theme.colors.text_normal), None)
    };

    if let Some(bg) = &row_bg {
        out.push_str(bg);
    }
    out.push_str(&Theme::fg(&theme.colors.remove_control_fg));
    out.push_str(REMOVE_CONTROL);
    out.push_str(&text_fg);
    out.push(' ');
    out.push_str(&block.summary);

    let used = REMOVE_CONTROL.len() + 1 + block.summary.chars().count();
    let age_len = block.age.chars().count();
    pad(out, cols.saturating_sub(used + age_len + 1).max(1));
    if !block.is_selected {
        out.push_str(&Theme::fg(&theme.colors.text_dim));
    }
    out.push_str(&block.age);
    out.push_str(Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PinId;

    #[test]
    fn control_comes_first() {
        let theme = Theme::default();
        let block = PinnedRow {
            id: PinId(1),
            summary: "Name: tokio  Owner: tokio-rs  Stars: 1".to_string(),
            age: "just now".to_string(),
            is_selected: true,
        };

        let mut out = String::new();
        render_pinned_row(&mut out, 12, &block, &theme, 80);
        let control_at = out.find(REMOVE_CONTROL).unwrap();
        assert!(control_at < out.find("Name: tokio").unwrap());
        assert!(out.ends_with(&format!("just now{}", Theme::reset())));
    }
}
