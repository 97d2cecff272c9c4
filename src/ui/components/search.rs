//! Search bar component renderer.
//!
//! A three-row bordered box holding the query field:
//!
//! ```text
//! [margin] ┌─────────────┐
//! [margin] │ Search: ... │
//! [margin] └─────────────┘
//! ```

use crate::ui::helpers::{pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box.
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the search box starting at `row`, returning the row below it.
pub fn render_search_bar(out: &mut String, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.search_bar_border);

    position_cursor(out, row, 1);
    pad(out, SEARCH_BOX_MARGIN);
    out.push_str(&border);
    out.push_str(&format!("┌{}┐", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    // keep the tail of long queries visible, that is where the cursor is
    let prefix = " Search: ";
    let room = inner_width.saturating_sub(prefix.len() + 1);
    let query_len = search.query.chars().count();
    let shown: String = search.query.chars().skip(query_len.saturating_sub(room)).collect();
    let text_len = prefix.len() + shown.chars().count();

    position_cursor(out, row + 1, 1);
    pad(out, SEARCH_BOX_MARGIN);
    out.push_str(&border);
    out.push('│');
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(prefix);
    out.push_str(&shown);
    out.push_str(&Theme::fg(&theme.colors.selection_bg));
    out.push('▏');
    pad(out, inner_width.saturating_sub(text_len + 1));
    out.push_str(&border);
    out.push('│');
    out.push_str(Theme::reset());

    position_cursor(out, row + 2, 1);
    pad(out, SEARCH_BOX_MARGIN);
    out.push_str(&border);
    out.push_str(&format!("└{}┘", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    row + 3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_query_shows_its_tail() {
        let theme = Theme::default();
        let search = SearchBarInfo {
            query: format!("{}tail", "x".repeat(200)),
        };
        let mut out = String::new();
        assert_eq!(render_search_bar(&mut out, 4, &search, &theme, 40), 7);
        assert!(out.contains("tail"));
        assert!(!out.contains(&"x".repeat(40)));
    }
}
