//! Results table renderer.
//!
//! Three columns, NAME / OWNER / STARS. Names carry query highlighting and the
//! selected row is painted across the full width.

use crate::ui::helpers::{self, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ResultRow;

const NAME_COLUMN: usize = 34;
const OWNER_COLUMN: usize = 22;

/// Renders the column headings at `row`.
pub fn render_results_heading(out: &mut String, row: usize, theme: &Theme) -> usize {
    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&format!(
        "{:<name$}{:<owner$}{}",
        "NAME",
        "OWNER",
        "STARS",
        name = NAME_COLUMN,
        owner = OWNER_COLUMN
    ));
    out.push_str(Theme::reset());
    row + 1
}

/// Renders one result at `row`.
pub fn render_result_row(out: &mut String, row: usize, item: &ResultRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);

    if item.is_selected {
        out.push_str(&Theme::fg(&theme.colors.selection_fg));
        out.push_str(&Theme::bg(&theme.colors.selection_bg));
    } else {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
    }

    helpers::push_highlighted(out, &item.name, &item.highlight_ranges, theme, item.is_selected);
    let name_len = item.name.chars().count();
    pad(out, NAME_COLUMN.saturating_sub(name_len).max(1));

    out.push_str(&item.owner);
    let owner_len = item.owner.chars().count();
    pad(out, OWNER_COLUMN.saturating_sub(owner_len).max(1));

    out.push_str(&item.stars);

    let line_len = NAME_COLUMN.max(name_len + 1) + OWNER_COLUMN.max(owner_len + 1) + item.stars.len();
    pad(out, cols.saturating_sub(line_len));

    out.push_str(Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::EntryId;

    #[test]
    fn row_shows_all_columns() {
        let theme = Theme::default();
        let item = ResultRow {
            id: EntryId(0),
            name: "ripgrep".to_string(),
            owner: "BurntSushi".to_string(),
            stars: "48000".to_string(),
            is_selected: false,
            highlight_ranges: vec![],
        };

        let mut out = String::new();
        assert_eq!(render_result_row(&mut out, 8, &item, &theme, 80), 9);
        let name_at = out.find("ripgrep").unwrap();
        let owner_at = out.find("BurntSushi").unwrap();
        let stars_at = out.find("48000").unwrap();
        assert!(name_at < owner_at && owner_at < stars_at);
    }
}
