//! Composable UI component renderers.
//!
//! - [`header`]: Title bar and loading indicator
//! - [`search`]: Query input box
//! - [`results`]: NAME / OWNER / STARS table
//! - [`empty`]: "Nothing found." line
//! - [`pinned`]: Pinned blocks with removal controls
//! - [`footer`]: Keybinding hints
//!
//! [`render_placement`] draws a single [`Placement`] from
//! [`layout::place`](crate::ui::layout::place); the renderer loops over them.

pub mod empty;
pub mod footer;
pub mod header;
pub mod pinned;
pub mod results;
pub mod search;

use crate::ui::helpers::position_cursor;
use crate::ui::layout::{Placement, Slot};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ResultsView, UIViewModel};

/// Renders a horizontal border line at `row`.
fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Draws whatever `placement` puts at its row.
pub fn render_placement(out: &mut String, vm: &UIViewModel, placement: Placement, theme: &Theme, cols: usize) {
    let row = placement.row;
    match placement.slot {
        Slot::Header => {
            header::render_header(out, row, &vm.header, theme, cols);
        }
        Slot::Border => {
            render_border(out, row, &theme.colors.border, cols);
        }
        Slot::SearchBar => {
            search::render_search_bar(out, row, &vm.search_bar, theme, cols);
        }
        Slot::ResultsHeading => {
            results::render_results_heading(out, row, theme);
        }
        Slot::ResultRow(index) => {
            if let Some(ResultsView::Rows(rows)) = &vm.results {
                if let Some(item) = rows.get(index) {
                    results::render_result_row(out, row, item, theme, cols);
                }
            }
        }
        Slot::NothingFound => {
            if let Some(ResultsView::NothingFound(message)) = &vm.results {
                empty::render_nothing_found(out, row, message, theme, cols);
            }
        }
        Slot::PinnedHeading => {
            if let Some(view) = &vm.pinned {
                pinned::render_pinned_heading(out, row, view, theme);
            }
        }
        Slot::PinnedRow(index) => {
            if let Some(block) = vm.pinned.as_ref().and_then(|view| view.rows.get(index)) {
                pinned::render_pinned_row(out, row, block, theme, cols);
            }
        }
        Slot::Footer => {
            footer::render_footer(out, row, &vm.footer, theme, cols);
        }
    }
}
