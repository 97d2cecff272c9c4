//! View model types representing renderable UI state.
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer and by mouse hit-testing. They hold display-ready strings and
//! the typed ids of the entries they show, nothing else.
//!
//! # Example
//!
//! ```rust
//! use repopin::ui::viewmodel::*;
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: " GitHub Repository Search ".to_string(), loading: true },
//!     search_bar: SearchBarInfo { query: "react".to_string() },
//!     results: None,
//!     pinned: None,
//!     footer: FooterInfo { keybindings: "Esc: close".to_string() },
//! };
//! assert!(vm.header.loading);
//! ```

use crate::domain::PinId;
use crate::panels::EntryId;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub search_bar: SearchBarInfo,
    /// `None` while the results list is hidden.
    pub results: Option<ResultsView>,
    /// `None` while nothing is pinned or the pane has no room for a block.
    pub pinned: Option<PinnedView>,
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
    /// Whether the loading indicator is showing.
    pub loading: bool,
}

/// Search input box content.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    pub query: String,
}

/// Visible results list.
#[derive(Debug, Clone)]
pub enum ResultsView {
    /// The search matched nothing (or failed).
    NothingFound(EmptyState),
    /// Table rows inside the visible window; may be empty once every entry
    /// has been pinned.
    Rows(Vec<ResultRow>),
}

/// One results table row.
#[derive(Debug, Clone)]
pub struct ResultRow {
    pub id: EntryId,
    pub name: String,
    pub owner: String,
    pub stars: String,
    pub is_selected: bool,
    /// Character ranges of `name` matching the query, `(start, end)` exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Message shown in place of result rows.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
}

/// Visible pinned area.
#[derive(Debug, Clone)]
pub struct PinnedView {
    pub title: String,
    /// Rows inside the visible window; may be fewer than the pinned blocks.
    pub rows: Vec<PinnedRow>,
}

/// One pinned block.
#[derive(Debug, Clone)]
pub struct PinnedRow {
    pub id: PinId,
    pub summary: String,
    pub age: String,
    pub is_selected: bool,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
}
