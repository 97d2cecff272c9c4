//! Application state management and view model computation.
//!
//! [`AppState`] is the input controller: it owns the query field, the
//! debouncer, the search client and the three display regions (results list,
//! pinned area, loading indicator). Each is an explicit field constructed from
//! [`Config`]; the event handler borrows exactly the ones an event touches.
//!
//! # Example
//!
//! ```rust
//! use repopin::{AppState, Config, Theme};
//!
//! let state = AppState::new(&Config::default(), Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.results.is_none());
//! ```

use super::debounce::Debouncer;
use super::modes::{Focus, SearchPhase, WebAccess};
use crate::domain::{PinId, Query, SearchFailure};
use crate::panels::{EntryId, LoadingIndicator, PinnedArea, ResultsContent, ResultsList, NOTHING_FOUND};
use crate::search::{SearchClient, SearchOutcome, SearchRequest, SearchResponse};
use crate::ui::layout::{self, ClickTarget};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    EmptyState, FooterInfo, HeaderInfo, PinnedRow, PinnedView, ResultRow, ResultsView, SearchBarInfo,
    UIViewModel,
};
use crate::Config;
use fuzzy_matcher::skim::SkimMatcherV2;
use std::ops::Range;
use std::time::Duration;

const NAME_COLUMN_WIDTH: usize = 32;
const OWNER_COLUMN_WIDTH: usize = 20;

/// Terminal size of the last render, used to hit-test mouse clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub rows: usize,
    pub cols: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { rows: 24, cols: 80 }
    }
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Raw text of the query field.
    pub input: String,

    /// Collapses edits into one settled query.
    pub debouncer: Debouncer<String>,

    /// Builds and interprets repository searches.
    pub client: SearchClient,

    pub results: ResultsList,
    pub pinned: PinnedArea,
    pub loader: LoadingIndicator,

    pub phase: SearchPhase,
    pub focus: Focus,

    /// Answer to the web-access permission prompt.
    pub web_access: WebAccess,

    pub theme: Theme,
    pub viewport: Viewport,
}

impl AppState {
    /// Creates an idle state wired from `config`.
    #[must_use]
    pub fn new(config: &Config, theme: Theme) -> Self {
        Self {
            input: String::new(),
            debouncer: Debouncer::new(Duration::from_millis(config.debounce_ms)),
            client: SearchClient::from_config(config),
            results: ResultsList::new(),
            pinned: PinnedArea::new(),
            loader: LoadingIndicator::new(),
            phase: SearchPhase::Idle,
            focus: Focus::Results,
            web_access: WebAccess::Pending,
            theme,
            viewport: Viewport::default(),
        }
    }

    /// Records the field's new value and returns the timer delay to arm.
    pub fn input_changed(&mut self) -> Duration {
        let snapshot = self.input.clone();
        self.debouncer.trigger(snapshot)
    }

    /// Handles a settled query.
    ///
    /// A blank query clears and hides the results and makes any in-flight
    /// search stale; nothing is requested. Without web access the search fails
    /// on the spot and renders as "Nothing found.". Otherwise a search is
    /// dispatched and returned for the host to run.
    pub fn settle(&mut self, snapshot: &str) -> Option<SearchRequest> {
        let Some(query) = Query::parse(snapshot) else {
            tracing::debug!("query cleared");
            self.results.clear();
            self.client.invalidate(&mut self.loader);
            self.phase = SearchPhase::Idle;
            self.focus_valid_panel();
            return None;
        };

        if self.web_access != WebAccess::Granted {
            let failure = SearchFailure::WebAccessDenied;
            tracing::warn!(query = %query, access = ?self.web_access, error = %failure, "search failed");
            self.results.render(Vec::new());
            self.phase = SearchPhase::ShownEmpty;
            return None;
        }

        self.phase = SearchPhase::Loading;
        Some(self.client.request(&query, &mut self.loader))
    }

    /// Applies a host response. Returns whether anything visible changed.
    pub fn complete_search(&mut self, response: &SearchResponse) -> bool {
        let was_loading = self.loader.is_visible();

        match self.client.complete(response, &mut self.loader) {
            SearchOutcome::Fresh(candidates) => {
                self.phase = if candidates.is_empty() {
                    SearchPhase::ShownEmpty
                } else {
                    SearchPhase::ShownResults
                };
                self.results.render(candidates);
                true
            }
            SearchOutcome::Stale => was_loading != self.loader.is_visible(),
        }
    }

    /// Moves result `id` into the pinned area.
    pub fn promote(&mut self, id: EntryId) -> bool {
        let Some(candidate) = self.results.promote(id) else {
            tracing::debug!(entry = id.0, "promote ignored, entry not rendered");
            return false;
        };
        self.pinned.pin(candidate);
        true
    }

    /// Removes pinned block `id`.
    pub fn unpin(&mut self, id: PinId) -> bool {
        let removed = self.pinned.remove(id).is_some();
        self.focus_valid_panel();
        removed
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Results if self.pinned.is_visible() => Focus::Pinned,
            _ => Focus::Results,
        };
    }

    pub fn select_next(&mut self) {
        match self.focus {
            Focus::Results => self.results.select_next(),
            Focus::Pinned => self.pinned.select_next(),
        }
    }

    pub fn select_previous(&mut self) {
        match self.focus {
            Focus::Results => self.results.select_previous(),
            Focus::Pinned => self.pinned.select_previous(),
        }
    }

    /// Resolves a click against the last rendered viewport.
    #[must_use]
    pub fn hit_test(&self, line: usize, column: usize) -> ClickTarget {
        let vm = self.compute_viewmodel(self.viewport.rows, self.viewport.cols);
        layout::hit_test(&vm, self.viewport.rows, line, column)
    }

    fn focus_valid_panel(&mut self) {
        if self.focus == Focus::Pinned && !self.pinned.is_visible() {
            self.focus = Focus::Results;
        }
    }

    /// Computes a renderable view model for a terminal of `rows` x `cols`.
    ///
    /// Results and pinned blocks that do not fit are windowed around their
    /// selection. While something is pinned, room for its heading and one
    /// block is kept free of results. A pane too short for any block drops
    /// the pinned area from the frame.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let body = rows.saturating_sub(layout::TOP_CHROME_ROWS + layout::BOTTOM_CHROME_ROWS);
        let pinned_reserve = if self.pinned.is_visible() {
            layout::PINNED_HEADING_ROWS + 1
        } else {
            0
        };

        // one row of the results area is its heading
        let results = self.compute_results(body.saturating_sub(pinned_reserve + 1));
        let used = layout::results_rows(results.as_ref());
        let pinned = self.compute_pinned(body.saturating_sub(used + layout::PINNED_HEADING_ROWS), cols);

        UIViewModel {
            header: HeaderInfo {
                title: " GitHub Repository Search ".to_string(),
                loading: self.loader.is_visible(),
            },
            search_bar: SearchBarInfo {
                query: self.input.clone(),
            },
            results,
            pinned,
            footer: self.compute_footer(),
        }
    }

    fn compute_results(&self, available_rows: usize) -> Option<ResultsView> {
        if !self.results.is_visible() {
            return None;
        }

        let entries = match self.results.content() {
            ResultsContent::NothingFound => {
                return Some(ResultsView::NothingFound(EmptyState {
                    message: NOTHING_FOUND.to_string(),
                }));
            }
            ResultsContent::Entries(entries) => entries,
        };

        let query = self.input.trim();
        let matcher = (!query.is_empty()).then(SkimMatcherV2::default);
        let show_selection = self.focus == Focus::Results;
        let selected = self.results.selected_index();
        let window = visible_window(entries.len(), selected, available_rows);

        let rows = entries[window.clone()]
            .iter()
            .enumerate()
            .map(|(offset, entry)| ResultRow {
                id: entry.id,
                name: truncate(&entry.candidate.name, NAME_COLUMN_WIDTH),
                owner: truncate(&entry.candidate.owner, OWNER_COLUMN_WIDTH),
                stars: entry.candidate.stars.to_string(),
                is_selected: show_selection && window.start + offset == selected,
                highlight_ranges: matcher.as_ref().map_or_else(Vec::new, |m| {
                    compute_highlight_ranges(&entry.candidate.name, query, m)
                }),
            })
            .collect();

        Some(ResultsView::Rows(rows))
    }

    fn compute_pinned(&self, available_rows: usize, cols: usize) -> Option<PinnedView> {
        if !self.pinned.is_visible() || available_rows == 0 {
            return None;
        }

        let blocks = self.pinned.blocks();
        let selected = self.pinned.selected_index();
        let window = visible_window(blocks.len(), selected, available_rows);

        let summary_width = cols.saturating_sub(layout::REMOVE_CONTROL.len() + 12);
        let rows = blocks[window.clone()]
            .iter()
            .enumerate()
            .map(|(offset, block)| PinnedRow {
                id: block.id,
                summary: truncate(&block.candidate.summary(), summary_width),
                age: block.time_ago(),
                is_selected: self.focus == Focus::Pinned && window.start + offset == selected,
            })
            .collect();

        Some(PinnedView {
            title: format!(" Pinned ({}) ", blocks.len()),
            rows,
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.focus {
            Focus::Results if self.pinned.is_visible() => {
                "Type to search  ↑/↓: navigate  Enter: pin  Tab: pinned  Ctrl+u: clear  Esc: close"
            }
            Focus::Results => "Type to search  ↑/↓: navigate  Enter: pin  Ctrl+u: clear  Esc: close",
            Focus::Pinned => "↑/↓: navigate  Enter/Del: remove  Tab: results  Esc: close",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

/// Coalesces the matcher's character indices into `(start, end)` runs.
fn compute_highlight_ranges(text: &str, query: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
    use fuzzy_matcher::FuzzyMatcher;

    let Some((_score, indices)) = matcher.fuzzy_indices(text, query) else {
        return vec![];
    };

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

/// Range of at most `size` items out of `len`, centred on `selected` where
/// the ends allow it.
fn visible_window(len: usize, selected: usize, size: usize) -> Range<usize> {
    let size = size.min(len);
    let start = selected.saturating_sub(size / 2).min(len - size);
    start..start + size
}

/// Cuts `text` to `width` characters, marking the cut with "...".
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Candidate;

    fn state() -> AppState {
        AppState::new(&Config::default(), Theme::default())
    }

    #[test]
    fn highlight_ranges_are_coalesced() {
        let matcher = SkimMatcherV2::default();
        assert_eq!(compute_highlight_ranges("react-router", "react", &matcher), vec![(0, 5)]);
        assert!(compute_highlight_ranges("tokio", "zzz", &matcher).is_empty());
    }

    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a-very-long-repository", 10), "a-very-...");
    }

    #[test]
    fn toggle_focus_requires_pins() {
        let mut s = state();
        s.toggle_focus();
        assert_eq!(s.focus, Focus::Results);

        s.pinned.pin(Candidate::new("a", "b", 1));
        s.toggle_focus();
        assert_eq!(s.focus, Focus::Pinned);
        s.toggle_focus();
        assert_eq!(s.focus, Focus::Results);
    }

    #[test]
    fn removing_last_pin_returns_focus_to_results() {
        let mut s = state();
        let id = s.pinned.pin(Candidate::new("a", "b", 1));
        s.toggle_focus();

        assert!(s.unpin(id));
        assert_eq!(s.focus, Focus::Results);
        assert!(s.compute_viewmodel(24, 80).pinned.is_none());
    }

    #[test]
    fn pinned_window_follows_selection() {
        let mut s = state();
        for i in 0..30 {
            s.pinned.pin(Candidate::new(format!("repo{i}"), "me", i));
        }
        s.focus = Focus::Pinned;
        for _ in 0..29 {
            s.pinned.select_next();
        }

        let vm = s.compute_viewmodel(24, 80);
        let pinned = vm.pinned.unwrap();
        assert_eq!(pinned.title, " Pinned (30) ");
        // 24 rows - 6 top - 2 bottom - 0 results - 2 heading
        assert_eq!(pinned.rows.len(), 14);
        assert!(pinned.rows.last().unwrap().is_selected);
    }

    #[test]
    fn settle_without_web_access_shows_nothing_found() {
        let mut s = state();
        assert!(s.settle("tokio").is_none());

        assert_eq!(s.phase, SearchPhase::ShownEmpty);
        assert_eq!(s.results.content(), &ResultsContent::NothingFound);
        assert!(!s.loader.is_visible());
    }

    #[test]
    fn window_is_centred_and_clamped() {
        assert_eq!(visible_window(10, 0, 4), 0..4);
        assert_eq!(visible_window(10, 5, 4), 3..7);
        assert_eq!(visible_window(10, 9, 4), 6..10);
        assert_eq!(visible_window(3, 2, 8), 0..3);
        assert_eq!(visible_window(3, 1, 0), 0..0);
    }

    #[test]
    fn short_pane_windows_results_and_keeps_a_pin_row() {
        let mut s = state();
        s.results.render((0..5).map(|i| Candidate::new(format!("repo{i}"), "me", i)).collect());
        s.pinned.pin(Candidate::new("kept", "me", 1));

        // 14 rows: 6 body rows, 3 kept for the pinned heading and one block
        let vm = s.compute_viewmodel(14, 80);
        let Some(ResultsView::Rows(rows)) = &vm.results else {
            panic!("expected result rows");
        };
        assert_eq!(rows.len(), 2);
        assert!(rows[0].is_selected);
        assert_eq!(vm.pinned.as_ref().map(|p| p.rows.len()), Some(1));
    }

    #[test]
    fn results_window_follows_selection() {
        let mut s = state();
        s.results.render((0..40).map(|i| Candidate::new(format!("repo{i}"), "me", i)).collect());
        s.results.select_previous();

        let vm = s.compute_viewmodel(24, 80);
        let Some(ResultsView::Rows(rows)) = &vm.results else {
            panic!("expected result rows");
        };
        // 24 rows - 6 top - 2 bottom - 1 heading
        assert_eq!(rows.len(), 15);
        assert_eq!(rows.last().map(|r| r.name.as_str()), Some("repo39"));
        assert!(rows.last().is_some_and(|r| r.is_selected));
    }

    #[test]
    fn pinned_area_dropped_when_pane_has_no_room() {
        let mut s = state();
        s.pinned.pin(Candidate::new("kept", "me", 1));
        assert!(s.compute_viewmodel(10, 80).pinned.is_none());
    }

    #[test]
    fn viewmodel_reports_loader() {
        let mut s = state();
        s.web_access = WebAccess::Granted;
        s.input = "tokio".to_string();
        let request = s.settle("tokio");
        assert!(request.is_some());
        assert!(s.compute_viewmodel(24, 80).header.loading);
    }
}
