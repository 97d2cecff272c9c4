//! The transient results list.
//!
//! Entries carry a typed [`EntryId`] assigned at render time. Promotion and
//! clicks address entries by id, never by position on screen, so an entry that
//! was already promoted (or belongs to an older render) simply does nothing.

use crate::domain::Candidate;

/// Message shown when a search returned nothing (or failed).
pub const NOTHING_FOUND: &str = "Nothing found.";

/// Identity of a results list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub u64);

/// One rendered candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultEntry {
    pub id: EntryId,
    pub candidate: Candidate,
}

/// What the list currently displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsContent {
    /// The "nothing found" message.
    NothingFound,
    /// Zero or more entries. Zero only happens after promoting the last one.
    Entries(Vec<ResultEntry>),
}

/// Results list state: content, visibility flag and keyboard selection.
#[derive(Debug, Clone)]
pub struct ResultsList {
    content: ResultsContent,
    visible: bool,
    selected: usize,
    next_id: u64,
}

impl Default for ResultsList {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsList {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            content: ResultsContent::Entries(Vec::new()),
            visible: false,
            selected: 0,
            next_id: 0,
        }
    }

    /// Replaces the content with `candidates` and shows the list.
    ///
    /// An empty slice renders [`NOTHING_FOUND`] instead of entries.
    pub fn render(&mut self, candidates: Vec<Candidate>) {
        self.selected = 0;
        self.visible = true;

        if candidates.is_empty() {
            self.content = ResultsContent::NothingFound;
            return;
        }

        let entries = candidates
            .into_iter()
            .map(|candidate| {
                let id = EntryId(self.next_id);
                self.next_id += 1;
                ResultEntry { id, candidate }
            })
            .collect();
        self.content = ResultsContent::Entries(entries);
    }

    /// Empties and hides the list.
    pub fn clear(&mut self) {
        self.content = ResultsContent::Entries(Vec::new());
        self.visible = false;
        self.selected = 0;
    }

    /// Removes entry `id` and returns its candidate.
    ///
    /// The rest of the list is untouched. Unknown ids return `None`.
    pub fn promote(&mut self, id: EntryId) -> Option<Candidate> {
        let ResultsContent::Entries(entries) = &mut self.content else {
            return None;
        };
        let index = entries.iter().position(|entry| entry.id == id)?;
        let entry = entries.remove(index);

        if entries.is_empty() {
            self.selected = 0;
        } else {
            self.selected = self.selected.min(entries.len() - 1);
        }

        Some(entry.candidate)
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub const fn content(&self) -> &ResultsContent {
        &self.content
    }

    /// Rendered entries; empty while showing "nothing found".
    #[must_use]
    pub fn entries(&self) -> &[ResultEntry] {
        match &self.content {
            ResultsContent::Entries(entries) => entries,
            ResultsContent::NothingFound => &[],
        }
    }

    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<EntryId> {
        self.entries().get(self.selected).map(|entry| entry.id)
    }

    /// Moves the selection to `id` if it is rendered.
    pub fn select(&mut self, id: EntryId) {
        if let Some(index) = self.entries().iter().position(|entry| entry.id == id) {
            self.selected = index;
        }
    }

    /// Moves selection down, wrapping to the top.
    pub fn select_next(&mut self) {
        let len = self.entries().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    /// Moves selection up, wrapping to the bottom.
    pub fn select_previous(&mut self) {
        let len = self.entries().len();
        if len == 0 {
            return;
        }
        self.selected = if self.selected == 0 { len - 1 } else { self.selected - 1 };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three() -> Vec<Candidate> {
        vec![
            Candidate::new("react", "facebook", 230_000),
            Candidate::new("react-native", "facebook", 120_000),
            Candidate::new("react-router", "remix-run", 53_000),
        ]
    }

    #[test]
    fn render_shows_one_entry_per_candidate() {
        let mut list = ResultsList::new();
        assert!(!list.is_visible());

        list.render(three());
        assert!(list.is_visible());
        assert_eq!(list.entries().len(), 3);
        assert_eq!(list.entries()[1].candidate.name, "react-native");
    }

    #[test]
    fn empty_render_shows_nothing_found() {
        let mut list = ResultsList::new();
        list.render(vec![]);
        assert!(list.is_visible());
        assert_eq!(list.content(), &ResultsContent::NothingFound);
        assert!(list.selected_id().is_none());
    }

    #[test]
    fn clear_hides() {
        let mut list = ResultsList::new();
        list.render(three());
        list.clear();
        assert!(!list.is_visible());
        assert!(list.entries().is_empty());
    }

    #[test]
    fn promote_removes_only_that_entry() {
        let mut list = ResultsList::new();
        list.render(three());
        let id = list.entries()[1].id;

        let promoted = list.promote(id).unwrap();
        assert_eq!(promoted.name, "react-native");
        let names: Vec<&str> = list.entries().iter().map(|e| e.candidate.name.as_str()).collect();
        assert_eq!(names, vec!["react", "react-router"]);

        assert!(list.promote(id).is_none());
    }

    #[test]
    fn ids_from_older_render_are_inert() {
        let mut list = ResultsList::new();
        list.render(three());
        let old = list.entries()[0].id;

        list.render(three());
        assert!(list.promote(old).is_none());
        assert_eq!(list.entries().len(), 3);
    }

    #[test]
    fn promoting_last_entry_keeps_list_visible() {
        let mut list = ResultsList::new();
        list.render(vec![Candidate::new("solo", "me", 1)]);
        let id = list.entries()[0].id;

        list.promote(id);
        assert!(list.is_visible());
        assert_eq!(list.content(), &ResultsContent::Entries(vec![]));
    }

    #[test]
    fn selection_wraps_and_clamps() {
        let mut list = ResultsList::new();
        list.render(three());

        list.select_previous();
        assert_eq!(list.selected_index(), 2);
        list.select_next();
        assert_eq!(list.selected_index(), 0);

        list.select_previous();
        let last = list.selected_id().unwrap();
        list.promote(last);
        assert_eq!(list.selected_index(), 1);
    }
}
