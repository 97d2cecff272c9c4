//! The pinned area.

use crate::domain::{Candidate, PinId, PinnedEntry};

/// Promoted candidates in insertion order, oldest first.
///
/// Visibility is derived from content: the area shows iff it holds a block.
#[derive(Debug, Clone, Default)]
pub struct PinnedArea {
    blocks: Vec<PinnedEntry>,
    selected: usize,
    next_id: u64,
}

impl PinnedArea {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            blocks: Vec::new(),
            selected: 0,
            next_id: 0,
        }
    }

    /// Appends a block for `candidate` and returns its id.
    pub fn pin(&mut self, candidate: Candidate) -> PinId {
        let id = PinId(self.next_id);
        self.next_id += 1;

        tracing::debug!(pin = id.0, name = %candidate.name, owner = %candidate.owner, "candidate pinned");
        self.blocks.push(PinnedEntry::new(id, candidate));
        id
    }

    /// Removes block `id` only; the others keep their order.
    pub fn remove(&mut self, id: PinId) -> Option<PinnedEntry> {
        let index = self.blocks.iter().position(|block| block.id == id)?;
        let removed = self.blocks.remove(index);

        if self.blocks.is_empty() {
            self.selected = 0;
            tracing::debug!("last pin removed, hiding pinned area");
        } else {
            self.selected = self.selected.min(self.blocks.len() - 1);
        }

        Some(removed)
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.blocks.is_empty()
    }

    #[must_use]
    pub fn blocks(&self) -> &[PinnedEntry] {
        &self.blocks
    }

    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<PinId> {
        self.blocks.get(self.selected).map(|block| block.id)
    }

    pub fn select(&mut self, id: PinId) {
        if let Some(index) = self.blocks.iter().position(|block| block.id == id) {
            self.selected = index;
        }
    }

    pub fn select_next(&mut self) {
        if !self.blocks.is_empty() {
            self.selected = (self.selected + 1) % self.blocks.len();
        }
    }

    pub fn select_previous(&mut self) {
        let len = self.blocks.len();
        if len == 0 {
            return;
        }
        self.selected = if self.selected == 0 { len - 1 } else { self.selected - 1 };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_shows_area() {
        let mut area = PinnedArea::new();
        assert!(!area.is_visible());

        area.pin(Candidate::new("tokio", "tokio-rs", 27_000));
        assert!(area.is_visible());
        assert_eq!(area.blocks()[0].candidate.owner, "tokio-rs");
    }

    #[test]
    fn removing_non_last_block_keeps_area_visible() {
        let mut area = PinnedArea::new();
        let first = area.pin(Candidate::new("a", "x", 1));
        let second = area.pin(Candidate::new("b", "y", 2));

        assert_eq!(area.remove(first).unwrap().candidate.name, "a");
        assert!(area.is_visible());
        assert_eq!(area.blocks()[0].id, second);

        area.remove(second);
        assert!(!area.is_visible());
    }

    #[test]
    fn remove_unknown_is_noop() {
        let mut area = PinnedArea::new();
        area.pin(Candidate::new("a", "x", 1));
        assert!(area.remove(PinId(42)).is_none());
        assert_eq!(area.blocks().len(), 1);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut area = PinnedArea::new();
        let first = area.pin(Candidate::new("a", "x", 1));
        area.remove(first);
        let second = area.pin(Candidate::new("a", "x", 1));
        assert_ne!(first, second);
    }
}
