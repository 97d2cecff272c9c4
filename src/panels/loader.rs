//! Loading indicator shared by every search.

/// Tracks pending searches; visible while at least one is outstanding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadingIndicator {
    pending: usize,
}

impl LoadingIndicator {
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: 0 }
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.pending > 0
    }

    #[must_use]
    pub const fn pending(&self) -> usize {
        self.pending
    }

    /// Marks one more search as outstanding.
    pub fn begin(&mut self) {
        self.pending += 1;
    }

    /// Forgets every outstanding search.
    ///
    /// Used when the searches can no longer be answered in a way that
    /// matters, such as after the query is cleared.
    pub fn reset(&mut self) {
        self.pending = 0;
    }

    /// Arms a guard that settles one outstanding search when dropped.
    ///
    /// Whatever happens between now and the end of the guard's scope (early
    /// returns, `?`, a decoding failure) the indicator is released.
    pub fn settle_on_drop(&mut self) -> InFlight<'_> {
        InFlight { loader: self }
    }

    fn settle(&mut self) {
        self.pending = self.pending.saturating_sub(1);
    }
}

/// Releases one outstanding search on drop.
#[derive(Debug)]
pub struct InFlight<'a> {
    loader: &'a mut LoadingIndicator,
}

impl InFlight<'_> {
    /// Whether the indicator is still showing while the guard is held.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.loader.is_visible()
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.loader.settle();
        tracing::trace!(pending = self.loader.pending, "search settled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_releases_on_early_return() {
        fn settle(loader: &mut LoadingIndicator, fail: bool) -> Result<(), &'static str> {
            let guard = loader.settle_on_drop();
            assert!(guard.is_visible());
            if fail {
                return Err("boom");
            }
            Ok(())
        }

        let mut loader = LoadingIndicator::new();
        loader.begin();
        assert!(loader.is_visible());

        assert!(settle(&mut loader, true).is_err());
        assert!(!loader.is_visible());
    }

    #[test]
    fn stays_visible_while_another_search_is_pending() {
        let mut loader = LoadingIndicator::new();
        loader.begin();
        loader.begin();

        drop(loader.settle_on_drop());
        assert!(loader.is_visible());

        drop(loader.settle_on_drop());
        assert!(!loader.is_visible());
    }

    #[test]
    fn reset_hides_indicator() {
        let mut loader = LoadingIndicator::new();
        loader.begin();
        loader.begin();

        loader.reset();
        assert!(!loader.is_visible());
        assert_eq!(loader.pending(), 0);
    }

    #[test]
    fn settling_never_underflows() {
        let mut loader = LoadingIndicator::new();
        drop(loader.settle_on_drop());
        assert_eq!(loader.pending(), 0);
    }
}
