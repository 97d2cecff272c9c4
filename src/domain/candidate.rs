//! Search result records and their pinned form.
//!
//! A [`Candidate`] is a repository returned by a search. It only lives inside
//! the results list entry that rendered it; promoting the entry moves it into a
//! [`PinnedEntry`], which stays until its removal control is used.

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3600;
const SECONDS_PER_DAY: i64 = 86400;

/// A single repository returned by a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Repository name, without the owner.
    pub name: String,
    /// Login of the owning user or organisation.
    pub owner: String,
    /// Stargazer count.
    pub stars: u64,
}

impl Candidate {
    #[must_use]
    pub fn new(name: impl Into<String>, owner: impl Into<String>, stars: u64) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            stars,
        }
    }

    /// One-line description used by the pinned area.
    ///
    /// ```
    /// use repopin::Candidate;
    ///
    /// let c = Candidate::new("react", "facebook", 230_000);
    /// assert_eq!(c.summary(), "Name: react  Owner: facebook  Stars: 230000");
    /// ```
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Name: {}  Owner: {}  Stars: {}",
            self.name, self.owner, self.stars
        )
    }
}

/// Identity of a pinned block, stable until the block is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PinId(pub u64);

/// A candidate promoted into the pinned area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinnedEntry {
    pub id: PinId,
    pub candidate: Candidate,
    /// Unix timestamp of the promotion.
    pub pinned_at: i64,
}

impl PinnedEntry {
    /// Creates a pinned entry stamped with the current time.
    #[must_use]
    pub fn new(id: PinId, candidate: Candidate) -> Self {
        Self {
            id,
            candidate,
            pinned_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Returns how long ago the entry was pinned.
    ///
    /// - under a minute: "just now"
    /// - under an hour: "Xm ago"
    /// - under a day: "Xh ago"
    /// - otherwise: "Xd ago"
    ///
    /// ```
    /// use repopin::{Candidate, PinId, PinnedEntry};
    ///
    /// let mut pin = PinnedEntry::new(PinId(1), Candidate::new("serde", "serde-rs", 9000));
    /// assert_eq!(pin.time_ago(), "just now");
    ///
    /// pin.pinned_at = chrono::Utc::now().timestamp() - 300;
    /// assert_eq!(pin.time_ago(), "5m ago");
    /// ```
    #[must_use]
    pub fn time_ago(&self) -> String {
        let diff = chrono::Utc::now().timestamp() - self.pinned_at;

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            format!("{}m ago", diff / SECONDS_PER_MINUTE)
        } else if diff < SECONDS_PER_DAY {
            format!("{}h ago", diff / SECONDS_PER_HOUR)
        } else {
            format!("{}d ago", diff / SECONDS_PER_DAY)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_ago_buckets() {
        let now = chrono::Utc::now().timestamp();
        let mut pin = PinnedEntry::new(PinId(0), Candidate::new("a", "b", 0));

        pin.pinned_at = now - 2 * SECONDS_PER_HOUR;
        assert_eq!(pin.time_ago(), "2h ago");

        pin.pinned_at = now - 3 * SECONDS_PER_DAY;
        assert_eq!(pin.time_ago(), "3d ago");
    }
}
