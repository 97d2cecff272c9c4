//! Focus and search-phase state types.
//!
//! # State Machine
//!
//! [`SearchPhase`] follows the settled query:
//!
//! ```text
//! Idle ──settle(non-empty)──► Loading ──fresh(≥1)──► ShownResults
//!   ▲                            │                       │
//!   │                            └──fresh(0)/failure──► ShownEmpty
//!   └───────────────settle(empty)────────────────────────┘
//! ```
//!
//! Typing always edits the query; [`Focus`] only decides which panel the
//! navigation keys and `Enter` act on.

/// Panel receiving navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Up/down move through search results, Enter pins the selection.
    #[default]
    Results,
    /// Up/down move through pinned blocks, Enter removes the selection.
    Pinned,
}

/// Where the current query is in its search lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    /// No query; results hidden.
    #[default]
    Idle,
    /// Latest search dispatched, waiting for the host.
    Loading,
    /// Latest search rendered at least one entry.
    ShownResults,
    /// Latest search rendered the "nothing found" message.
    ShownEmpty,
}

/// Whether the host will run web requests for this plugin.
///
/// Zellij drops `web_request` calls silently until `WebAccess` is granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WebAccess {
    /// The permission prompt has not been answered yet.
    #[default]
    Pending,
    Granted,
    Denied,
}
