//! Domain layer for the repopin plugin.
//!
//! Core types independent of Zellij APIs:
//!
//! - [`error`]: Error types and result aliases
//! - [`candidate`]: Search result records and pinned entries
//! - [`query`]: The trimmed search query
//!
//! # Examples
//!
//! ```
//! use repopin::domain::{Candidate, Query};
//!
//! let query = Query::parse(" tokio ").unwrap();
//! let hit = Candidate::new("tokio", "tokio-rs", 27_000);
//! assert_eq!(query.as_str(), hit.name);
//! ```

pub mod candidate;
pub mod error;
pub mod query;

pub use candidate::{Candidate, PinId, PinnedEntry};
pub use error::{RepoPinError, Result, SearchFailure};
pub use query::Query;
