//! Actions representing side effects to be executed by the plugin runtime.
//!
//! [`handle_event`](crate::app::handle_event) returns a `Vec<Action>` after
//! each event; the plugin shim translates them into Zellij host calls. Keeping
//! the effects as data is what lets the whole input pipeline run under plain
//! unit tests.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use repopin::app::Action;
//!
//! let actions = vec![Action::ScheduleTimer { delay: Duration::from_millis(500) }];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::search::SearchRequest;
use std::time::Duration;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Arms a host timer (`set_timeout`) for the debouncer.
    ScheduleTimer {
        /// Time until the host reports `Event::Timer`.
        delay: Duration,
    },

    /// Hands a repository search to the host (`web_request`).
    ///
    /// The host answers with `WebRequestResult`, echoing the request context.
    Search(SearchRequest),

    /// Hides the plugin pane.
    CloseFocus,
}
