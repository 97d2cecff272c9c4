//! Event handling and state transition logic.
//!
//! # Architecture
//!
//! 1. The plugin shim maps Zellij events to [`Event`]s
//! 2. [`handle_event`] mutates [`AppState`] through its methods
//! 3. Host side effects come back as [`Action`]s for the shim to run
//!
//! # Event Types
//!
//! - **Input**: `Char`, `Backspace`, `ClearInput` edit the query and arm the
//!   debounce timer
//! - **Host**: `TimerElapsed`, `SearchCompleted`, `PermissionsResult`
//! - **Navigation**: `SelectNext`, `SelectPrevious`, `ToggleFocus`
//! - **Commands**: `Activate`, `RemoveSelectedPin`, `Click`, `CloseFocus`
//!
//! # Example
//!
//! ```rust
//! use repopin::{handle_event, Action, AppState, Config, Event, Theme};
//!
//! let mut state = AppState::new(&Config::default(), Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::Char('r'))?;
//! assert!(render);
//! assert!(matches!(actions[0], Action::ScheduleTimer { .. }));
//! # Ok::<(), repopin::RepoPinError>(())
//! ```

use super::modes::{Focus, WebAccess};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::Query;
use crate::search::SearchResponse;
use crate::ui::layout::ClickTarget;

/// Events triggered by user input or by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the query.
    Char(char),
    /// Removes the last character of the query.
    Backspace,
    /// Empties the query.
    ClearInput,

    /// A host timer armed by [`Action::ScheduleTimer`] elapsed.
    TimerElapsed,

    /// The host finished a search request.
    SearchCompleted(SearchResponse),

    /// Moves the selection down in the focused panel (wraps).
    SelectNext,
    /// Moves the selection up in the focused panel (wraps).
    SelectPrevious,
    /// Switches focus between results and pinned blocks.
    ToggleFocus,
    /// Pins the selected result, or removes the selected pin.
    Activate,
    /// Removes the selected pin.
    RemoveSelectedPin,

    /// Left click at a 0-indexed pane position.
    Click {
        line: usize,
        column: usize,
    },

    /// Outcome of the web access permission request.
    PermissionsResult {
        granted: bool,
    },

    /// Hides the plugin pane.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns `(should_render, actions)`.
///
/// # Errors
///
/// Reserved for state transitions that can fail; none of the current events
/// do, search failures are absorbed by the search client.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Char(c) => {
            state.input.push(*c);
            tracing::trace!(query = %state.input, char = %c, "query updated");
            Ok((true, vec![schedule(state)]))
        }
        Event::Backspace => {
            if state.input.pop().is_none() {
                return Ok((false, vec![]));
            }
            Ok((true, vec![schedule(state)]))
        }
        Event::ClearInput => {
            state.input.clear();
            Ok((true, vec![schedule(state)]))
        }
        Event::TimerElapsed => {
            let Some(snapshot) = state.debouncer.on_timer() else {
                return Ok((false, vec![]));
            };

            tracing::debug!(query = %snapshot, "input settled");
            match state.settle(&snapshot) {
                Some(request) => Ok((true, vec![Action::Search(request)])),
                None => Ok((true, vec![])),
            }
        }
        Event::SearchCompleted(response) => Ok((state.complete_search(response), vec![])),
        Event::SelectNext => {
            state.select_next();
            Ok((true, vec![]))
        }
        Event::SelectPrevious => {
            state.select_previous();
            Ok((true, vec![]))
        }
        Event::ToggleFocus => {
            state.toggle_focus();
            Ok((true, vec![]))
        }
        Event::Activate => {
            let changed = match state.focus {
                Focus::Results => state
                    .results
                    .selected_id()
                    .is_some_and(|id| state.promote(id)),
                Focus::Pinned => state.pinned.selected_id().is_some_and(|id| state.unpin(id)),
            };
            Ok((changed, vec![]))
        }
        Event::RemoveSelectedPin => {
            if state.focus != Focus::Pinned {
                return Ok((false, vec![]));
            }
            let removed = state.pinned.selected_id().is_some_and(|id| state.unpin(id));
            Ok((removed, vec![]))
        }
        Event::Click { line, column } => {
            let target = state.hit_test(*line, *column);
            tracing::debug!(line, column, target = ?target, "click");

            let changed = match target {
                ClickTarget::Result(id) => state.promote(id),
                ClickTarget::Pin(id) => {
                    state.pinned.select(id);
                    state.focus = Focus::Pinned;
                    true
                }
                ClickTarget::RemovePin(id) => state.unpin(id),
                ClickTarget::Nothing => false,
            };
            Ok((changed, vec![]))
        }
        Event::PermissionsResult { granted } => {
            if !*granted {
                tracing::warn!("web access denied - searches will fail");
                state.web_access = WebAccess::Denied;
                return Ok((false, vec![]));
            }

            tracing::debug!("web access granted");
            state.web_access = WebAccess::Granted;
            // a query typed while the prompt was open failed locally; run it again
            if Query::parse(&state.input).is_some() {
                return Ok((false, vec![schedule(state)]));
            }
            Ok((false, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

fn schedule(state: &mut AppState) -> Action {
    Action::ScheduleTimer {
        delay: state.input_changed(),
    }
}
