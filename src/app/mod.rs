//! Application layer coordinating state, events, and actions.
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Keys/Mouse → Events → Event Handler → State Mutations → Actions → Host calls
//!                 ↑                                            │
//!                 └────── Timer / WebRequestResult ◄───────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`debounce`]: Trailing debouncer over uncancellable host timers
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Focus, search-phase and web-access state types
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use repopin::app::{handle_event, AppState, Event};
//! use repopin::{Config, Theme};
//!
//! let mut state = AppState::new(&Config::default(), Theme::default());
//! let (_render, actions) = handle_event(&mut state, &Event::SelectNext)?;
//! assert!(actions.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod actions;
pub mod debounce;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use debounce::Debouncer;
pub use handler::{handle_event, Event};
pub use modes::{Focus, SearchPhase, WebAccess};
pub use state::{AppState, Viewport};
