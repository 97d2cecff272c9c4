//! Display regions driven by the input controller.
//!
//! Each panel is plain state owned by [`AppState`](crate::app::AppState) and
//! handed to the code that needs it; nothing looks panels up globally.
//!
//! - [`results`]: transient search results with typed entry ids
//! - [`pinned`]: promoted results with per-block removal
//! - [`loader`]: the loading indicator and its release guard

pub mod loader;
pub mod pinned;
pub mod results;

pub use loader::{InFlight, LoadingIndicator};
pub use pinned::PinnedArea;
pub use results::{EntryId, ResultEntry, ResultsContent, ResultsList, NOTHING_FOUND};
