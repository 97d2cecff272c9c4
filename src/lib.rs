//! Repopin: A Zellij plugin for searching GitHub repositories and pinning the
//! ones worth keeping around.
//!
//! Repopin is a terminal multiplexer plugin that provides:
//! - Search-as-you-type over GitHub's repository search, debounced
//! - A compact results table (name, owner, stars) with query highlighting
//! - A pinned area collecting promoted results, each removable on its own
//! - A loading indicator while a search is in flight

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Input controller
//! │  - Event handling and debouncing                    │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Panels        │   │ Search        │
//! │ (ui/)         │   │ (panels/)     │   │ (search/)     │
//! │ - Layout      │   │ - Results     │   │ - Tickets     │
//! │ - Theming     │   │ - Pinned      │   │ - Requests    │
//! │ - Components  │   │ - Loader      │   │ - Decoding    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Error types (domain/error)                       │
//! │  - Candidate, pin and query models (domain/)        │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing fmt layer → rotating log file            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/repopin.wasm" {
//!         debounce_ms "500"
//!         per_page "5"
//!         api_token "ghp_..."
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Flow
//!
//! 1. Keystrokes edit the query and arm a debounce timer
//! 2. The last timer to fire settles the query; a blank query hides the
//!    results, anything else becomes an [`Action::Search`] once the user has
//!    granted web access (before that it renders as "Nothing found.")
//! 3. The shim runs the request through Zellij's `web_request`
//! 4. The response comes back as [`Event::SearchCompleted`]; only the latest
//!    search may render, and failures render as "Nothing found."
//! 5. Clicking (or pressing `Enter` on) a result pins it
//!
//! # Example
//!
//! ```rust
//! use repopin::{handle_event, initialize, Action, Config, Event};
//!
//! let config = Config { debounce_ms: 250, ..Default::default() };
//! let mut state = initialize(&config);
//! handle_event(&mut state, &Event::PermissionsResult { granted: true })?;
//!
//! let (_, actions) = handle_event(&mut state, &Event::Char('z'))?;
//! assert!(matches!(actions[0], Action::ScheduleTimer { .. }));
//!
//! let (_, actions) = handle_event(&mut state, &Event::TimerElapsed)?;
//! assert!(matches!(actions[0], Action::Search(_)));
//! # Ok::<(), repopin::RepoPinError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod panels;
pub mod search;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, Focus, SearchPhase};
pub use domain::{Candidate, PinId, PinnedEntry, Query, RepoPinError, Result, SearchFailure};
pub use ui::Theme;

use search::{DEFAULT_API_URL, DEFAULT_PER_PAGE};
use std::collections::BTreeMap;

/// Quiet period after the last keystroke before a search runs.
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone)]
pub struct Config {
    /// Quiet period in milliseconds. Default: 500
    pub debounce_ms: u64,

    /// Results shown per search, clamped to 1..=100 by the client. Default: 5
    pub per_page: u32,

    /// API root without trailing slash. Default: `https://api.github.com`
    pub api_url: String,

    /// Personal access token sent as a bearer token. Raises the rate limit.
    pub api_token: Option<String>,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file; `~` maps to the sandbox's `/host`.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for the log file. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            per_page: DEFAULT_PER_PAGE,
            api_url: DEFAULT_API_URL.to_string(),
            api_token: None,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unparseable numbers and blank strings fall back to the defaults.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use repopin::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("debounce_ms".to_string(), "300".to_string());
    /// map.insert("per_page".to_string(), "ten".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.debounce_ms, 300);
    /// assert_eq!(config.per_page, 5);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let text = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        let debounce_ms = config
            .get("debounce_ms")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_DEBOUNCE_MS);

        let per_page = config
            .get("per_page")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(DEFAULT_PER_PAGE);

        Self {
            debounce_ms,
            per_page,
            api_url: text("api_url").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            api_token: text("api_token"),
            theme_name: text("theme"),
            theme_file: text("theme_file"),
            trace_level: text("trace_level"),
        }
    }
}

/// Initializes the plugin state from configuration.
///
/// The theme comes from `theme_file`, else `theme`, else the default; a theme
/// that fails to load is logged and replaced by the default.
///
/// ```rust
/// use repopin::{initialize, Config};
///
/// let config = Config {
///     theme_name: Some("catppuccin-latte".to_string()),
///     ..Default::default()
/// };
/// let state = initialize(&config);
/// assert_eq!(state.theme.name, "catppuccin-latte");
/// ```
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing repopin plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            let path = infrastructure::expand_tilde(theme_file);
            Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(config, theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config.debounce_ms, 500);
        assert_eq!(config.per_page, 5);
        assert_eq!(config.api_url, "https://api.github.com");
        assert!(config.api_token.is_none());
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn values_are_parsed() {
        let config = Config::from_zellij(&map(&[
            ("debounce_ms", " 120 "),
            ("per_page", "30"),
            ("api_url", "http://localhost:8080"),
            ("api_token", "secret"),
            ("theme", "catppuccin-frappe"),
            ("trace_level", "repopin=debug"),
        ]));

        assert_eq!(config.debounce_ms, 120);
        assert_eq!(config.per_page, 30);
        assert_eq!(config.api_url, "http://localhost:8080");
        assert_eq!(config.api_token.as_deref(), Some("secret"));
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-frappe"));
        assert_eq!(config.trace_level.as_deref(), Some("repopin=debug"));
    }

    #[test]
    fn blank_token_is_none() {
        let config = Config::from_zellij(&map(&[("api_token", "   "), ("debounce_ms", "-1")]));
        assert!(config.api_token.is_none());
        assert_eq!(config.debounce_ms, DEFAULT_DEBOUNCE_MS);
    }

    #[test]
    fn per_page_is_clamped_by_client() {
        let state = initialize(&Config { per_page: 500, ..Config::default() });
        assert_eq!(state.client.per_page(), 100);
    }

    #[test]
    fn unknown_theme_falls_back() {
        let state = initialize(&Config {
            theme_name: Some("nope".to_string()),
            ..Config::default()
        });
        assert_eq!(state.theme.name, "catppuccin-mocha");
    }

    #[test]
    fn theme_file_wins_over_name() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        let custom = include_str!("../themes/catppuccin-latte.toml")
            .replace("name = \"catppuccin-latte\"", "name = \"mine\"");
        file.write_all(custom.as_bytes()).unwrap();

        let state = initialize(&Config {
            theme_name: Some("catppuccin-frappe".to_string()),
            theme_file: Some(file.path().to_string_lossy().into_owned()),
            ..Config::default()
        });
        assert_eq!(state.theme.name, "mine");
    }
}
