//! Zellij plugin wrapper and entry point.
//!
//! This is the thin integration layer between the repopin library and the
//! Zellij plugin system. Everything that talks to the host lives here: event
//! subscription, key and mouse mapping, timers and web requests.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Key, Mouse, Timer, `WebRequestResult`, permission results
//! 3. **Update**: Map host events to library events, run the returned actions
//! 4. **Render**: Record the viewport and call the library renderer
//!
//! # Keybindings
//!
//! - Printable characters: edit the query
//! - `Backspace`: delete the last character
//! - `Ctrl+u`: clear the query
//! - `Down`/`Ctrl+n`, `Up`/`Ctrl+p`: move the selection
//! - `Tab`: switch between results and pinned blocks
//! - `Enter`: pin the selected result, or remove the selected pin
//! - `Delete`: remove the selected pin
//! - `Esc`: hide the plugin
//! - Left click: pin a result, select a pin, or remove it via `[x]`

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use repopin::search::{SearchResponse, SearchTicket};
use repopin::{handle_event, Action, Config, Event};

register_plugin!(State);

/// Plugin state wrapper.
struct State {
    /// Core application state from library layer.
    app: repopin::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: repopin::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, requests web access and subscribes to events.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        repopin::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            debounce_ms = config.debounce_ms,
            per_page = config.per_page,
            api_url = %config.api_url,
            authenticated = config.api_token.is_some(),
            "parsed configuration"
        );
        self.app = repopin::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);

        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::Timer,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Maps a host event, runs it through `handle_event` and executes the
    /// resulting actions. Returns whether to re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match Self::map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Mouse(mouse) => match Self::map_mouse_event(mouse) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::TimerElapsed,
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_request_result(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => Event::PermissionsResult {
                granted: matches!(permissions, PermissionStatus::Granted),
            },
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::trace!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled"
                );
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.app.viewport = repopin::app::Viewport { rows, cols };
        repopin::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(..) => "Mouse".to_string(),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::SelectNext),
                BareKey::Char('p') => Some(Event::SelectPrevious),
                BareKey::Char('u') => Some(Event::ClearInput),
                _ => None,
            };
        }

        Some(match key.bare_key {
            BareKey::Down => Event::SelectNext,
            BareKey::Up => Event::SelectPrevious,
            BareKey::Tab => Event::ToggleFocus,
            BareKey::Enter => Event::Activate,
            BareKey::Delete => Event::RemoveSelectedPin,
            BareKey::Esc => Event::CloseFocus,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) if !key.key_modifiers.contains(&KeyModifier::Alt) => Event::Char(c),
            _ => return None,
        })
    }

    /// Maps left clicks to application events; everything else is ignored.
    fn map_mouse_event(mouse: Mouse) -> Option<Event> {
        match mouse {
            Mouse::LeftClick(line, column) => {
                let line = usize::try_from(line).ok()?;
                Some(Event::Click { line, column })
            }
            _ => None,
        }
    }

    /// Maps a finished web request to a search completion.
    ///
    /// Requests without a search ticket in their context did not come from
    /// this plugin's searches and are dropped.
    fn map_web_request_result(status: u16, body: Vec<u8>, context: &BTreeMap<String, String>) -> Option<Event> {
        let Some(ticket) = SearchTicket::from_context(context) else {
            tracing::debug!(status, "web request result without search ticket");
            return None;
        };

        tracing::debug!(ticket = ticket.0, status, body_len = body.len(), "search response received");
        Some(Event::SearchCompleted(SearchResponse { ticket, status, body }))
    }

    /// Translates library actions to Zellij API calls.
    ///
    /// Not instrumented with the action itself: search headers may carry the
    /// API token.
    fn execute_action(action: &Action) {
        match action {
            Action::ScheduleTimer { delay } => {
                set_timeout(delay.as_secs_f64());
            }
            Action::Search(request) => {
                tracing::info!(ticket = request.ticket.0, query = %request.query, "dispatching search");
                web_request(
                    &request.url,
                    HttpVerb::Get,
                    request.headers.clone(),
                    vec![],
                    request.context(),
                );
            }
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
        }
    }
}
