//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the Gazette library
//! and the Zellij plugin system. It implements the `ZellijPlugin` trait,
//! translates host events into library events, and executes the actions the
//! library hands back.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for Key, Mouse, Timer, `WebRequestResult` events
//! 3. **Permissions Granted**: Send `Event::PageReady`, which requests the feed
//! 4. **Update**: Handle events, delegate to library layer
//! 5. **Render**: Record the viewport, call library render function
//!
//! # Event Mapping
//!
//! Zellij events are translated to library events:
//!
//! - `Key` → [`gazette::app::keys::key_event`] for the current focus
//! - `Mouse(LeftClick)` → [`gazette::ui::layout::hit_test`]
//! - `Mouse(ScrollUp/Down)` → detail scroll, or card selection
//! - `WebRequestResult` → `Event::ArticlesFetched`
//! - `Timer` → `Event::StatusTimerElapsed`

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use gazette::app::keys::{self, KeyInput};
use gazette::app::{Direction, LoadState};
use gazette::ui::layout::{self, Viewport};
use gazette::{handle_event, Action, Config, Event};

register_plugin!(State);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with Zellij-specific concerns.
struct State {
    /// Core application state from library layer.
    app: gazette::app::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: gazette::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Parses configuration, initializes application state, requests
    /// permissions and subscribes to events. The feed is not requested until
    /// permissions are granted.
    ///
    /// # Permissions
    ///
    /// Requests:
    /// - `WebAccess`: Fetch the article feed
    /// - `ReadApplicationState`: Receive mouse and timer events
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        gazette::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(source_url = %config.source_url(), categories = ?config.categories, "parsed configuration");
        self.app = gazette::initialize(&config);

        request_permission(&[
            PermissionType::WebAccess,
            PermissionType::ReadApplicationState,
        ]);

        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::Timer,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates Zellij events to library events, delegates to `handle_event`,
    /// and executes resulting actions. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Mouse(mouse) => match self.map_mouse_event(mouse) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                Event::ArticlesFetched {
                    status,
                    body,
                    context,
                }
            }
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::StatusTimerElapsed,
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                match self.map_permission_result(permissions) {
                    Some(event) => event,
                    None => return true,
                }
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI.
    ///
    /// Records the pane size first so navigation and hit testing use the
    /// geometry that is actually on screen.
    fn render(&mut self, rows: usize, cols: usize) {
        self.app.viewport = Viewport::new(rows, cols);
        gazette::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(mouse) => format!("Mouse({mouse:?})"),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    ///
    /// Keys chorded with Ctrl or Alt are left to Zellij.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) || key.has_modifiers(&[KeyModifier::Alt]) {
            return None;
        }

        let input = match key.bare_key {
            BareKey::Char(c) => KeyInput::Char(c),
            BareKey::Enter => KeyInput::Enter,
            BareKey::Esc => KeyInput::Esc,
            BareKey::Tab => KeyInput::Tab,
            BareKey::Backspace => KeyInput::Backspace,
            BareKey::Left => KeyInput::Left,
            BareKey::Right => KeyInput::Right,
            BareKey::Up => KeyInput::Up,
            BareKey::Down => KeyInput::Down,
            BareKey::PageUp => KeyInput::PageUp,
            BareKey::PageDown => KeyInput::PageDown,
            _ => return None,
        };

        keys::key_event(&self.app, input)
    }

    /// Maps mouse events to application events.
    ///
    /// Zellij reports 0-based positions; layout works in 1-based cells.
    fn map_mouse_event(&self, mouse: Mouse) -> Option<Event> {
        match mouse {
            Mouse::LeftClick(line, col) => {
                let row = usize::try_from(line).ok()? + 1;
                let event = layout::hit_test(&self.app, row, col + 1);
                tracing::debug!(row, col = col + 1, event = ?event, "click");
                event
            }
            Mouse::ScrollUp(_) => Some(if self.app.detail.is_some() {
                Event::DetailScroll(-keys::SCROLL_STEP)
            } else {
                Event::CardMove(Direction::Up)
            }),
            Mouse::ScrollDown(_) => Some(if self.app.detail.is_some() {
                Event::DetailScroll(keys::SCROLL_STEP)
            } else {
                Event::CardMove(Direction::Down)
            }),
            _ => None,
        }
    }

    /// Handles permission request results.
    ///
    /// A grant becomes the page-ready event; a denial is shown as a load
    /// failure since the feed can never be fetched.
    fn map_permission_result(&mut self, permissions: PermissionStatus) -> Option<Event> {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - loading articles");
                Some(Event::PageReady)
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - articles cannot be fetched");
                self.app.load_state = LoadState::Failed("Web access permission denied".to_string());
                None
            }
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// Translates library actions to Zellij API calls.
    ///
    /// # Actions
    ///
    /// - `CloseFocus`: Hide the plugin pane
    /// - `FetchArticles`: Issue the GET request, echoing the context back
    /// - `ScheduleStatusDismiss`: Arm a one-shot timer
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("hiding plugin");
                hide_self();
            }
            Action::FetchArticles { url, context } => {
                tracing::debug!(url = %url, "issuing web request");
                web_request(url, HttpVerb::Get, BTreeMap::new(), Vec::new(), context.clone());
            }
            Action::ScheduleStatusDismiss { seconds } => {
                set_timeout(*seconds);
            }
        }
    }
}
