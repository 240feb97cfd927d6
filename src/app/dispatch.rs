//! Explicit dispatch table from `(control, trigger)` routes to handlers.
//!
//! Every [`Event`] names the control it originates from and the trigger that
//! fired (see [`Event::route`]). The table is the single place where a route
//! is bound to its behavior, so adding a control means adding one row here
//! rather than another arm in a growing match.

use crate::app::handler::{self, Outcome};
use crate::app::{AppState, Event};
use crate::domain::error::Result;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Interface element an event originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Page,
    SearchField,
    CategorySelector,
    SiteName,
    CardGrid,
    DetailClose,
    DetailBackground,
    DetailContent,
    StatusBanner,
}

/// What happened to the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Ready,
    Loaded,
    Close,
    Focus,
    Input,
    Confirm,
    Change,
    Click,
    Navigate,
    Scroll,
    Elapsed,
}

/// A `(control, trigger)` pair.
pub type Route = (Control, Trigger);

/// A route handler.
pub type Handler = fn(&mut AppState, &Event) -> Result<Outcome>;

/// Route-to-handler bindings.
#[derive(Clone, Default)]
pub struct DispatchTable {
    routes: HashMap<Route, Handler>,
}

impl std::fmt::Debug for DispatchTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut routes: Vec<&Route> = self.routes.keys().collect();
        routes.sort_by_key(|(control, trigger)| (format!("{control:?}"), format!("{trigger:?}")));
        f.debug_struct("DispatchTable").field("routes", &routes).finish()
    }
}

impl DispatchTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `handler` to `route`, replacing any previous binding.
    pub fn bind(&mut self, route: Route, handler: Handler) -> &mut Self {
        self.routes.insert(route, handler);
        self
    }

    /// The handler bound to `route`.
    #[must_use]
    pub fn handler(&self, route: Route) -> Option<Handler> {
        self.routes.get(&route).copied()
    }

    /// Number of bound routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// The plugin's bindings.
    #[must_use]
    pub fn standard() -> Self {
        let mut table = Self::new();
        table
            .bind((Control::Page, Trigger::Ready), handler::on_page_ready)
            .bind((Control::Page, Trigger::Loaded), handler::on_articles_fetched)
            .bind((Control::Page, Trigger::Close), handler::on_quit)
            .bind((Control::SearchField, Trigger::Focus), handler::on_focus)
            .bind((Control::CategorySelector, Trigger::Focus), handler::on_focus)
            .bind((Control::CardGrid, Trigger::Focus), handler::on_focus)
            .bind((Control::SearchField, Trigger::Input), handler::on_search_input)
            .bind((Control::SearchField, Trigger::Confirm), handler::on_search_confirm)
            .bind((Control::CategorySelector, Trigger::Change), handler::on_selector_change)
            .bind((Control::SiteName, Trigger::Click), handler::on_site_name_click)
            .bind((Control::CardGrid, Trigger::Navigate), handler::on_card_navigate)
            .bind((Control::CardGrid, Trigger::Click), handler::on_card_click)
            .bind((Control::DetailClose, Trigger::Click), handler::on_detail_dismiss)
            .bind((Control::DetailBackground, Trigger::Click), handler::on_detail_dismiss)
            .bind((Control::DetailContent, Trigger::Click), handler::on_detail_content_click)
            .bind((Control::DetailContent, Trigger::Scroll), handler::on_detail_scroll)
            .bind((Control::StatusBanner, Trigger::Elapsed), handler::on_status_elapsed);
        table
    }

    /// Routes `event` to its handler.
    ///
    /// Events whose route has no binding are ignored.
    ///
    /// # Errors
    ///
    /// Propagates the handler's error.
    pub fn dispatch(&self, state: &mut AppState, event: &Event) -> Result<Outcome> {
        let route = event.route();
        match self.handler(route) {
            Some(handler) => handler(state, event),
            None => {
                tracing::debug!(control = ?route.0, trigger = ?route.1, "no handler bound");
                Ok((false, vec![]))
            }
        }
    }
}

/// The process-wide standard table, built on first use.
pub fn standard_table() -> &'static DispatchTable {
    static TABLE: OnceLock<DispatchTable> = OnceLock::new();
    TABLE.get_or_init(DispatchTable::standard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Theme;

    #[test]
    fn every_event_route_is_bound() {
        use crate::app::modes::Direction;

        let table = DispatchTable::standard();
        let events = [
            Event::PageReady,
            Event::ArticlesFetched {
                status: 200,
                body: vec![],
                context: Default::default(),
            },
            Event::FocusSearch,
            Event::FocusSelector,
            Event::FocusGrid,
            Event::SearchInput('a'),
            Event::SearchBackspace,
            Event::SearchConfirm,
            Event::SelectorChange(1),
            Event::SiteNameClick,
            Event::CardMove(Direction::Left),
            Event::CardActivate,
            Event::CardClick(0),
            Event::DetailClose,
            Event::OverlayBackgroundClick,
            Event::OverlayContentClick,
            Event::DetailScroll(1),
            Event::StatusTimerElapsed,
            Event::Quit,
        ];

        for event in &events {
            assert!(table.handler(event.route()).is_some(), "unbound: {event:?}");
        }
    }

    #[test]
    fn unbound_route_is_ignored() {
        let table = DispatchTable::new();
        let mut state = AppState::new("u", "Gazette", &[], Theme::default());

        let (render, actions) = table.dispatch(&mut state, &Event::Quit).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn rebinding_replaces_handler() {
        fn swallow(_: &mut AppState, _: &Event) -> Result<Outcome> {
            Ok((true, vec![]))
        }

        let mut table = DispatchTable::standard();
        let before = table.len();
        table.bind((Control::Page, Trigger::Close), swallow);

        let mut state = AppState::new("u", "Gazette", &[], Theme::default());
        let (render, actions) = table.dispatch(&mut state, &Event::Quit).unwrap();

        assert_eq!(table.len(), before);
        assert!(render);
        assert!(actions.is_empty());
    }
}
