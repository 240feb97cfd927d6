//! Event handling and state transition logic.
//!
//! This module defines the [`Event`] vocabulary and the handlers bound to each
//! route in the [`DispatchTable`](crate::app::dispatch::DispatchTable). Handlers
//! mutate [`AppState`] and return an [`Outcome`]: whether a re-render is due,
//! plus the side effects the runtime must execute.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime (keys, clicks, timers, responses)
//! 2. [`handle_event`] looks the event's route up in the dispatch table
//! 3. The bound handler mutates state via `AppState` methods
//! 4. Actions are collected and returned for execution

use crate::app::dispatch::{self, Control, Route, Trigger};
use crate::app::loader::{self, LoadRequest, RequestContext, TraceContext};
use crate::app::modes::{Direction, Focus};
use crate::app::state::LoadState;
use crate::app::status::Severity;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use tracing_opentelemetry::OpenTelemetrySpanExt;
use std::collections::BTreeMap;

/// Whether to re-render, plus the side effects to execute.
pub type Outcome = (bool, Vec<Action>);

/// Events triggered by user input or host callbacks.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The plugin is ready to load (permissions granted).
    PageReady,

    /// The feed request completed.
    ArticlesFetched {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: Vec<u8>,
        /// Context map echoed back from the request.
        context: BTreeMap<String, String>,
    },

    /// Moves keyboard focus to the search field.
    FocusSearch,
    /// Moves keyboard focus to the category selector.
    FocusSelector,
    /// Moves keyboard focus back to the card grid.
    FocusGrid,

    /// Appends a character to the search field.
    SearchInput(char),
    /// Removes the last character of the search field.
    SearchBackspace,
    /// Applies the search field and selector (Enter in the field).
    SearchConfirm,

    /// Moves the category selector by the given number of options.
    SelectorChange(i32),

    /// Resets both filters (header title click).
    SiteNameClick,

    /// Moves the card selection.
    CardMove(Direction),
    /// Opens the selected card.
    CardActivate,
    /// Opens the card at the given filtered index.
    CardClick(usize),

    /// The overlay's close button was clicked (or Esc pressed).
    DetailClose,
    /// A click landed outside the overlay box.
    OverlayBackgroundClick,
    /// A click landed inside the overlay box.
    OverlayContentClick,
    /// Scrolls the overlay content by the given number of lines.
    DetailScroll(i32),

    /// A status dismiss timer fired.
    StatusTimerElapsed,

    /// Hides the plugin.
    Quit,
}

impl Event {
    /// The `(control, trigger)` route this event dispatches on.
    #[must_use]
    pub const fn route(&self) -> Route {
        match self {
            Self::PageReady => (Control::Page, Trigger::Ready),
            Self::ArticlesFetched { .. } => (Control::Page, Trigger::Loaded),
            Self::Quit => (Control::Page, Trigger::Close),
            Self::FocusSearch => (Control::SearchField, Trigger::Focus),
            Self::FocusSelector => (Control::CategorySelector, Trigger::Focus),
            Self::FocusGrid => (Control::CardGrid, Trigger::Focus),
            Self::SearchInput(_) | Self::SearchBackspace => (Control::SearchField, Trigger::Input),
            Self::SearchConfirm => (Control::SearchField, Trigger::Confirm),
            Self::SelectorChange(_) => (Control::CategorySelector, Trigger::Change),
            Self::SiteNameClick => (Control::SiteName, Trigger::Click),
            Self::CardMove(_) => (Control::CardGrid, Trigger::Navigate),
            Self::CardActivate | Self::CardClick(_) => (Control::CardGrid, Trigger::Click),
            Self::DetailClose => (Control::DetailClose, Trigger::Click),
            Self::OverlayBackgroundClick => (Control::DetailBackground, Trigger::Click),
            Self::OverlayContentClick => (Control::DetailContent, Trigger::Click),
            Self::DetailScroll(_) => (Control::DetailContent, Trigger::Scroll),
            Self::StatusTimerElapsed => (Control::StatusBanner, Trigger::Elapsed),
        }
    }
}

/// Processes an event, mutates application state, and returns the outcome.
///
/// Routes through the standard dispatch table.
///
/// # Errors
///
/// Returns errors from the bound handler.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event's route.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<Outcome> {
    let (control, trigger) = event.route();
    let _span = tracing::debug_span!("handle_event", control = ?control, trigger = ?trigger).entered();

    dispatch::standard_table().dispatch(state, event)
}

pub(crate) fn on_page_ready(state: &mut AppState, _event: &Event) -> Result<Outcome> {
    if state.load_requested {
        tracing::debug!("articles already requested, ignoring ready event");
        return Ok((false, vec![]));
    }

    let request = LoadRequest::new(&state.source_url, chrono::Utc::now().timestamp_millis());
    tracing::info!(
        request_id = request.context.request_id,
        url = %request.url,
        "requesting articles"
    );

    state.load_requested = true;
    state.load_state = LoadState::Loading;

    Ok((
        true,
        vec![Action::FetchArticles {
            url: request.url,
            context: request.context.to_map(),
        }],
    ))
}

pub(crate) fn on_articles_fetched(state: &mut AppState, event: &Event) -> Result<Outcome> {
    let Event::ArticlesFetched { status, body, context } = event else {
        return Ok((false, vec![]));
    };

    let request = RequestContext::from_map(context);
    let request_id = request.as_ref().map(|r| r.request_id);

    let span = tracing::info_span!(
        "articles_fetched",
        request_id = ?request_id,
        status = *status,
        body_bytes = body.len()
    );
    if let Some(origin) = request
        .as_ref()
        .and_then(|r| r.trace_context.as_ref())
        .and_then(TraceContext::span_context)
    {
        span.add_link(origin);
    }
    let _span = span.entered();

    match loader::parse_response(*status, body) {
        Ok(articles) => {
            let count = articles.len();
            state.install_articles(articles);
            tracing::info!(article_count = count, "articles loaded");

            let notice = state
                .status
                .notify(format!("Loaded {count} articles"), Severity::Success);
            Ok((true, vec![notice]))
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                error_debug = ?e,
                load_failure = e.is_load_failure(),
                "failed to load articles"
            );
            state.load_state = LoadState::Failed(e.to_string());
            Ok((true, vec![]))
        }
    }
}

pub(crate) fn on_quit(_state: &mut AppState, _event: &Event) -> Result<Outcome> {
    Ok((false, vec![Action::CloseFocus]))
}

pub(crate) fn on_focus(state: &mut AppState, event: &Event) -> Result<Outcome> {
    let focus = match event {
        Event::FocusSearch => Focus::SearchField,
        Event::FocusSelector => Focus::CategorySelector,
        _ => Focus::Grid,
    };

    if state.focus == focus {
        return Ok((false, vec![]));
    }

    tracing::debug!(from = ?state.focus, to = ?focus, "focus changed");
    state.focus = focus;
    Ok((true, vec![]))
}

pub(crate) fn on_search_input(state: &mut AppState, event: &Event) -> Result<Outcome> {
    match event {
        Event::SearchInput(c) => {
            state.search_text.push(*c);
            tracing::trace!(query = %state.search_text, char = %c, "search text updated");
            Ok((true, vec![]))
        }
        Event::SearchBackspace => Ok((state.search_text.pop().is_some(), vec![])),
        _ => Ok((false, vec![])),
    }
}

pub(crate) fn on_search_confirm(state: &mut AppState, _event: &Event) -> Result<Outcome> {
    let actions = state.apply_filter();
    state.focus = Focus::Grid;
    Ok((true, actions))
}

pub(crate) fn on_selector_change(state: &mut AppState, event: &Event) -> Result<Outcome> {
    let Event::SelectorChange(step) = event else {
        return Ok((false, vec![]));
    };

    state.focus = Focus::CategorySelector;
    if !state.selector.step(*step) {
        return Ok((true, vec![]));
    }

    tracing::debug!(category = %state.selector.value(), "category changed");
    Ok((true, state.apply_filter()))
}

pub(crate) fn on_site_name_click(state: &mut AppState, _event: &Event) -> Result<Outcome> {
    tracing::debug!("resetting filters");
    state.reset_filters();
    Ok((true, vec![]))
}

pub(crate) fn on_card_navigate(state: &mut AppState, event: &Event) -> Result<Outcome> {
    let Event::CardMove(direction) = event else {
        return Ok((false, vec![]));
    };

    let moved = state.move_selection(*direction);
    if state.focus != Focus::Grid {
        state.focus = Focus::Grid;
        return Ok((true, vec![]));
    }
    Ok((moved, vec![]))
}

pub(crate) fn on_card_click(state: &mut AppState, event: &Event) -> Result<Outcome> {
    let index = match event {
        Event::CardClick(index) => *index,
        _ => state.selected_card,
    };

    if !state.open_detail(index) {
        tracing::debug!(index, "no article at index");
        return Ok((false, vec![]));
    }

    state.focus = Focus::Grid;
    tracing::debug!(index, title = ?state.detail.as_ref().and_then(|d| d.article.title.as_deref()), "detail opened");
    Ok((true, vec![]))
}

pub(crate) fn on_detail_dismiss(state: &mut AppState, _event: &Event) -> Result<Outcome> {
    Ok((state.close_detail(), vec![]))
}

pub(crate) fn on_detail_content_click(_state: &mut AppState, _event: &Event) -> Result<Outcome> {
    Ok((false, vec![]))
}

pub(crate) fn on_detail_scroll(state: &mut AppState, event: &Event) -> Result<Outcome> {
    let Event::DetailScroll(delta) = event else {
        return Ok((false, vec![]));
    };
    Ok((state.scroll_detail(*delta), vec![]))
}

pub(crate) fn on_status_elapsed(state: &mut AppState, _event: &Event) -> Result<Outcome> {
    Ok((state.status.on_timer_elapsed(), vec![]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::status::DISMISS_SECONDS;
    use crate::ui::layout::Viewport;
    use crate::ui::Theme;

    const FEED: &str = r#"[
        {"title": "Rust 2024", "content": "Editions explained", "tags": ["Tech", "Rust"]},
        {"title": "Derby day", "summary": "A late winner", "tags": ["sports"]},
        {"title": "Bikes", "content": "Rusty frames", "tags": "classifieds"}
    ]"#;

    fn state() -> AppState {
        let mut state = AppState::new("http://localhost:8000/date.json", "Gazette", &[], Theme::default());
        state.viewport = Viewport::new(40, 120);
        state
    }

    fn fetched(status: u16, body: &str) -> Event {
        Event::ArticlesFetched {
            status,
            body: body.as_bytes().to_vec(),
            context: BTreeMap::new(),
        }
    }

    fn loaded() -> AppState {
        let mut state = state();
        handle_event(&mut state, &Event::PageReady).unwrap();
        handle_event(&mut state, &fetched(200, FEED)).unwrap();
        state
    }

    #[test]
    fn page_ready_requests_once() {
        let mut state = state();

        let (render, actions) = handle_event(&mut state, &Event::PageReady).unwrap();
        assert!(render);
        assert_eq!(state.load_state, LoadState::Loading);
        let [Action::FetchArticles { url, context }] = actions.as_slice() else {
            panic!("expected one fetch, got {actions:?}");
        };
        assert!(url.starts_with("http://localhost:8000/date.json?t="));
        assert!(RequestContext::from_map(context).is_some());

        let (_, again) = handle_event(&mut state, &Event::PageReady).unwrap();
        assert!(again.is_empty());
    }

    #[test]
    fn successful_load_replaces_store_and_notifies() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &fetched(200, FEED)).unwrap();

        assert!(render);
        assert_eq!(actions, vec![Action::ScheduleStatusDismiss { seconds: DISMISS_SECONDS }]);
        assert_eq!(state.store.all().len(), 3);
        assert_eq!(state.store.filtered().len(), 3);
        assert_eq!(state.load_state, LoadState::Loaded);
        assert_eq!(
            state.status.current().map(|m| (m.text.as_str(), m.severity)),
            Some(("Loaded 3 articles", Severity::Success))
        );
    }

    #[test]
    fn failed_load_leaves_store_untouched() {
        for (status, body, expected) in [
            (404, "[]", "HTTP 404: Not Found"),
            (200, "{oops", ""),
            (200, r#"{"title":"x"}"#, "JSON data is not an array"),
        ] {
            let mut state = state();
            let (render, actions) = handle_event(&mut state, &fetched(status, body)).unwrap();

            assert!(render);
            assert!(actions.is_empty());
            assert!(state.store.is_empty());
            assert!(!state.status.is_visible());
            let LoadState::Failed(reason) = &state.load_state else {
                panic!("expected failure for {body}");
            };
            assert!(reason.starts_with(expected));
        }
    }

    #[test]
    fn typing_does_not_filter_until_confirmed() {
        let mut state = loaded();
        handle_event(&mut state, &Event::FocusSearch).unwrap();
        for c in "rust".chars() {
            handle_event(&mut state, &Event::SearchInput(c)).unwrap();
        }
        assert_eq!(state.store.filtered().len(), 3);

        let (_, actions) = handle_event(&mut state, &Event::SearchConfirm).unwrap();
        assert_eq!(state.store.filtered().len(), 2);
        assert_eq!(actions.len(), 1);
        assert_eq!(state.focus, Focus::Grid);
    }

    #[test]
    fn backspace_edits_field() {
        let mut state = loaded();
        handle_event(&mut state, &Event::SearchInput('a')).unwrap();

        let (render, _) = handle_event(&mut state, &Event::SearchBackspace).unwrap();
        assert!(render);
        let (render, _) = handle_event(&mut state, &Event::SearchBackspace).unwrap();
        assert!(!render);
    }

    #[test]
    fn selector_change_filters_immediately() {
        let mut state = loaded();
        // Options: "", tech, rust, sports, classifieds
        let (_, actions) = handle_event(&mut state, &Event::SelectorChange(3)).unwrap();

        assert_eq!(state.selector.value(), "sports");
        assert_eq!(state.store.filtered().len(), 1);
        assert_eq!(actions.len(), 1);
        assert_eq!(
            state.status.current().map(|m| m.text.as_str()),
            Some("Found 1 articles")
        );
    }

    #[test]
    fn site_name_click_resets_without_status() {
        let mut state = loaded();
        handle_event(&mut state, &Event::StatusTimerElapsed).unwrap();
        state.search_text = "derby".into();
        handle_event(&mut state, &Event::SearchConfirm).unwrap();
        handle_event(&mut state, &Event::StatusTimerElapsed).unwrap();

        let (render, actions) = handle_event(&mut state, &Event::SiteNameClick).unwrap();

        assert!(render);
        assert!(actions.is_empty());
        assert!(!state.status.is_visible());
        assert_eq!(state.search_text, "");
        assert_eq!(state.selector.value(), "");
        assert_eq!(state.store.filtered().len(), 3);
    }

    #[test]
    fn card_click_opens_that_article() {
        let mut state = loaded();
        handle_event(&mut state, &Event::CardClick(1)).unwrap();

        let detail = state.detail.as_ref().unwrap();
        assert_eq!(detail.article.title.as_deref(), Some("Derby day"));
        assert_eq!(state.selected_card, 1);
    }

    #[test]
    fn activate_opens_selected_article() {
        let mut state = loaded();
        handle_event(&mut state, &Event::CardMove(Direction::Right)).unwrap();
        handle_event(&mut state, &Event::CardActivate).unwrap();

        assert_eq!(
            state.detail.as_ref().and_then(|d| d.article.title.as_deref()),
            Some("Derby day")
        );
    }

    #[test]
    fn overlay_dismissal_rules() {
        let mut state = loaded();
        handle_event(&mut state, &Event::CardClick(0)).unwrap();

        let (render, _) = handle_event(&mut state, &Event::OverlayContentClick).unwrap();
        assert!(!render);
        assert!(state.detail.is_some());

        handle_event(&mut state, &Event::OverlayBackgroundClick).unwrap();
        assert!(state.detail.is_none());

        handle_event(&mut state, &Event::CardClick(0)).unwrap();
        handle_event(&mut state, &Event::DetailClose).unwrap();
        assert!(state.detail.is_none());
    }

    #[test]
    fn status_hides_after_last_timer() {
        let mut state = loaded();
        state.search_text = "rust".into();
        handle_event(&mut state, &Event::SearchConfirm).unwrap();

        let (render, _) = handle_event(&mut state, &Event::StatusTimerElapsed).unwrap();
        assert!(!render);
        assert!(state.status.is_visible());

        let (render, _) = handle_event(&mut state, &Event::StatusTimerElapsed).unwrap();
        assert!(render);
        assert!(!state.status.is_visible());
    }

    #[test]
    fn quit_hides_plugin() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::Quit).unwrap();
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
