//! Keyboard bindings.
//!
//! The plugin shim converts host key events into [`KeyInput`] and asks
//! [`key_event`] which application [`Event`] the key means in the current
//! focus. Keys with no meaning in the current context map to `None`.

use crate::app::modes::{Direction, Focus};
use crate::app::{AppState, Event};

/// Lines scrolled per arrow key in the detail view.
pub const SCROLL_STEP: i32 = 1;

/// Lines scrolled per page key in the detail view.
pub const PAGE_STEP: i32 = 10;

/// Host-independent key press (modifier-free).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Enter,
    Esc,
    Tab,
    Backspace,
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
}

/// Maps a key press to the event it triggers in `state`'s current context.
#[must_use]
pub fn key_event(state: &AppState, key: KeyInput) -> Option<Event> {
    if state.detail.is_some() {
        return detail_key(key);
    }

    match state.focus {
        Focus::SearchField => search_key(key),
        Focus::CategorySelector => selector_key(key),
        Focus::Grid => grid_key(key),
    }
}

fn detail_key(key: KeyInput) -> Option<Event> {
    match key {
        KeyInput::Esc | KeyInput::Char('q') => Some(Event::DetailClose),
        KeyInput::Up | KeyInput::Char('k') => Some(Event::DetailScroll(-SCROLL_STEP)),
        KeyInput::Down | KeyInput::Char('j') => Some(Event::DetailScroll(SCROLL_STEP)),
        KeyInput::PageUp => Some(Event::DetailScroll(-PAGE_STEP)),
        KeyInput::PageDown | KeyInput::Char(' ') => Some(Event::DetailScroll(PAGE_STEP)),
        _ => None,
    }
}

fn search_key(key: KeyInput) -> Option<Event> {
    match key {
        KeyInput::Char(c) => Some(Event::SearchInput(c)),
        KeyInput::Backspace => Some(Event::SearchBackspace),
        KeyInput::Enter => Some(Event::SearchConfirm),
        KeyInput::Esc | KeyInput::Down => Some(Event::FocusGrid),
        KeyInput::Tab => Some(Event::FocusSelector),
        _ => None,
    }
}

fn selector_key(key: KeyInput) -> Option<Event> {
    match key {
        KeyInput::Left | KeyInput::Char('h') => Some(Event::SelectorChange(-1)),
        KeyInput::Right | KeyInput::Char('l') => Some(Event::SelectorChange(1)),
        KeyInput::Esc | KeyInput::Enter | KeyInput::Down => Some(Event::FocusGrid),
        KeyInput::Tab | KeyInput::Char('/') => Some(Event::FocusSearch),
        _ => None,
    }
}

fn grid_key(key: KeyInput) -> Option<Event> {
    match key {
        KeyInput::Left | KeyInput::Char('h') => Some(Event::CardMove(Direction::Left)),
        KeyInput::Right | KeyInput::Char('l') => Some(Event::CardMove(Direction::Right)),
        KeyInput::Up | KeyInput::Char('k') => Some(Event::CardMove(Direction::Up)),
        KeyInput::Down | KeyInput::Char('j') => Some(Event::CardMove(Direction::Down)),
        KeyInput::Enter => Some(Event::CardActivate),
        KeyInput::Char('/') => Some(Event::FocusSearch),
        KeyInput::Tab => Some(Event::FocusSelector),
        KeyInput::Char('H') => Some(Event::SiteNameClick),
        KeyInput::Esc | KeyInput::Char('q') => Some(Event::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::DetailOverlay;
    use crate::domain::Article;
    use crate::ui::Theme;
    use std::sync::Arc;

    fn state() -> AppState {
        AppState::new("http://host/date.json", "Gazette", &[], Theme::default())
    }

    #[test]
    fn grid_keys_navigate_and_open() {
        let state = state();
        assert_eq!(key_event(&state, KeyInput::Down), Some(Event::CardMove(Direction::Down)));
        assert_eq!(key_event(&state, KeyInput::Enter), Some(Event::CardActivate));
        assert_eq!(key_event(&state, KeyInput::Char('/')), Some(Event::FocusSearch));
        assert_eq!(key_event(&state, KeyInput::Char('H')), Some(Event::SiteNameClick));
        assert_eq!(key_event(&state, KeyInput::Char('q')), Some(Event::Quit));
        assert_eq!(key_event(&state, KeyInput::Char('x')), None);
    }

    #[test]
    fn search_field_captures_characters() {
        let mut state = state();
        state.focus = Focus::SearchField;

        assert_eq!(key_event(&state, KeyInput::Char('q')), Some(Event::SearchInput('q')));
        assert_eq!(key_event(&state, KeyInput::Char('/')), Some(Event::SearchInput('/')));
        assert_eq!(key_event(&state, KeyInput::Enter), Some(Event::SearchConfirm));
        assert_eq!(key_event(&state, KeyInput::Esc), Some(Event::FocusGrid));
    }

    #[test]
    fn selector_arrows_change_category() {
        let mut state = state();
        state.focus = Focus::CategorySelector;

        assert_eq!(key_event(&state, KeyInput::Left), Some(Event::SelectorChange(-1)));
        assert_eq!(key_event(&state, KeyInput::Right), Some(Event::SelectorChange(1)));
    }

    #[test]
    fn open_detail_captures_input() {
        let mut state = state();
        state.focus = Focus::SearchField;
        state.detail = Some(DetailOverlay::open(Arc::new(Article::default())));

        assert_eq!(key_event(&state, KeyInput::Esc), Some(Event::DetailClose));
        assert_eq!(key_event(&state, KeyInput::Char('q')), Some(Event::DetailClose));
        assert_eq!(key_event(&state, KeyInput::Down), Some(Event::DetailScroll(1)));
        assert_eq!(key_event(&state, KeyInput::Char('a')), None);
    }
}
