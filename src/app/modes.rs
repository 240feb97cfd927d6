//! Focus and overlay state types for the application.
//!
//! These types determine which keybindings are active and how typed characters
//! are interpreted.
//!
//! # State Machine
//!
//! Keyboard focus rests on one of three controls:
//! - **Grid**: arrow keys move the card selection, `Enter` opens the detail view
//! - **`SearchField`**: characters edit the search text, `Enter` applies it
//! - **`CategorySelector`**: `←`/`→` cycle categories and filter immediately
//!
//! Independently of focus, the detail overlay is either closed or open on one
//! article. While it is open it captures all input.

use crate::app::store::ArticleRef;

/// Which control receives keyboard input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    /// The card grid.
    #[default]
    Grid,

    /// The free-text search field.
    SearchField,

    /// The category selector.
    CategorySelector,
}

/// Direction of a card grid move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// The open detail view.
///
/// Holds a handle to the exact article whose card was activated, plus the
/// vertical scroll offset of its content.
#[derive(Debug, Clone)]
pub struct DetailOverlay {
    /// Article shown in the overlay.
    pub article: ArticleRef,

    /// First visible content line.
    pub scroll: usize,
}

impl DetailOverlay {
    /// Opens the overlay at the top of the content.
    #[must_use]
    pub const fn open(article: ArticleRef) -> Self {
        Self { article, scroll: 0 }
    }

    /// Scrolls by `delta` lines, clamped to `max_scroll`.
    pub fn scroll_by(&mut self, delta: i32, max_scroll: usize) {
        let magnitude = usize::try_from(delta.unsigned_abs()).unwrap_or(usize::MAX);
        self.scroll = if delta < 0 {
            self.scroll.saturating_sub(magnitude)
        } else {
            self.scroll.saturating_add(magnitude).min(max_scroll)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Article;
    use std::sync::Arc;

    #[test]
    fn opens_at_top() {
        let overlay = DetailOverlay::open(Arc::new(Article::default()));
        assert_eq!(overlay.scroll, 0);
    }

    #[test]
    fn scroll_is_clamped() {
        let mut overlay = DetailOverlay::open(Arc::new(Article::default()));

        overlay.scroll_by(-3, 10);
        assert_eq!(overlay.scroll, 0);

        overlay.scroll_by(4, 10);
        assert_eq!(overlay.scroll, 4);

        overlay.scroll_by(20, 10);
        assert_eq!(overlay.scroll, 10);
    }
}
