//! Screen geometry and mouse hit testing.
//!
//! Components draw at the positions computed here, and mouse clicks are
//! resolved against the same geometry, so the two can never disagree.
//! All rows and columns are 1-indexed, matching [`position_cursor`](crate::ui::helpers::position_cursor).
//!
//! # Screen Layout
//!
//! ```text
//! row 1          [blank]
//! row 2          header (site name title is clickable)
//! row 3          border
//! rows 4-6       search box
//! row 7          category selector   Category: < news >
//! row 8          border
//! rows 9..       card grid
//! rows - 2       status banner
//! rows - 1       border
//! rows           footer
//! ```

use crate::app::{AppState, Event};
use crate::ui::present::{inline_text, truncate};
use std::ops::Range;

pub const HEADER_ROW: usize = 2;
pub const SEARCH_TOP: usize = 4;
pub const SEARCH_HEIGHT: usize = 3;
pub const SELECTOR_ROW: usize = 7;
pub const GRID_TOP: usize = 9;

/// Horizontal margin shared by the search box, selector and grid.
pub const MARGIN: usize = 2;

pub const CARD_WIDTH: usize = 36;
pub const CARD_HEIGHT: usize = 7;
pub const CARD_GAP: usize = 2;
const MIN_CARD_WIDTH: usize = 12;

/// Rows below the grid: status banner, border, footer.
const BOTTOM_CHROME: usize = 3;

pub const SELECTOR_PREFIX: &str = "Category: ";

const OVERLAY_MAX_WIDTH: usize = 90;
const OVERLAY_MIN_WIDTH: usize = 20;
const OVERLAY_MIN_HEIGHT: usize = 8;
pub const CLOSE_BUTTON: &str = "[x]";

/// Last rendered pane size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub rows: usize,
    pub cols: usize,
}

impl Viewport {
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Row of the status banner.
    #[must_use]
    pub const fn status_row(&self) -> usize {
        self.rows.saturating_sub(2)
    }

    /// Number of rows available to the card grid.
    #[must_use]
    pub const fn grid_height(&self) -> usize {
        self.rows.saturating_sub(GRID_TOP - 1 + BOTTOM_CHROME)
    }
}

/// Column span `[start, end)` of a centered text of `len` characters.
#[must_use]
pub const fn centered_span(len: usize, cols: usize) -> (usize, usize) {
    let padding = cols.saturating_sub(len) / 2;
    (padding + 1, padding + 1 + len)
}

/// The selector label as drawn: single-line, cut so the whole
/// `  Category: < label >  n/m` row fits in `cols`.
#[must_use]
pub fn selector_label(label: &str, position: &str, cols: usize) -> String {
    let chrome = MARGIN + SELECTOR_PREFIX.len() + "<  >".len() + 2 + position.chars().count();
    truncate(&inline_text(label), cols.saturating_sub(chrome).max(1))
}

/// Columns of the `<` and `>` arrows around the drawn selector label.
#[must_use]
pub fn selector_arrow_columns(label: &str) -> (usize, usize) {
    let left = MARGIN + SELECTOR_PREFIX.len() + 1;
    let right = left + 2 + label.chars().count() + 1;
    (left, right)
}

/// Placement of cards in the grid for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: usize,
    pub card_width: usize,
    pub visible_rows: usize,
    pub first_row: usize,
}

impl GridLayout {
    /// Computes the grid for `item_count` cards with `selected` kept visible.
    ///
    /// The window is centered on the selected card's row where possible and
    /// pulled up at the end of the list so no trailing rows are wasted.
    #[must_use]
    pub fn compute(viewport: Viewport, item_count: usize, selected: usize) -> Self {
        let columns = grid_columns(viewport.cols);
        let available = viewport.cols.saturating_sub(MARGIN * 2);
        let card_width = if available < CARD_WIDTH {
            available.max(MIN_CARD_WIDTH)
        } else {
            CARD_WIDTH
        };

        let visible_rows = (viewport.grid_height() / CARD_HEIGHT).max(1);
        let total_rows = item_count.div_ceil(columns);
        let selected_row = selected / columns;

        let mut first_row = selected_row.saturating_sub(visible_rows / 2);
        if first_row + visible_rows > total_rows {
            first_row = total_rows.saturating_sub(visible_rows);
        }

        Self {
            columns,
            card_width,
            visible_rows,
            first_row,
        }
    }

    /// Indices of the cards drawn this frame.
    #[must_use]
    pub fn visible_range(&self, item_count: usize) -> Range<usize> {
        let start = (self.first_row * self.columns).min(item_count);
        let end = ((self.first_row + self.visible_rows) * self.columns).min(item_count);
        start..end
    }

    /// Top-left corner of card `index`, if it is visible.
    #[must_use]
    pub fn card_origin(&self, index: usize) -> Option<(usize, usize)> {
        let grid_row = index / self.columns;
        if grid_row < self.first_row || grid_row >= self.first_row + self.visible_rows {
            return None;
        }

        let row = GRID_TOP + (grid_row - self.first_row) * CARD_HEIGHT;
        let col = MARGIN + 1 + (index % self.columns) * (self.card_width + CARD_GAP);
        Some((row, col))
    }

    /// Card under the cell at `(row, col)`; gaps between cards hit nothing.
    #[must_use]
    pub fn card_at(&self, row: usize, col: usize, item_count: usize) -> Option<usize> {
        if row < GRID_TOP || col <= MARGIN {
            return None;
        }

        let visual_row = (row - GRID_TOP) / CARD_HEIGHT;
        if visual_row >= self.visible_rows {
            return None;
        }

        let stride = self.card_width + CARD_GAP;
        let offset = col - MARGIN - 1;
        if offset % stride >= self.card_width {
            return None;
        }

        let column = offset / stride;
        if column >= self.columns {
            return None;
        }

        let index = (self.first_row + visual_row) * self.columns + column;
        (index < item_count).then_some(index)
    }
}

/// Number of card columns that fit in `cols`.
#[must_use]
pub const fn grid_columns(cols: usize) -> usize {
    let available = cols.saturating_sub(MARGIN * 2);
    let columns = (available + CARD_GAP) / (CARD_WIDTH + CARD_GAP);
    if columns == 0 {
        1
    } else {
        columns
    }
}

/// The detail overlay box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayRect {
    pub top: usize,
    pub left: usize,
    pub width: usize,
    pub height: usize,
}

impl OverlayRect {
    /// Centers the overlay in `viewport`.
    #[must_use]
    pub fn for_viewport(viewport: Viewport) -> Self {
        let width = viewport
            .cols
            .saturating_sub(8)
            .min(OVERLAY_MAX_WIDTH)
            .max(viewport.cols.min(OVERLAY_MIN_WIDTH));
        let height = viewport
            .rows
            .saturating_sub(4)
            .max(viewport.rows.min(OVERLAY_MIN_HEIGHT));

        Self {
            top: viewport.rows.saturating_sub(height) / 2 + 1,
            left: viewport.cols.saturating_sub(width) / 2 + 1,
            width,
            height,
        }
    }

    #[must_use]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.top
            && row < self.top + self.height
            && col >= self.left
            && col < self.left + self.width
    }

    /// First column of the close button in the top border.
    #[must_use]
    pub const fn close_button_col(&self) -> usize {
        (self.left + self.width).saturating_sub(2 + CLOSE_BUTTON.len())
    }

    #[must_use]
    pub const fn is_close_button(&self, row: usize, col: usize) -> bool {
        let start = self.close_button_col();
        row == self.top && col >= start && col < start + CLOSE_BUTTON.len()
    }

    /// First row of the scrollable body.
    #[must_use]
    pub const fn body_top(&self) -> usize {
        self.top + 1
    }

    /// First column of body text (inside the border and one space of padding).
    #[must_use]
    pub const fn body_left(&self) -> usize {
        self.left + 2
    }

    #[must_use]
    pub const fn body_width(&self) -> usize {
        self.width.saturating_sub(4)
    }

    #[must_use]
    pub const fn body_height(&self) -> usize {
        self.height.saturating_sub(2)
    }
}

/// Resolves a left click at `(row, col)` to the event it triggers.
///
/// While the detail overlay is open it captures every click: the close button
/// closes it, its content swallows the click, and anything outside it counts
/// as a background click.
#[must_use]
pub fn hit_test(state: &AppState, row: usize, col: usize) -> Option<Event> {
    let viewport = state.viewport;

    if state.detail.is_some() {
        let overlay = OverlayRect::for_viewport(viewport);
        let event = if overlay.is_close_button(row, col) {
            Event::DetailClose
        } else if overlay.contains(row, col) {
            Event::OverlayContentClick
        } else {
            Event::OverlayBackgroundClick
        };
        return Some(event);
    }

    match row {
        HEADER_ROW => {
            let (start, end) = centered_span(state.header_title().chars().count(), viewport.cols);
            (col >= start && col < end).then_some(Event::SiteNameClick)
        }
        r if (SEARCH_TOP..SEARCH_TOP + SEARCH_HEIGHT).contains(&r) => Some(Event::FocusSearch),
        SELECTOR_ROW => {
            let label = selector_label(state.selector.label(), &state.selector_position(), viewport.cols);
            let (left, right) = selector_arrow_columns(&label);
            if col == left {
                Some(Event::SelectorChange(-1))
            } else if col == right {
                Some(Event::SelectorChange(1))
            } else {
                Some(Event::FocusSelector)
            }
        }
        r if r >= GRID_TOP && r < GRID_TOP + viewport.grid_height() => {
            let count = state.store.filtered().len();
            GridLayout::compute(viewport, count, state.selected_card)
                .card_at(row, col, count)
                .map(Event::CardClick)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_fit_terminal_width() {
        assert_eq!(grid_columns(20), 1);
        assert_eq!(grid_columns(40), 1);
        assert_eq!(grid_columns(78), 2);
        assert_eq!(grid_columns(120), 3);
    }

    #[test]
    fn grid_height_excludes_chrome() {
        assert_eq!(Viewport::new(40, 80).grid_height(), 29);
        assert_eq!(Viewport::new(5, 80).grid_height(), 0);
    }

    #[test]
    fn window_follows_selection() {
        let viewport = Viewport::new(40, 80);
        let grid = GridLayout::compute(viewport, 20, 0);
        assert_eq!(grid.columns, 2);
        assert_eq!(grid.visible_rows, 4);
        assert_eq!(grid.first_row, 0);
        assert_eq!(grid.visible_range(20), 0..8);

        let grid = GridLayout::compute(viewport, 20, 19);
        assert_eq!(grid.first_row, 6);
        assert_eq!(grid.visible_range(20), 12..20);
    }

    #[test]
    fn card_origin_and_hit_agree() {
        let grid = GridLayout::compute(Viewport::new(40, 80), 5, 0);

        for index in 0..5 {
            let (row, col) = grid.card_origin(index).unwrap();
            assert_eq!(grid.card_at(row, col, 5), Some(index));
            assert_eq!(grid.card_at(row + CARD_HEIGHT - 1, col + grid.card_width - 1, 5), Some(index));
        }
    }

    #[test]
    fn gaps_and_empty_slots_hit_nothing() {
        let grid = GridLayout::compute(Viewport::new(40, 80), 3, 0);
        let gap_col = MARGIN + 1 + CARD_WIDTH;

        assert_eq!(grid.card_at(GRID_TOP, gap_col, 3), None);
        assert_eq!(grid.card_at(GRID_TOP, 1, 3), None);
        // Fourth slot (second row, second column) is empty.
        let (row, col) = (GRID_TOP + CARD_HEIGHT, MARGIN + 1 + CARD_WIDTH + CARD_GAP);
        assert_eq!(grid.card_at(row, col, 3), None);
    }

    #[test]
    fn overlay_is_centered_with_close_button_in_border() {
        let overlay = OverlayRect::for_viewport(Viewport::new(30, 100));

        assert_eq!(overlay.width, 90);
        assert_eq!(overlay.height, 26);
        assert_eq!(overlay.left, 6);
        assert_eq!(overlay.top, 3);

        let close = overlay.close_button_col();
        assert!(overlay.is_close_button(overlay.top, close));
        assert!(overlay.is_close_button(overlay.top, close + 2));
        assert!(!overlay.is_close_button(overlay.top + 1, close));
        assert!(overlay.contains(overlay.top, close));
    }

    #[test]
    fn overlay_fits_tiny_viewports() {
        let overlay = OverlayRect::for_viewport(Viewport::new(6, 15));
        assert!(overlay.width <= 15);
        assert!(overlay.height <= 6);
    }

    #[test]
    fn selector_arrows_surround_label() {
        let (left, right) = selector_arrow_columns("news");
        // "  Category: < news >"
        assert_eq!(left, 13);
        assert_eq!(right, 20);
    }

    #[test]
    fn selector_label_is_cut_to_fit_row() {
        let label = selector_label(&"long".repeat(20), "2/3", 40);
        // 2 + 10 + 4 + 2 + 3 columns of chrome leave 19 for the label.
        assert_eq!(label.chars().count(), 19);
        assert!(label.ends_with('…'));

        let (_, right) = selector_arrow_columns(&label);
        assert!(right + 2 + 3 <= 40);

        assert_eq!(selector_label("news", "2/3", 40), "news");
        assert_eq!(selector_label("\u{1b}[31mred", "2/3", 40), "[31mred");
    }

    #[test]
    fn centered_span_matches_padding() {
        assert_eq!(centered_span(10, 30), (11, 21));
        assert_eq!(centered_span(40, 30), (1, 41));
    }
}
