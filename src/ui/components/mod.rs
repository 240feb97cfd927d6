//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements, following a component-based architecture. Each component is
//! responsible for rendering a specific part of the interface.
//!
//! # Components
//!
//! - [`header`]: Site name title and article counts
//! - [`search`]: Search input box (border, field text)
//! - [`selector`]: Category selector with clickable arrows
//! - [`cards`]: Article card grid
//! - [`empty`]: Loading, load failure and no-match messages
//! - [`status`]: Transient status banner
//! - [`footer`]: Help text and keybinding hints
//! - [`detail`]: Article detail overlay
//!
//! # Layout
//!
//! [`render_page`] draws every row of the frame; positions come from
//! [`crate::ui::layout`].

mod cards;
mod detail;
mod empty;
mod footer;
mod header;
mod search;
mod selector;
mod status;

pub use detail::render_detail;
pub use empty::render_empty_state;

use crate::ui::helpers::position_cursor;
use crate::ui::layout::{Viewport, HEADER_ROW, SEARCH_TOP, SELECTOR_ROW};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BodyView, UIViewModel};

use cards::render_cards;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use selector::render_selector;
use status::render_status;

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/controls, controls/grid, grid/footer).
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the page underneath the overlay.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines]
/// [Category Selector]
/// [Border]
/// [Card Grid or Empty State]
/// [Status Banner]
/// [Border]
/// [Footer]
/// ```
pub fn render_page(vm: &UIViewModel, theme: &Theme, viewport: Viewport) {
    let cols = viewport.cols;

    let mut current_row = render_header(HEADER_ROW, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    debug_assert_eq!(current_row, SEARCH_TOP);
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);
    debug_assert_eq!(current_row, SELECTOR_ROW);
    current_row = render_selector(current_row, &vm.selector, theme, cols);
    render_border(current_row, &theme.colors.border, cols);

    match &vm.body {
        BodyView::Cards(grid) => render_cards(grid, theme),
        BodyView::Empty(empty) => render_empty_state(empty, theme, cols),
    }

    if let Some(status) = &vm.status {
        render_status(viewport.status_row(), status, theme, cols);
    }

    let footer_start = viewport.rows;
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
