//! Empty state component renderer.
//!
//! This module renders the centered message block shown in place of the card
//! grid: while loading, after a failed load, and when no article matches.

use crate::ui::helpers::position_cursor;
use crate::ui::layout::GRID_TOP;
use crate::ui::present::truncate;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message.
///
/// # Layout
///
/// ```text
/// [blank line]
///            MESSAGE
///          line one...
///          line two...
///         https://link
/// ```
///
/// Every line is horizontally centered. The message uses the `empty_state_fg`
/// theme color, the lines use `text_dim`, and the link uses `link_fg`.
pub fn render_empty_state(empty: &EmptyState, theme: &Theme, cols: usize) {
    let mut row = GRID_TOP + 1;

    print_centered(row, &empty.message, &Theme::fg(&theme.colors.empty_state_fg), cols);
    row += 1;

    let dim = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    for line in &empty.lines {
        print_centered(row, line, &dim, cols);
        row += 1;
    }

    if let Some(link) = &empty.link {
        print_centered(row, link, &Theme::fg(&theme.colors.link_fg), cols);
    }
}

fn print_centered(row: usize, text: &str, style: &str, cols: usize) {
    let text = truncate(text, cols);
    let len = text.chars().count();
    let padding = (cols.saturating_sub(len)) / 2;

    position_cursor(row, 1);
    print!("{style}");
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
    print!("{}", Theme::reset());
}
