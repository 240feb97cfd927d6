//! Search bar component renderer.
//!
//! This module renders the search input box with a bordered frame and query
//! text display. The frame takes the focus color while typing goes into it.

use crate::ui::helpers::position_cursor;
use crate::ui::layout::{MARGIN, SEARCH_HEIGHT};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

const LABEL: &str = " Search: ";
const PLACEHOLDER: &str = "title, content or tag";
const CURSOR: char = '▏';

/// Renders the search input box at the specified row.
///
/// Displays a 3-line bordered box containing the search field text. The box
/// spans the width between the shared horizontal margins.
///
/// # Returns
///
/// The next available row position (row + 3, since search box uses 3 lines)
///
/// # Layout
///
/// ```text
/// [margin] ┌─────────────┐ [margin]
/// [margin] │ Search: ... │ [margin]
/// [margin] └─────────────┘ [margin]
/// ```
///
/// Text longer than the box keeps its tail visible, so the end being typed is
/// always on screen.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if search.focused {
        &theme.colors.focus_fg
    } else {
        &theme.colors.search_bar_border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(MARGIN));
    print!("{}", Theme::fg(border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let room = inner_width.saturating_sub(LABEL.len() + 1);
    let query_len = search.query.chars().count();
    let visible: String = search
        .query
        .chars()
        .skip(query_len.saturating_sub(room))
        .collect();

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(MARGIN));
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{LABEL}");

    let mut used = LABEL.len();
    if visible.is_empty() && !search.focused {
        let placeholder: String = PLACEHOLDER.chars().take(room).collect();
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{placeholder}");
        print!("{}", Theme::reset());
        used += placeholder.chars().count();
    } else {
        print!("{visible}");
        used += visible.chars().count();
        if search.focused {
            print!("{}", Theme::fg(&theme.colors.focus_fg));
            print!("{CURSOR}");
            used += 1;
        }
    }

    print!("{}", " ".repeat(inner_width.saturating_sub(used)));
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(MARGIN));
    print!("{}", Theme::fg(border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + SEARCH_HEIGHT
}
