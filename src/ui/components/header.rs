//! Header component renderer.
//!
//! This module renders the title bar: the site name centered (and clickable,
//! see [`hit_test`](crate::ui::layout::hit_test)) with the article counts
//! right-aligned on the same row.

use crate::ui::helpers::position_cursor;
use crate::ui::layout::centered_span;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header title bar at the specified row.
///
/// Displays the title centered horizontally with bold styling and theme colors.
/// Pads the line to fill the entire terminal width. The counts are dropped
/// when they would overlap the title.
///
/// # Returns
///
/// The next available row position (row + 1)
///
/// # Layout
///
/// ```text
/// [left padding] TITLE [fill] counts
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = header.title.chars().count();
    let (start, end) = centered_span(title_len, cols);
    let padding = start - 1;

    let counts_len = header.counts.chars().count();
    let show_counts = counts_len > 0 && end - 1 + counts_len < cols;

    position_cursor(row, 1);
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", " ".repeat(padding));

    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}", header.title);
    print!("{}", Theme::reset());
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    let used = padding + title_len;
    if show_counts {
        print!("{}", " ".repeat(cols.saturating_sub(used + counts_len)));
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{}", header.counts);
    } else {
        print!("{}", " ".repeat(cols.saturating_sub(used)));
    }

    print!("{}", Theme::reset());
    row + 1
}
