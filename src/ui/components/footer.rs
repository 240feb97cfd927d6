//! Key hint bar on the last row.

use crate::ui::helpers::position_cursor;
use crate::ui::layout::centered_span;
use crate::ui::present::truncate;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Draws the hints for the current focus, centered and dimmed, padded to the
/// full width. Returns the next free row.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let hints = truncate(&footer.keybindings, cols);
    let (start, end) = centered_span(hints.chars().count(), cols);

    position_cursor(row, 1);
    print!(
        "{}{}{hints}{}{}",
        Theme::fg(&theme.colors.text_dim),
        " ".repeat(start - 1),
        " ".repeat(cols.saturating_sub(end - 1)),
        Theme::reset()
    );
    row + 1
}
