//! Category selector component renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::layout::{MARGIN, SELECTOR_PREFIX};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SelectorInfo;

/// Renders `  Category: < label >  n/m` at `row`.
///
/// `selector.label` arrives already cut to fit by
/// [`selector_label`](crate::ui::layout::selector_label).
///
/// The arrow positions match [`selector_arrow_columns`](crate::ui::layout::selector_arrow_columns),
/// which is what makes them clickable.
pub fn render_selector(row: usize, selector: &SelectorInfo, theme: &Theme, cols: usize) -> usize {
    let accent = if selector.focused {
        &theme.colors.focus_fg
    } else {
        &theme.colors.text_dim
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(MARGIN));
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{SELECTOR_PREFIX}");

    print!("{}", Theme::fg(accent));
    print!("< ");
    if selector.focused {
        print!("{}", Theme::bold());
    }
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{}", selector.label);
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(accent));
    print!(" >");

    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("  {}", selector.position);

    let used = MARGIN + SELECTOR_PREFIX.len() + 4 + selector.label.chars().count() + 2 + selector.position.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());

    row + 1
}
