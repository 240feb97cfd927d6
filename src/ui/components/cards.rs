//! Card grid component renderer.
//!
//! Each card is a framed box of [`CARD_HEIGHT`] rows placed at the origin the
//! grid layout computes for it:
//!
//! ```text
//! ┌──────────────────────────────────┐
//! │ Title with matches highlighted   │
//! │ Summary text, wrapped over two   │
//! │ lines...                         │
//! │ Author: Ann | 2024-05-01         │
//! │ https://cdn.example/thumb.png    │
//! └──────────────────────────────────┘
//! ```

use crate::ui::helpers::{self, position_cursor, print_padded};
use crate::ui::layout::CARD_HEIGHT;
use crate::ui::present::{plain_text, truncate, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CardGrid, DisplayCard};

/// Lines of summary text inside a card.
const SUMMARY_LINES: usize = 2;

/// Renders every visible card of `grid`.
pub fn render_cards(grid: &CardGrid, theme: &Theme) {
    for card in &grid.cards {
        if let Some((row, col)) = grid.layout.card_origin(card.index) {
            render_card(row, col, grid.layout.card_width, card, theme);
        }
    }
}

fn render_card(row: usize, col: usize, width: usize, card: &DisplayCard, theme: &Theme) {
    let inner = width.saturating_sub(4);
    let frame = if card.is_selected {
        &theme.colors.focus_fg
    } else {
        &theme.colors.card_border
    };

    position_cursor(row, col);
    print!("{}", Theme::fg(frame));
    print!("┌{}┐", "─".repeat(width.saturating_sub(2)));
    print!("{}", Theme::reset());

    // Title
    open_line(row + 1, col, frame);
    let title = truncate(&plain_text(&card.item.title), inner);
    let title_fg = if card.is_selected {
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        &theme.colors.selection_fg
    } else {
        &theme.colors.header_fg
    };
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(title_fg));
    helpers::render_highlighted_text(
        &title,
        &card.highlight_ranges,
        theme,
        card.is_selected,
        title_fg,
    );
    print!("{}", " ".repeat(inner.saturating_sub(title.chars().count())));
    print!("{}", Theme::reset());
    close_line(frame);

    let summary = plain_text(&card.item.summary).replace('\n', " ");
    let mut summary_lines = wrap_text(&summary, inner.max(1));
    if summary_lines.len() > SUMMARY_LINES {
        summary_lines.truncate(SUMMARY_LINES);
        if let Some(last) = summary_lines.last_mut() {
            *last = truncate(&format!("{last}…"), inner);
        }
    }
    for offset in 0..SUMMARY_LINES {
        open_line(row + 2 + offset, col, frame);
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print_padded(summary_lines.get(offset).map_or("", String::as_str), inner);
        close_line(frame);
    }

    open_line(row + 2 + SUMMARY_LINES, col, frame);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_padded(&plain_text(&card.item.byline), inner);
    close_line(frame);

    open_line(row + 3 + SUMMARY_LINES, col, frame);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.link_fg));
    print_padded(&card.item.thumbnail, inner);
    close_line(frame);

    position_cursor(row + CARD_HEIGHT - 1, col);
    print!("{}", Theme::fg(frame));
    print!("└{}┘", "─".repeat(width.saturating_sub(2)));
    print!("{}", Theme::reset());
}

fn open_line(row: usize, col: usize, frame: &str) {
    position_cursor(row, col);
    print!("{}", Theme::fg(frame));
    print!("│ ");
    print!("{}", Theme::reset());
}

fn close_line(frame: &str) {
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(frame));
    print!(" │");
    print!("{}", Theme::reset());
}
