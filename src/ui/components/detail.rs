//! Detail overlay component renderer.
//!
//! The overlay is drawn last, over the rest of the frame. Its interior is
//! blanked before the body lines are printed so nothing underneath shows
//! through.

use crate::ui::helpers::{position_cursor, print_padded};
use crate::ui::layout::CLOSE_BUTTON;
use crate::ui::present::LineRole;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailInfo;

/// Renders the detail overlay.
///
/// # Layout
///
/// ```text
/// ┌──────────────────────────────[x]─┐
/// │ Title                            │
/// │ Image: https://...               │
/// │                                  │
/// │ Content paragraphs...            │
/// └────────────────────────────── ▼ ─┘
/// ```
///
/// The `▲`/`▼` markers show that more content exists above or below.
pub fn render_detail(detail: &DetailInfo, theme: &Theme) {
    let rect = detail.rect;
    if rect.width < 2 || rect.height < 2 {
        return;
    }
    let border = &theme.colors.overlay_border;
    let span = rect.width - 2;

    // Top border with close button.
    let close_offset = rect.close_button_col().saturating_sub(rect.left + 1);
    let mut top = String::with_capacity(span);
    top.push_str(&"─".repeat(close_offset));
    top.push_str(CLOSE_BUTTON);
    top.push_str(&"─".repeat(span.saturating_sub(close_offset + CLOSE_BUTTON.len())));
    if detail.more_above {
        top = with_marker(&top, '▲');
    }
    position_cursor(rect.top, rect.left);
    print!("{}", Theme::fg(border));
    print!("┌{top}┐");
    print!("{}", Theme::reset());

    let body_width = rect.body_width();
    for offset in 0..rect.body_height() {
        position_cursor(rect.body_top() + offset, rect.left);
        print!("{}", Theme::fg(border));
        print!("│ ");
        print!("{}", Theme::reset());

        match detail.lines.get(offset) {
            Some(line) => {
                match line.role {
                    LineRole::Title => {
                        print!("{}", Theme::bold());
                        print!("{}", Theme::fg(&theme.colors.header_fg));
                    }
                    LineRole::Meta => print!("{}", Theme::fg(&theme.colors.text_dim)),
                    LineRole::Content | LineRole::Blank => {
                        print!("{}", Theme::fg(&theme.colors.text_normal));
                    }
                }
                print_padded(&line.text, body_width);
            }
            None => print!("{}", " ".repeat(body_width)),
        }

        print!("{}", Theme::reset());
        print!("{}", Theme::fg(border));
        print!(" │");
        print!("{}", Theme::reset());
    }

    let mut bottom = "─".repeat(span);
    if detail.more_below {
        bottom = with_marker(&bottom, '▼');
    }
    position_cursor(rect.top + rect.height - 1, rect.left);
    print!("{}", Theme::fg(border));
    print!("└{bottom}┘");
    print!("{}", Theme::reset());
}

/// Replaces the centre of a border run with ` marker `.
fn with_marker(run: &str, marker: char) -> String {
    let mut chars: Vec<char> = run.chars().collect();
    let middle = chars.len() / 2;
    if middle >= 1 && middle + 1 < chars.len() && chars[middle - 1..=middle + 1].iter().all(|c| *c == '─') {
        chars[middle - 1] = ' ';
        chars[middle] = marker;
        chars[middle + 1] = ' ';
    }
    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_goes_in_the_middle() {
        assert_eq!(with_marker("───────", '▼'), "── ▼ ──");
    }

    #[test]
    fn marker_never_overwrites_close_button() {
        assert_eq!(with_marker("─[x]─", '▲'), "─[x]─");
    }

    #[test]
    fn short_runs_are_left_alone() {
        assert_eq!(with_marker("──", '▲'), "──");
    }
}
