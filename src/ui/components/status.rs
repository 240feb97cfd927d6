//! Status banner component renderer.

use crate::app::Severity;
use crate::ui::helpers::{position_cursor, print_padded};
use crate::ui::layout::MARGIN;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatusInfo;

const fn icon(severity: Severity) -> char {
    match severity {
        Severity::Success => '✓',
        Severity::Info => 'i',
        Severity::Warning => '!',
        Severity::Error => '✗',
    }
}

/// Renders the status message at `row`, colored by severity.
pub fn render_status(row: usize, status: &StatusInfo, theme: &Theme, cols: usize) {
    position_cursor(row, 1);
    print!("{}", " ".repeat(MARGIN));
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(theme.colors.status(status.severity)));
    print_padded(
        &format!("{} {}", icon(status.severity), status.text),
        cols.saturating_sub(MARGIN),
    );
    print!("{}", Theme::reset());
}
