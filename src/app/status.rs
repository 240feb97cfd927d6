//! Transient status banner with automatic dismissal.
//!
//! The host timer API carries no handle that could be cancelled, so the
//! notifier counts outstanding dismiss timers instead. Every [`StatusNotifier::notify`]
//! call schedules one more timer; the banner is hidden only when the last
//! outstanding timer fires. The net effect is that the most recent message is
//! shown for the full dismiss delay regardless of earlier calls.

use crate::app::Action;

/// Seconds a status message stays visible.
pub const DISMISS_SECONDS: f64 = 3.0;

/// Visual category of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

/// A message currently shown in the banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, Default)]
pub struct StatusNotifier {
    message: Option<StatusMessage>,
    pending_timers: usize,
}

impl StatusNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `text` immediately, replacing any visible message.
    ///
    /// Returns the timer action the runtime must schedule.
    pub fn notify(&mut self, text: impl Into<String>, severity: Severity) -> Action {
        let text = text.into();
        tracing::debug!(message = %text, severity = ?severity, "status shown");

        self.message = Some(StatusMessage { text, severity });
        self.pending_timers += 1;

        Action::ScheduleStatusDismiss {
            seconds: DISMISS_SECONDS,
        }
    }

    /// Records one elapsed dismiss timer.
    ///
    /// Returns `true` when the banner was hidden by this tick.
    pub fn on_timer_elapsed(&mut self) -> bool {
        if self.pending_timers == 0 {
            return false;
        }

        self.pending_timers -= 1;
        if self.pending_timers > 0 {
            return false;
        }

        self.message.take().is_some()
    }

    /// The visible message, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.message.is_some()
    }
}
