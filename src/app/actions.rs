//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler after processing user input or host events.
//! Actions bridge pure state transformations and effectful operations like
//! issuing the feed request or arming the status banner timer.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event, allowing
//! multiple side effects to be queued atomically. The plugin runtime executes
//! these actions in sequence. Nothing in the library calls the host directly,
//! which keeps every handler testable without a running Zellij instance.

use std::collections::BTreeMap;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly requests to exit the plugin (e.g., pressing 'q'
    /// with no overlay open).
    CloseFocus,

    /// Issues the HTTP GET for the article feed.
    ///
    /// The response arrives later as a separate event carrying `context`
    /// unchanged.
    FetchArticles {
        /// Cache-busted feed URL.
        url: String,
        /// Opaque request metadata echoed back by the host.
        context: BTreeMap<String, String>,
    },

    /// Arms a one-shot timer that dismisses the status banner.
    ScheduleStatusDismiss {
        /// Delay before the timer fires.
        seconds: f64,
    },
}
