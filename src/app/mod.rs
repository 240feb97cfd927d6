//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! plugin runtime (main.rs) and the domain/UI layers. It implements the
//! event-driven architecture that powers the interactive browser.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Dispatch Table → State Mutations → Actions → Side Effects
//!                            ↑                                  ↓
//!                            └────────── Web Responses ─────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`category`]: Category selector options and cursor
//! - [`dispatch`]: `(control, trigger)` route table
//! - [`filter`]: Search and category filtering
//! - [`handler`]: Event vocabulary and route handlers
//! - [`keys`]: Key bindings per focus
//! - [`loader`]: Feed request construction and response decoding
//! - [`modes`]: Focus and overlay state types
//! - [`state`]: Central application state container and view model computation
//! - [`status`]: Auto-dismissing status messages
//! - [`store`]: Loaded articles and the filtered view

pub mod actions;
pub mod category;
pub mod dispatch;
pub mod filter;
pub mod handler;
pub mod keys;
pub mod loader;
pub mod modes;
pub mod state;
pub mod status;
pub mod store;

pub use actions::Action;
pub use dispatch::{Control, DispatchTable, Trigger};
pub use filter::{filter, FilterQuery};
pub use handler::{handle_event, Event, Outcome};
pub use keys::{key_event, KeyInput};
pub use modes::{DetailOverlay, Direction, Focus};
pub use state::{AppState, LoadState};
pub use status::{Severity, StatusNotifier};
pub use store::{ArticleRef, ArticleStore};
