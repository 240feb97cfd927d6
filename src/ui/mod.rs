//! User interface rendering layer with component-based architecture.
//!
//! This module orchestrates the terminal-based UI, transforming view models into
//! ANSI-styled output through composable rendering components. It provides theme
//! support, a responsive card grid, and search match highlighting.
//!
//! # Architecture
//!
//! The UI layer follows a declarative rendering model:
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, padding)
//! - [`layout`]: Screen geometry and mouse hit testing
//! - [`present`]: Article-to-display mapping (cards, detail view)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod layout;
pub mod present;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use layout::{hit_test, Viewport};
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    BodyView, CardGrid, DetailInfo, DisplayCard, EmptyState, FooterInfo, HeaderInfo,
    SearchBarInfo, SelectorInfo, StatusInfo, UIViewModel,
};
