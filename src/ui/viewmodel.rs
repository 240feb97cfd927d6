//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models are optimized for rendering and
//! contain pre-computed display information like highlight ranges, selection
//! state, and the geometry each component draws at.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data.

use crate::app::status::Severity;
use crate::ui::layout::{GridLayout, OverlayRect};
use crate::ui::present::{CardItem, DetailLine};

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Header information (site name, counts).
    pub header: HeaderInfo,

    /// Search field state.
    pub search_bar: SearchBarInfo,

    /// Category selector state.
    pub selector: SelectorInfo,

    /// What the list area shows.
    pub body: BodyView,

    /// Detail overlay, drawn last over everything else.
    pub detail: Option<DetailInfo>,

    /// Visible status message.
    pub status: Option<StatusInfo>,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,
}

/// Content of the list area.
#[derive(Debug, Clone)]
pub enum BodyView {
    /// Cards laid out in a grid.
    Cards(CardGrid),

    /// A centered message block (no matches, load error, loading).
    Empty(EmptyState),
}

/// Visible cards and their placement.
#[derive(Debug, Clone)]
pub struct CardGrid {
    pub layout: GridLayout,
    pub cards: Vec<DisplayCard>,
}

/// Display information for a single card.
#[derive(Debug, Clone)]
pub struct DisplayCard {
    /// Index in the filtered list.
    pub index: usize,

    /// Presented article fields.
    pub item: CardItem,

    /// Whether this card has the keyboard selection.
    pub is_selected: bool,

    /// Character ranges of the title matching the applied search.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Centered, clickable title.
    pub title: String,

    /// Right-aligned article counts.
    pub counts: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "/: search | Tab: category | q: quit").
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No matching articles").
    pub message: String,

    /// Secondary explanatory lines.
    pub lines: Vec<String>,

    /// Optional link shown below the lines.
    pub link: Option<String>,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current field text.
    pub query: String,

    /// Whether typing goes into the field.
    pub focused: bool,
}

/// Category selector display information.
#[derive(Debug, Clone)]
pub struct SelectorInfo {
    /// Selected option label ("All" for no category).
    pub label: String,

    /// Whether arrow keys change the category.
    pub focused: bool,

    /// Position among the options, e.g. "2/5".
    pub position: String,
}

/// Detail overlay display information.
#[derive(Debug, Clone)]
pub struct DetailInfo {
    pub rect: OverlayRect,

    /// Body lines visible at the current scroll offset.
    pub lines: Vec<DetailLine>,

    /// Whether lines exist above or below the visible slice.
    pub more_above: bool,
    pub more_below: bool,
}

/// Status banner display information.
#[derive(Debug, Clone)]
pub struct StatusInfo {
    pub text: String,
    pub severity: Severity,
}
