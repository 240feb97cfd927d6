//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the plugin,
//! along with methods for filtering, selection management, and UI view model
//! generation. It serves as the single source of truth for all transient UI state.
//!
//! # State Components
//!
//! - **Store**: loaded articles and the filtered view ([`ArticleStore`])
//! - **Controls**: search field text and category selector
//! - **Applied Query**: the filter that produced the current view, used for
//!   match highlighting
//! - **Focus / Detail**: which control receives keys, and the open overlay
//! - **Status**: the transient banner
//! - **Load State**: whether the feed is pending, loaded, or failed
//!
//! # View Model Computation
//!
//! The `compute_viewmodel` method transforms state into a renderable UI
//! representation, handling grid windowing, title highlighting, overlay
//! scrolling, and the different empty states.

use super::category::CategorySelector;
use super::filter::{filter_articles, FilterQuery};
use super::modes::{DetailOverlay, Direction, Focus};
use super::status::{Severity, StatusNotifier};
use super::store::{ArticleRef, ArticleStore};
use crate::app::Action;
use crate::ui::helpers::substring_ranges;
use crate::ui::layout::{selector_label, GridLayout, OverlayRect, Viewport};
use crate::ui::present::{self, DetailLine, ListPresentation};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BodyView, CardGrid, DetailInfo, DisplayCard, EmptyState, FooterInfo, HeaderInfo,
    SearchBarInfo, SelectorInfo, StatusInfo, UIViewModel,
};

/// Progress of the one feed request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Waiting for the host to grant permissions.
    #[default]
    Idle,

    /// Request issued, response pending.
    Loading,

    /// Feed decoded into the store.
    Loaded,

    /// The request failed; holds the one-sentence reason.
    Failed(String),
}

/// Central application state container.
///
/// Mutated by the event handler in response to user input and host events.
/// View models are computed on-demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Loaded articles and the visible subset.
    pub store: ArticleStore,

    /// Current text of the search field (not yet applied until confirmed).
    pub search_text: String,

    /// Category selector options and value.
    pub selector: CategorySelector,

    /// Filter that produced the current visible subset.
    pub applied_query: FilterQuery,

    /// Control receiving keyboard input.
    pub focus: Focus,

    /// Open detail overlay, if any.
    pub detail: Option<DetailOverlay>,

    /// Transient status banner.
    pub status: StatusNotifier,

    /// Index of the selected card within the filtered list.
    pub selected_card: usize,

    /// Last rendered pane size, used for grid navigation and hit testing.
    pub viewport: Viewport,

    pub load_state: LoadState,

    /// Set once the feed request has been issued.
    pub load_requested: bool,

    /// Feed URL without cache busting.
    pub source_url: String,

    /// Title shown in the header.
    pub site_name: String,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates an empty state for the feed at `source_url`.
    ///
    /// `categories` fixes the selector's options; when empty the options are
    /// derived from the loaded articles.
    #[must_use]
    pub fn new(
        source_url: impl Into<String>,
        site_name: impl Into<String>,
        categories: &[String],
        theme: Theme,
    ) -> Self {
        Self {
            store: ArticleStore::new(),
            search_text: String::new(),
            selector: CategorySelector::new(categories),
            applied_query: FilterQuery::default(),
            focus: Focus::Grid,
            detail: None,
            status: StatusNotifier::new(),
            selected_card: 0,
            viewport: Viewport::default(),
            load_state: LoadState::Idle,
            load_requested: false,
            source_url: source_url.into(),
            site_name: site_name.into(),
            theme,
        }
    }

    /// Filters the full list with the current field text and selector value.
    ///
    /// Returns the status notification side effect when the query is active.
    pub fn apply_filter(&mut self) -> Vec<Action> {
        let query = FilterQuery::new(&self.search_text, self.selector.value());
        let filtered = filter_articles(self.store.all(), &query);
        let count = filtered.len();

        self.store.set_filtered(filtered);
        self.clamp_selection();

        let actions = if query.is_active() {
            vec![self.status.notify(format!("Found {count} articles"), Severity::Success)]
        } else {
            vec![]
        };

        self.applied_query = query;
        actions
    }

    /// Clears both controls and restores the unfiltered view.
    pub fn reset_filters(&mut self) {
        self.search_text.clear();
        self.selector.clear();
        self.applied_query = FilterQuery::default();
        self.store.reset_filtered();
        self.selected_card = 0;
        self.focus = Focus::Grid;
    }

    /// Installs freshly loaded articles.
    pub fn install_articles(&mut self, articles: Vec<crate::domain::Article>) {
        self.store.replace_all(articles);
        self.selector.rebuild(self.store.all());
        self.applied_query = FilterQuery::default();
        self.selected_card = 0;
        self.load_state = LoadState::Loaded;
    }

    fn clamp_selection(&mut self) {
        let len = self.store.filtered().len();
        self.selected_card = if len == 0 {
            0
        } else {
            self.selected_card.min(len - 1)
        };
    }

    /// The article under the keyboard selection.
    #[must_use]
    pub fn selected_article(&self) -> Option<&ArticleRef> {
        self.store.filtered().get(self.selected_card)
    }

    /// Opens the detail view for the filtered article at `index`.
    ///
    /// Returns `false` if no such article exists.
    pub fn open_detail(&mut self, index: usize) -> bool {
        let Some(article) = self.store.filtered().get(index).cloned() else {
            return false;
        };

        self.selected_card = index;
        self.detail = Some(DetailOverlay::open(article));
        true
    }

    /// Hides the detail view. Returns `true` if it was open.
    pub fn close_detail(&mut self) -> bool {
        self.detail.take().is_some()
    }

    /// Moves the card selection, row-major, without wrapping.
    ///
    /// Moving down from the second-to-last row onto a shorter last row lands
    /// on the last card.
    pub fn move_selection(&mut self, direction: Direction) -> bool {
        let len = self.store.filtered().len();
        if len == 0 {
            return false;
        }

        let columns = crate::ui::layout::grid_columns(self.viewport.cols);
        let current = self.selected_card.min(len - 1);
        let next = match direction {
            Direction::Left => current.saturating_sub(1),
            Direction::Right => (current + 1).min(len - 1),
            Direction::Up => current.checked_sub(columns).unwrap_or(current),
            Direction::Down => {
                let below = current + columns;
                if below < len {
                    below
                } else if current / columns < (len - 1) / columns {
                    len - 1
                } else {
                    current
                }
            }
        };

        let changed = next != self.selected_card;
        self.selected_card = next;
        changed
    }

    /// Wrapped body lines of the open detail view at the current viewport.
    #[must_use]
    pub fn detail_lines(&self) -> Option<Vec<DetailLine>> {
        let detail = self.detail.as_ref()?;
        let rect = OverlayRect::for_viewport(self.viewport);
        Some(present::render_detail(&detail.article).body_lines(rect.body_width()))
    }

    /// Scrolls the detail view, clamped to its content.
    pub fn scroll_detail(&mut self, delta: i32) -> bool {
        let Some(total) = self.detail_lines().map(|lines| lines.len()) else {
            return false;
        };
        let body_height = OverlayRect::for_viewport(self.viewport).body_height();
        let max_scroll = total.saturating_sub(body_height);

        let Some(detail) = self.detail.as_mut() else {
            return false;
        };
        let before = detail.scroll;
        detail.scroll_by(delta, max_scroll);
        detail.scroll != before
    }

    /// Text of the clickable header title.
    #[must_use]
    pub fn header_title(&self) -> String {
        format!(" {} ", self.site_name)
    }

    /// The selector's `n/m` position indicator.
    #[must_use]
    pub fn selector_position(&self) -> String {
        format!("{}/{}", self.selector.index() + 1, self.selector.options().len())
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in character cells
    /// * `cols` - Terminal width in character cells
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let viewport = Viewport::new(rows, cols);

        UIViewModel {
            header: self.compute_header(),
            search_bar: SearchBarInfo {
                query: self.search_text.clone(),
                focused: self.focus == Focus::SearchField,
            },
            selector: SelectorInfo {
                label: selector_label(self.selector.label(), &self.selector_position(), cols),
                focused: self.focus == Focus::CategorySelector,
                position: self.selector_position(),
            },
            body: self.compute_body(viewport),
            detail: self.compute_detail(viewport),
            status: self.status.current().map(|message| StatusInfo {
                text: message.text.clone(),
                severity: message.severity,
            }),
            footer: self.compute_footer(),
        }
    }

    fn compute_body(&self, viewport: Viewport) -> BodyView {
        match &self.load_state {
            LoadState::Idle if self.store.is_empty() => {
                return BodyView::Empty(EmptyState {
                    message: "Waiting for permissions".to_string(),
                    lines: vec!["Grant web access to load articles".to_string()],
                    link: None,
                });
            }
            LoadState::Loading if self.store.is_empty() => {
                return BodyView::Empty(EmptyState {
                    message: "Loading articles...".to_string(),
                    lines: vec![self.source_url.clone()],
                    link: None,
                });
            }
            LoadState::Failed(reason) if self.store.is_empty() => {
                return BodyView::Empty(EmptyState {
                    message: present::LOAD_ERROR_MESSAGE.to_string(),
                    lines: vec![format!("Error: {reason}"), present::PUBLISH_HINT.to_string()],
                    link: Some(present::PUBLISH_LINK.to_string()),
                });
            }
            _ => {}
        }

        let filtered = self.store.filtered();
        match present::render_list(filtered) {
            ListPresentation::NoMatches => BodyView::Empty(EmptyState {
                message: present::NO_MATCHES_MESSAGE.to_string(),
                lines: vec![present::NO_MATCHES_HINT.to_string()],
                link: None,
            }),
            ListPresentation::Grid(items) => {
                let layout = GridLayout::compute(viewport, items.len(), self.selected_card);
                let needle = self.applied_query.search();

                let cards = layout
                    .visible_range(items.len())
                    .filter_map(|index| {
                        items.get(index).map(|item| DisplayCard {
                            index,
                            highlight_ranges: substring_ranges(&item.title, needle),
                            is_selected: index == self.selected_card,
                            item: item.clone(),
                        })
                    })
                    .collect();

                BodyView::Cards(CardGrid { layout, cards })
            }
        }
    }

    fn compute_detail(&self, viewport: Viewport) -> Option<DetailInfo> {
        let detail = self.detail.as_ref()?;
        let rect = OverlayRect::for_viewport(viewport);
        let all_lines = present::render_detail(&detail.article).body_lines(rect.body_width());

        let height = rect.body_height();
        let start = detail.scroll.min(all_lines.len().saturating_sub(height));
        let end = (start + height).min(all_lines.len());

        Some(DetailInfo {
            rect,
            lines: all_lines[start..end].to_vec(),
            more_above: start > 0,
            more_below: end < all_lines.len(),
        })
    }

    fn compute_header(&self) -> HeaderInfo {
        let counts = if self.store.is_empty() {
            String::new()
        } else {
            format!(
                "{}/{} articles ",
                self.store.filtered().len(),
                self.store.all().len()
            )
        };

        HeaderInfo {
            title: self.header_title(),
            counts,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.detail.is_some() {
            "Esc/q: close  ↑/↓: scroll  PgUp/PgDn: page  click outside: close"
        } else {
            match self.focus {
                Focus::SearchField => "Enter: search  Esc: back  Tab: category  Type to edit",
                Focus::CategorySelector => "←/→: change category  Esc: back  /: search",
                Focus::Grid => {
                    "←↑↓→: move  Enter: open  /: search  Tab: category  H: reset  q: quit"
                }
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}
