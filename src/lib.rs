//! Gazette: a Zellij plugin for browsing a JSON article feed.
//!
//! Gazette fetches a JSON array of articles once per load and presents it as:
//! - A responsive grid of article cards
//! - Free-text search over titles, content and tags, applied on Enter
//! - A category selector that filters immediately
//! - A scrollable detail overlay for the selected article
//! - Transient status messages that dismiss themselves

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Dispatch table routing events to handlers        │
//! │  - Store, filter, loader, status notifier           │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  UI Layer (ui/)                                     │
//! │  - Layout and hit testing                           │
//! │  - Card/detail presentation                         │
//! │  - Components, theming                              │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Error types (domain/error)                       │
//! │  - Article model (domain/article)                   │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/gazette.wasm" {
//!         base_url "https://example.github.io/news/"
//!         data_path "date.json"
//!         site_name "Daily Gazette"
//!         categories "tech,sports"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load**: parse configuration, initialize tracing, build
//!    `AppState`, request web access
//! 2. **Permissions Granted**: `Event::PageReady` issues the one feed request
//! 3. **Response**: `Event::ArticlesFetched` fills the store or records the
//!    failure
//! 4. **Interaction**: keys and clicks become events routed through the
//!    dispatch table; actions come back for the shim to execute

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event};
pub use domain::{Article, GazetteError, Result};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Default base URL of the feed.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/";

/// Default path of the feed relative to the base URL.
pub const DEFAULT_DATA_PATH: &str = "date.json";

/// Default header title.
pub const DEFAULT_SITE_NAME: &str = "Gazette";

const DEFAULT_TRACE_MAX_MB: u64 = 10;
const DEFAULT_TRACE_BACKUPS: usize = 3;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Configuration values are provided via Zellij's KDL layout configuration
/// and passed to the plugin during initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL the data path is resolved against.
    pub base_url: String,

    /// Feed location; an absolute URL here ignores `base_url`.
    pub data_path: String,

    /// Header title.
    pub site_name: String,

    /// Fixed category options. Empty means derive them from loaded tags.
    pub categories: Vec<String>,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Trace file size in MiB before rotation.
    pub trace_max_mb: u64,

    /// Rotated trace files to keep.
    pub trace_backups: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            data_path: DEFAULT_DATA_PATH.to_string(),
            site_name: DEFAULT_SITE_NAME.to_string(),
            categories: Vec::new(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
            trace_max_mb: DEFAULT_TRACE_MAX_MB,
            trace_backups: DEFAULT_TRACE_BACKUPS,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `base_url`, `data_path`, `site_name`: blank values fall back to defaults
    /// - `categories`: comma-separated string → `Vec<String>` (filters empty values)
    /// - `theme`, `theme_file`, `trace_level`: `Option<String>`
    /// - `trace_max_mb`, `trace_backups`: numbers, falling back to defaults on parse error
    /// - `theme_file`: `~` is expanded to the sandbox `/host` mount
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let text = |key: &str, default: String| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map_or(default, String::from)
        };

        let categories = config
            .get("categories")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        let trace_max_mb = config
            .get("trace_max_mb")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(defaults.trace_max_mb);

        let trace_backups = config
            .get("trace_backups")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(defaults.trace_backups);

        Self {
            base_url: text("base_url", defaults.base_url),
            data_path: text("data_path", defaults.data_path),
            site_name: text("site_name", defaults.site_name),
            categories,
            theme_name: config.get("theme").cloned(),
            theme_file: config
                .get("theme_file")
                .map(|path| infrastructure::paths::expand_tilde(path)),
            trace_level: config.get("trace_level").cloned(),
            trace_max_mb,
            trace_backups,
        }
    }

    /// The feed URL, without cache busting.
    #[must_use]
    pub fn source_url(&self) -> String {
        app::loader::resolve_source_url(&self.base_url, &self.data_path)
    }
}

/// Initializes the plugin state from configuration.
///
/// Creates a new `AppState` with:
/// - Loaded theme (from file, name, or default)
/// - Resolved feed URL and site name
/// - Category options (configured, or derived after loading)
///
/// Nothing is fetched yet; the request goes out on `Event::PageReady`.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing gazette plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let source_url = config.source_url();
    tracing::debug!(source_url = %source_url, site_name = %config.site_name, "feed configured");

    AppState::new(source_url, config.site_name.clone(), &config.categories, theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_configuration_uses_defaults() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config, Config::default());
        assert_eq!(config.source_url(), "http://localhost:8000/date.json");
    }

    #[test]
    fn parses_every_key() {
        let config = Config::from_zellij(&map(&[
            ("base_url", "https://news.example/"),
            ("data_path", "feeds/all.json"),
            ("site_name", "Daily"),
            ("categories", "tech, ,sports,"),
            ("theme", "catppuccin-latte"),
            ("theme_file", "~/themes/mine.toml"),
            ("trace_level", "debug"),
            ("trace_max_mb", "2"),
            ("trace_backups", "5"),
        ]));

        assert_eq!(config.source_url(), "https://news.example/feeds/all.json");
        assert_eq!(config.site_name, "Daily");
        assert_eq!(config.categories, vec!["tech", "sports"]);
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.theme_file.as_deref(), Some("/host/themes/mine.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.trace_max_mb, 2);
        assert_eq!(config.trace_backups, 5);
    }

    #[test]
    fn invalid_numbers_and_blanks_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("site_name", "   "),
            ("trace_max_mb", "lots"),
            ("trace_backups", "-1"),
        ]));

        assert_eq!(config.site_name, DEFAULT_SITE_NAME);
        assert_eq!(config.trace_max_mb, 10);
        assert_eq!(config.trace_backups, 3);
    }

    #[test]
    fn initialize_builds_idle_state() {
        let config = Config {
            categories: vec!["tech".into()],
            ..Config::default()
        };
        let state = initialize(&config);

        assert_eq!(state.source_url, "http://localhost:8000/date.json");
        assert_eq!(state.site_name, "Gazette");
        assert_eq!(state.selector.options().len(), 2);
        assert_eq!(state.load_state, app::LoadState::Idle);
        assert!(!state.load_requested);
    }

    #[test]
    fn missing_theme_file_falls_back_to_default() {
        let config = Config {
            theme_file: Some("/nonexistent/theme.toml".into()),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.colors.header_fg, Theme::default().colors.header_fg);
    }
}
