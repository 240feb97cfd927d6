//! Category selector options and cursor.
//!
//! The first option is always the empty string, meaning "all categories".
//! Remaining options are either fixed by configuration or derived from the
//! distinct tags of the loaded articles, in first-seen order.

use crate::app::store::ArticleRef;

/// Label shown for the empty "all categories" option.
pub const ALL_LABEL: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySelector {
    options: Vec<String>,
    index: usize,
    fixed: bool,
}

impl Default for CategorySelector {
    fn default() -> Self {
        Self {
            options: vec![String::new()],
            index: 0,
            fixed: false,
        }
    }
}

impl CategorySelector {
    /// Builds a selector from configured categories.
    ///
    /// With no configured categories the options are derived from loaded
    /// articles by [`CategorySelector::rebuild`].
    #[must_use]
    pub fn new(configured: &[String]) -> Self {
        if configured.is_empty() {
            return Self::default();
        }

        let mut selector = Self {
            fixed: true,
            ..Self::default()
        };
        selector.extend(configured.iter().map(String::as_str));
        selector
    }

    /// Re-derives the option list from loaded articles.
    ///
    /// Keeps the current value selected when it is still offered, otherwise
    /// falls back to "all". Configured option lists are left untouched.
    pub fn rebuild(&mut self, articles: &[ArticleRef]) {
        if self.fixed {
            return;
        }

        let current = self.value().to_string();
        self.options.truncate(1);

        for article in articles {
            let tags = article.normalized_tags();
            self.extend(tags.iter().map(String::as_str));
        }

        self.index = self
            .options
            .iter()
            .position(|option| *option == current)
            .unwrap_or(0);

        tracing::debug!(option_count = self.options.len() - 1, "category options rebuilt");
    }

    fn extend<'a>(&mut self, values: impl Iterator<Item = &'a str>) {
        for value in values {
            // Options must equal normalized tags exactly, so no trimming here.
            let value = value.to_lowercase();
            if !value.trim().is_empty() && !self.options.contains(&value) {
                self.options.push(value);
            }
        }
    }

    /// Moves the cursor by `step`, wrapping at both ends.
    ///
    /// Returns `true` when the value changed.
    pub fn step(&mut self, step: i32) -> bool {
        let len = self.options.len();
        if len <= 1 || step == 0 {
            return false;
        }

        let len = i64::try_from(len).unwrap_or(i64::MAX);
        let current = i64::try_from(self.index).unwrap_or(0);
        let next = (current + i64::from(step)).rem_euclid(len);
        let next = usize::try_from(next).unwrap_or(0);

        let changed = next != self.index;
        self.index = next;
        changed
    }

    /// The selected category; empty for "all".
    #[must_use]
    pub fn value(&self) -> &str {
        self.options.get(self.index).map_or("", String::as_str)
    }

    /// Display label for the selected option.
    #[must_use]
    pub fn label(&self) -> &str {
        let value = self.value();
        if value.is_empty() {
            ALL_LABEL
        } else {
            value
        }
    }

    /// Selects "all".
    pub fn clear(&mut self) {
        self.index = 0;
    }

    /// All options including the leading empty one.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Article, Tags};
    use std::sync::Arc;

    fn tagged(tags: &[&str]) -> ArticleRef {
        Arc::new(Article {
            tags: Some(Tags::Many(tags.iter().map(|t| (*t).to_string()).collect())),
            ..Article::default()
        })
    }

    #[test]
    fn starts_on_all() {
        let selector = CategorySelector::default();
        assert_eq!(selector.value(), "");
        assert_eq!(selector.label(), ALL_LABEL);
    }

    #[test]
    fn derives_distinct_lowercase_tags_in_order() {
        let mut selector = CategorySelector::new(&[]);
        selector.rebuild(&[tagged(&["News", "Rust"]), tagged(&["news", "Sports"])]);

        assert_eq!(selector.options(), &["", "news", "rust", "sports"]);
    }

    #[test]
    fn configured_options_are_fixed() {
        let mut selector = CategorySelector::new(&["Tech".into(), "Life".into()]);
        selector.rebuild(&[tagged(&["sports"])]);

        assert_eq!(selector.options(), &["", "tech", "life"]);
    }

    #[test]
    fn step_wraps_both_ways() {
        let mut selector = CategorySelector::new(&["a".into(), "b".into()]);

        assert!(selector.step(-1));
        assert_eq!(selector.value(), "b");
        assert!(selector.step(1));
        assert_eq!(selector.value(), "");
        assert!(selector.step(1));
        assert_eq!(selector.value(), "a");
    }

    #[test]
    fn step_on_single_option_is_noop() {
        let mut selector = CategorySelector::default();
        assert!(!selector.step(1));
    }

    #[test]
    fn rebuild_keeps_selection_when_still_offered() {
        let mut selector = CategorySelector::new(&[]);
        selector.rebuild(&[tagged(&["news", "rust"])]);
        selector.step(2);
        assert_eq!(selector.value(), "rust");

        selector.rebuild(&[tagged(&["rust"])]);
        assert_eq!(selector.value(), "rust");

        selector.rebuild(&[tagged(&["other"])]);
        assert_eq!(selector.value(), "");
    }

    #[test]
    fn clear_selects_all() {
        let mut selector = CategorySelector::new(&["a".into()]);
        selector.step(1);
        selector.clear();
        assert_eq!(selector.value(), "");
    }
}
