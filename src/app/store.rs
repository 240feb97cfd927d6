//! Article store: the loaded list and the currently visible subset.
//!
//! [`ArticleStore`] is owned by [`AppState`](crate::app::AppState) and is the
//! only place article data lives. It enforces the replace-never-mutate
//! discipline: `all` is swapped wholesale on a successful load and `filtered`
//! is swapped wholesale on every filter or reset.

use crate::domain::Article;
use std::sync::Arc;

/// Shared handle to one loaded article.
///
/// Cards and the detail view hold these handles, so opening an article shows
/// the exact record that was loaded rather than a copy looked up by key.
pub type ArticleRef = Arc<Article>;

/// Holds the full loaded list and the filtered view derived from it.
#[derive(Debug, Clone, Default)]
pub struct ArticleStore {
    all: Vec<ArticleRef>,
    filtered: Vec<ArticleRef>,
}

impl ArticleStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the full list with freshly loaded articles.
    ///
    /// The filtered view becomes an unfiltered copy of the new list.
    pub fn replace_all(&mut self, articles: Vec<Article>) {
        self.all = articles.into_iter().map(Arc::new).collect();
        self.filtered = self.all.clone();
        tracing::debug!(article_count = self.all.len(), "article store replaced");
    }

    /// Replaces the filtered view.
    pub fn set_filtered(&mut self, filtered: Vec<ArticleRef>) {
        self.filtered = filtered;
    }

    /// Restores the filtered view to a fresh, unfiltered copy of the full list.
    pub fn reset_filtered(&mut self) {
        self.filtered = self.all.clone();
    }

    /// The loaded source-of-truth list.
    #[must_use]
    pub fn all(&self) -> &[ArticleRef] {
        &self.all
    }

    /// The currently visible subset, in load order.
    #[must_use]
    pub fn filtered(&self) -> &[ArticleRef] {
        &self.filtered
    }

    /// Returns `true` when nothing has been loaded yet (or the feed was empty).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(title: &str) -> Article {
        Article {
            title: Some(title.to_string()),
            ..Article::default()
        }
    }

    #[test]
    fn starts_empty() {
        let store = ArticleStore::new();
        assert!(store.is_empty());
        assert!(store.filtered().is_empty());
    }

    #[test]
    fn replace_all_resets_filtered_view() {
        let mut store = ArticleStore::new();
        store.replace_all(vec![titled("A"), titled("B")]);
        store.set_filtered(vec![Arc::clone(&store.all()[1])]);

        store.replace_all(vec![titled("C")]);

        assert_eq!(store.all().len(), 1);
        assert_eq!(store.filtered().len(), 1);
        assert_eq!(store.filtered()[0].title.as_deref(), Some("C"));
    }

    #[test]
    fn filtered_view_shares_records_with_full_list() {
        let mut store = ArticleStore::new();
        store.replace_all(vec![titled("A")]);

        assert!(Arc::ptr_eq(&store.all()[0], &store.filtered()[0]));
    }

    #[test]
    fn duplicates_are_kept_as_distinct_entries() {
        let mut store = ArticleStore::new();
        store.replace_all(vec![titled("Same"), titled("Same")]);

        assert_eq!(store.all().len(), 2);
        assert!(!Arc::ptr_eq(&store.all()[0], &store.all()[1]));
    }

    #[test]
    fn reset_filtered_restores_full_list() {
        let mut store = ArticleStore::new();
        store.replace_all(vec![titled("A"), titled("B")]);
        store.set_filtered(vec![]);

        store.reset_filtered();

        assert_eq!(store.filtered().len(), 2);
    }
}
