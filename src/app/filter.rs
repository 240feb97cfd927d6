//! Article filtering: free-text search and exact category match.
//!
//! [`filter_articles`] is a pure, single-pass function over the loaded list.
//! It never mutates its input, always returns a freshly built `Vec`, and keeps
//! surviving articles in their original relative order.
//!
//! # Matching Rules
//!
//! - The search text is trimmed and lower-cased. An article matches when any of
//!   its tags contains the text, or its title contains it, or its content
//!   contains it. Missing titles or contents simply don't match.
//! - The selector is lower-cased. An article matches when one of its tags equals
//!   it exactly.
//! - When both are given, an article must satisfy both.

use crate::app::store::ArticleRef;
use crate::domain::Article;

/// A normalized filter request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    search: String,
    category: String,
}

impl FilterQuery {
    /// Normalizes raw control values into a query.
    #[must_use]
    pub fn new(search_text: &str, category: &str) -> Self {
        Self {
            search: search_text.trim().to_lowercase(),
            category: category.to_lowercase(),
        }
    }

    /// Returns `true` when at least one of the two filters is non-empty.
    ///
    /// Only active queries announce their result count in the status banner.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || !self.category.is_empty()
    }

    /// The normalized search text.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// The normalized category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    fn matches_search(&self, article: &Article, tags: &[String]) -> bool {
        let needle = self.search.as_str();

        tags.iter().any(|tag| tag.contains(needle))
            || article
                .title
                .as_ref()
                .is_some_and(|title| title.to_lowercase().contains(needle))
            || article
                .content
                .as_ref()
                .is_some_and(|content| content.to_lowercase().contains(needle))
    }

    fn matches_category(&self, tags: &[String]) -> bool {
        tags.iter().any(|tag| *tag == self.category)
    }
}

/// Applies `query` to `articles`, returning the surviving subset.
///
/// The search narrowing pass runs first, then the category pass runs over its
/// result. An inactive query yields a fresh copy of the whole list.
#[must_use]
pub fn filter_articles(articles: &[ArticleRef], query: &FilterQuery) -> Vec<ArticleRef> {
    let _span = tracing::debug_span!(
        "filter_articles",
        total_articles = articles.len(),
        search_len = query.search.len(),
        category = %query.category
    )
    .entered();

    let mut filtered: Vec<ArticleRef> = articles.to_vec();

    if !query.search.is_empty() {
        filtered.retain(|article| query.matches_search(article, &article.normalized_tags()));
    }

    if !query.category.is_empty() {
        filtered.retain(|article| query.matches_category(&article.normalized_tags()));
    }

    tracing::debug!(filtered_count = filtered.len(), "filter applied");
    filtered
}

/// Convenience wrapper taking raw control values.
#[must_use]
pub fn filter(articles: &[ArticleRef], search_text: &str, category: &str) -> Vec<ArticleRef> {
    filter_articles(articles, &FilterQuery::new(search_text, category))
}
