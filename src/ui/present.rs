//! Pure presentation of articles: card items and the detail view.
//!
//! Everything here is terminal-agnostic. Components draw the values produced
//! here; tests assert on them directly.
//!
//! The list and the detail view deliberately use different fallbacks: cards
//! always show some image (the placeholder when the article has no usable
//! thumbnail) while the detail view shows none.

use crate::app::store::ArticleRef;
use crate::domain::{Article, Tags};

/// Image shown on cards whose thumbnail is missing or unusable.
pub const PLACEHOLDER_IMAGE: &str =
    "https://via.placeholder.com/300x180/CCCCCC/FFFFFF?text=No+Image";

/// Number of content characters used when a card has no summary.
pub const EXCERPT_CHARS: usize = 50;

/// Primary and secondary text of the "nothing matched" state.
pub const NO_MATCHES_MESSAGE: &str = "No matching articles";
pub const NO_MATCHES_HINT: &str = "Try different search conditions";

/// Texts of the load-error state.
pub const LOAD_ERROR_MESSAGE: &str = "No articles found";
pub const PUBLISH_HINT: &str = "Create a date.json file in your GitHub repository:";
pub const PUBLISH_LINK: &str = "https://github.com";

/// One card of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardItem {
    pub thumbnail: String,
    pub title: String,
    pub summary: String,
    pub byline: String,
}

/// What the list area shows for a filtered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListPresentation {
    /// One card per article, in list order.
    Grid(Vec<CardItem>),

    /// The filtered list is empty.
    NoMatches,
}

/// Populated sub-regions of the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub thumbnail: Option<String>,
    pub content: String,
    pub author: String,
    pub date: String,
    pub tags: String,
}

/// Styling role of one line of the detail body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    Title,
    Meta,
    Content,
    Blank,
}

/// A wrapped line of the detail body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailLine {
    pub text: String,
    pub role: LineRole,
}

/// Builds the list presentation for `articles`.
#[must_use]
pub fn render_list(articles: &[ArticleRef]) -> ListPresentation {
    if articles.is_empty() {
        return ListPresentation::NoMatches;
    }

    ListPresentation::Grid(articles.iter().map(|article| card_item(article)).collect())
}

/// Builds one card from an article.
#[must_use]
pub fn card_item(article: &Article) -> CardItem {
    let summary = given(&article.summary).map_or_else(
        || {
            given(&article.content).map_or_else(
                || "No summary".to_string(),
                |content| {
                    let excerpt: String = inline_text(content).chars().take(EXCERPT_CHARS).collect();
                    format!("{excerpt}...")
                },
            )
        },
        inline_text,
    );

    CardItem {
        thumbnail: card_thumbnail(article.thumbnail.as_deref()),
        title: given(&article.title).map_or_else(|| "Untitled".to_string(), inline_text),
        summary,
        byline: format!(
            "Author: {} | {}",
            given(&article.author).map_or_else(|| "Unknown".to_string(), inline_text),
            given(&article.date).map_or_else(|| "Date unknown".to_string(), inline_text)
        ),
    }
}

/// A text field that is present and non-empty.
fn given(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|text| !text.is_empty())
}

/// Picks the image a card shows.
///
/// A thumbnail that could never load (empty, not an `http(s)` URL, or
/// carrying whitespace or control characters) is
/// replaced by [`PLACEHOLDER_IMAGE`].
#[must_use]
pub fn card_thumbnail(thumbnail: Option<&str>) -> String {
    match thumbnail.map(str::trim) {
        Some(url) if is_loadable_image_url(url) => url.to_string(),
        _ => PLACEHOLDER_IMAGE.to_string(),
    }
}

fn is_loadable_image_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));

    rest.is_some_and(|rest| {
        let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
        !host.is_empty() && !url.chars().any(|c| c.is_whitespace() || c.is_control())
    })
}

/// Builds the detail view for `article`.
#[must_use]
pub fn render_detail(article: &Article) -> DetailView {
    DetailView {
        title: given(&article.title).map_or_else(|| "Untitled".to_string(), inline_text),
        thumbnail: given(&article.thumbnail)
            .map(inline_text)
            .filter(|url| !url.trim().is_empty()),
        content: given(&article.content).map_or_else(|| "No content".to_string(), plain_text),
        author: given(&article.author).map_or_else(|| "Unknown".to_string(), inline_text),
        date: given(&article.date).map_or_else(|| "Unknown".to_string(), inline_text),
        tags: match &article.tags {
            Some(Tags::One(tag)) if tag.is_empty() => "No tags".to_string(),
            Some(tags) => inline_text(&tags.display_line()),
            None => "No tags".to_string(),
        },
    }
}

/// Removes control characters other than newline and tab.
///
/// Content is displayed verbatim, so escape sequences in the feed must not
/// reach the terminal.
#[must_use]
pub fn plain_text(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .map(|c| if c == '\t' { ' ' } else { c })
        .collect()
}

/// Like [`plain_text`], for single-line fields: line breaks and tabs become
/// spaces, every other control character is dropped.
#[must_use]
pub fn inline_text(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '\n' | '\r' | '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}

impl DetailView {
    /// Lays the view out as wrapped lines of at most `width` characters.
    ///
    /// Order: title, image, content, then author, date and tags.
    #[must_use]
    pub fn body_lines(&self, width: usize) -> Vec<DetailLine> {
        let width = width.max(1);
        let mut lines = Vec::new();

        push_wrapped(&mut lines, &self.title, width, LineRole::Title);
        if let Some(thumbnail) = &self.thumbnail {
            push_wrapped(&mut lines, &format!("Image: {thumbnail}"), width, LineRole::Meta);
        }
        push_blank(&mut lines);

        for paragraph in self.content.split('\n') {
            push_wrapped(&mut lines, paragraph, width, LineRole::Content);
        }
        push_blank(&mut lines);

        push_wrapped(&mut lines, &format!("Author: {}", self.author), width, LineRole::Meta);
        push_wrapped(&mut lines, &format!("Date: {}", self.date), width, LineRole::Meta);
        push_wrapped(&mut lines, &format!("Tags: {}", self.tags), width, LineRole::Meta);

        lines
    }
}

fn push_blank(lines: &mut Vec<DetailLine>) {
    lines.push(DetailLine {
        text: String::new(),
        role: LineRole::Blank,
    });
}

fn push_wrapped(lines: &mut Vec<DetailLine>, text: &str, width: usize, role: LineRole) {
    let wrapped = wrap_text(text, width);
    if wrapped.is_empty() {
        push_blank(lines);
        return;
    }
    lines.extend(wrapped.into_iter().map(|text| DetailLine { text, role }));
}

/// Greedy word wrap measured in characters.
///
/// Words longer than `width` are split. An empty or whitespace-only input
/// yields no lines.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();

        while chars.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = chars.split_off(width);
            lines.push(chars.into_iter().collect());
            chars = rest;
        }

        let word_len = chars.len();
        if word_len == 0 {
            continue;
        }

        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(chars);
        current_len += word_len;
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}

/// Truncates `text` to `width` characters, marking the cut with `…`.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut truncated: String = text.chars().take(width - 1).collect();
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn full_article() -> Article {
        Article {
            title: Some("Headline".into()),
            summary: Some("Short summary".into()),
            content: Some("Body text".into()),
            thumbnail: Some("https://img.example.com/a.png".into()),
            author: Some("Kim".into()),
            date: Some("2024-05-01".into()),
            tags: Some(Tags::Many(vec!["news".into(), "rust".into()])),
        }
    }

    #[test]
    fn empty_list_is_no_matches() {
        assert_eq!(render_list(&[]), ListPresentation::NoMatches);
    }

    #[test]
    fn grid_keeps_input_order() {
        let a = Arc::new(Article { title: Some("A".into()), ..Article::default() });
        let b = Arc::new(Article { title: Some("B".into()), ..Article::default() });

        let ListPresentation::Grid(cards) = render_list(&[a, b]) else {
            panic!("expected a grid");
        };
        let titles: Vec<_> = cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn card_uses_all_given_fields() {
        let card = card_item(&full_article());

        assert_eq!(card.title, "Headline");
        assert_eq!(card.summary, "Short summary");
        assert_eq!(card.thumbnail, "https://img.example.com/a.png");
        assert_eq!(card.byline, "Author: Kim | 2024-05-01");
    }

    #[test]
    fn card_fallbacks_for_empty_article() {
        let card = card_item(&Article::default());

        assert_eq!(card.title, "Untitled");
        assert_eq!(card.summary, "No summary");
        assert_eq!(card.thumbnail, PLACEHOLDER_IMAGE);
        assert_eq!(card.byline, "Author: Unknown | Date unknown");
    }

    #[test]
    fn summary_falls_back_to_content_excerpt() {
        let content = "x".repeat(60);
        let card = card_item(&Article { content: Some(content), ..Article::default() });

        assert_eq!(card.summary, format!("{}...", "x".repeat(50)));
    }

    #[test]
    fn short_content_excerpt_still_gets_ellipsis() {
        let card = card_item(&Article { content: Some("Hi".into()), ..Article::default() });
        assert_eq!(card.summary, "Hi...");
    }

    #[test]
    fn excerpt_counts_characters_not_bytes() {
        let content = "é".repeat(60);
        let card = card_item(&Article { content: Some(content), ..Article::default() });

        assert_eq!(card.summary.chars().count(), 53);
    }

    #[test]
    fn unusable_thumbnails_get_placeholder() {
        assert_eq!(card_thumbnail(Some("")), PLACEHOLDER_IMAGE);
        assert_eq!(card_thumbnail(Some("not a url")), PLACEHOLDER_IMAGE);
        assert_eq!(card_thumbnail(Some("ftp://host/a.png")), PLACEHOLDER_IMAGE);
        assert_eq!(card_thumbnail(Some("https://")), PLACEHOLDER_IMAGE);
        assert_eq!(card_thumbnail(Some("http://cdn/x.jpg")), "http://cdn/x.jpg");
    }

    #[test]
    fn detail_uses_all_given_fields() {
        let detail = render_detail(&full_article());

        assert_eq!(detail.title, "Headline");
        assert_eq!(detail.thumbnail.as_deref(), Some("https://img.example.com/a.png"));
        assert_eq!(detail.content, "Body text");
        assert_eq!(detail.tags, "news, rust");
    }

    #[test]
    fn detail_fallbacks_for_empty_article() {
        let detail = render_detail(&Article::default());

        assert_eq!(detail.title, "Untitled");
        assert_eq!(detail.thumbnail, None);
        assert_eq!(detail.content, "No content");
        assert_eq!(detail.author, "Unknown");
        assert_eq!(detail.date, "Unknown");
        assert_eq!(detail.tags, "No tags");
    }

    #[test]
    fn detail_shows_scalar_tags_as_is() {
        let detail = render_detail(&Article {
            tags: Some(Tags::One("solo".into())),
            ..Article::default()
        });
        assert_eq!(detail.tags, "solo");
    }

    #[test]
    fn empty_strings_fall_back_like_missing_fields() {
        let article = Article {
            title: Some(String::new()),
            summary: Some(String::new()),
            content: Some("Body".into()),
            author: Some(String::new()),
            ..Article::default()
        };

        let card = card_item(&article);
        assert_eq!(card.title, "Untitled");
        assert_eq!(card.summary, "Body...");
        assert_eq!(card.byline, "Author: Unknown | Date unknown");
        assert_eq!(render_detail(&article).author, "Unknown");
    }

    #[test]
    fn content_is_plain_text() {
        let detail = render_detail(&Article {
            content: Some("<b>bold</b>\u{1b}[31mred\nnext".into()),
            ..Article::default()
        });

        assert_eq!(detail.content, "<b>bold</b>[31mred\nnext");
    }

    #[test]
    fn escape_sequences_never_reach_display_fields() {
        let article = Article::from_json(serde_json::json!({
            "title": "\u{1b}[2JPwned",
            "author": "\u{1b}]0;evil\u{7}Kim",
            "date": "2024\r\n-05",
            "tags": ["\u{1b}[31mred"],
            "thumbnail": "http://x/\u{1b}[2J"
        }));

        let detail = render_detail(&article);
        let lines = detail.body_lines(80);
        assert!(lines.iter().all(|line| !line.text.chars().any(char::is_control)));
        assert_eq!(detail.title, "[2JPwned");
        assert_eq!(detail.author, "]0;evilKim");
        assert_eq!(detail.tags, "[31mred");
        assert_eq!(detail.thumbnail.as_deref(), Some("http://x/[2J"));

        let card = card_item(&article);
        assert_eq!(card.thumbnail, PLACEHOLDER_IMAGE);
        assert_eq!(card.title, "[2JPwned");
        assert!(!card.byline.chars().any(char::is_control));
    }

    #[test]
    fn inline_text_flattens_line_breaks() {
        assert_eq!(inline_text("a\nb\tc\u{7}d"), "a b cd");
    }

    #[test]
    fn wrap_respects_width_and_splits_long_words() {
        assert_eq!(wrap_text("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert!(wrap_text("   ", 10).is_empty());
    }

    #[test]
    fn body_lines_order_title_content_meta() {
        let lines = render_detail(&full_article()).body_lines(40);
        let texts: Vec<_> = lines.iter().map(|l| l.text.as_str()).collect();

        assert_eq!(
            texts,
            vec![
                "Headline",
                "Image: https://img.example.com/a.png",
                "",
                "Body text",
                "",
                "Author: Kim",
                "Date: 2024-05-01",
                "Tags: news, rust",
            ]
        );
        assert_eq!(lines[0].role, LineRole::Title);
    }

    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("hello", 5), "hello");
        assert_eq!(truncate("hello world", 6), "hello…");
        assert_eq!(truncate("abc", 0), "");
    }
}
