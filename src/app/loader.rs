//! Article feed loading: request construction and response validation.
//!
//! The plugin host performs the HTTP GET asynchronously: the request goes out
//! as an [`Action::FetchArticles`](crate::app::Action::FetchArticles) and the
//! response comes back later as a separate event. This module holds the two
//! pure halves around that suspension point:
//!
//! 1. [`LoadRequest::new`] builds the cache-busted URL and a
//!    [`RequestContext`] that travels with the request through the host.
//! 2. [`parse_response`] turns `(status, body)` into articles or one of the
//!    three load failures.
//!
//! # Tracing Across the Suspension Point
//!
//! The request context carries the OpenTelemetry trace and span IDs of the
//! span that issued the request. When the response arrives, the handler
//! links the response span back to that context.

use crate::domain::error::{GazetteError, Result};
use crate::domain::Article;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Query parameter used to defeat intermediate caches.
pub const CACHE_BUST_PARAM: &str = "t";

/// Context map key holding the serialized [`RequestContext`].
const CONTEXT_KEY: &str = "gazette_request";

static NEXT_REQUEST_ID: AtomicU64 = AtomicU64::new(1);

/// Distributed tracing context for linking the response to its request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Span ID of the span that issued the request.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the trace context of the current tracing span.
    ///
    /// Returns `None` if the current span context is invalid (for example when
    /// tracing is not initialized).
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if span_context.is_valid() {
            Some(Self {
                trace_id: format!("{:032x}", span_context.trace_id()),
                parent_span_id: format!("{:016x}", span_context.span_id()),
            })
        } else {
            tracing::trace!("span context is not valid");
            None
        }
    }

    /// The remote span context this was captured from, for linking.
    #[must_use]
    pub fn span_context(&self) -> Option<opentelemetry::trace::SpanContext> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceFlags, TraceId, TraceState};

        let trace_id = TraceId::from_hex(&self.trace_id).ok()?;
        let span_id = SpanId::from_hex(&self.parent_span_id).ok()?;

        Some(SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        ))
    }
}

/// Metadata carried with a feed request through the host's context map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// Monotonic per-process request number, for log correlation.
    pub request_id: u64,

    /// Trace context of the issuing span.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_context: Option<TraceContext>,
}

impl RequestContext {
    /// Allocates the next request id and captures the current trace context.
    #[must_use]
    pub fn next() -> Self {
        Self {
            request_id: NEXT_REQUEST_ID.fetch_add(1, Ordering::Relaxed),
            trace_context: TraceContext::from_current(),
        }
    }

    /// Serializes the context into the string map the host echoes back.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        match serde_json::to_string(self) {
            Ok(json) => {
                map.insert(CONTEXT_KEY.to_string(), json);
            }
            Err(e) => tracing::debug!(error = %e, "failed to serialize request context"),
        }
        map
    }

    /// Recovers the context from a host-echoed map.
    ///
    /// Returns `None` for responses to requests this plugin did not tag.
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Option<Self> {
        map.get(CONTEXT_KEY)
            .and_then(|json| serde_json::from_str(json).ok())
    }
}

/// A ready-to-send feed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    /// Full URL including the cache-busting parameter.
    pub url: String,

    /// Context echoed back with the response.
    pub context: RequestContext,
}

impl LoadRequest {
    /// Builds a request for `source_url`, cache-busted with `now_millis`.
    #[must_use]
    pub fn new(source_url: &str, now_millis: i64) -> Self {
        Self {
            url: cache_busted_url(source_url, now_millis),
            context: RequestContext::next(),
        }
    }
}

/// Appends the cache-busting parameter to `url`.
///
/// Uses `&` when the URL already has a query string and `?` otherwise. Any
/// fragment is kept at the end.
#[must_use]
pub fn cache_busted_url(url: &str, now_millis: i64) -> String {
    let (base, fragment) = url
        .split_once('#')
        .map_or((url, None), |(base, fragment)| (base, Some(fragment)));

    let separator = if base.contains('?') {
        if base.ends_with('?') || base.ends_with('&') {
            ""
        } else {
            "&"
        }
    } else {
        "?"
    };

    let mut busted = format!("{base}{separator}{CACHE_BUST_PARAM}={now_millis}");
    if let Some(fragment) = fragment {
        busted.push('#');
        busted.push_str(fragment);
    }
    busted
}

/// Resolves the feed location from a base URL and a data path.
///
/// A `data_path` that is already absolute (contains `://`) is returned as-is.
/// Otherwise exactly one `/` separates the two parts.
#[must_use]
pub fn resolve_source_url(base_url: &str, data_path: &str) -> String {
    if data_path.contains("://") {
        return data_path.to_string();
    }
    if base_url.is_empty() {
        return data_path.to_string();
    }

    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        data_path.trim_start_matches('/')
    )
}

/// Validates a feed response and decodes its articles.
///
/// # Errors
///
/// - [`GazetteError::Http`] if `status` is outside `200..=299`
/// - [`GazetteError::Json`] if `body` is not valid JSON
/// - [`GazetteError::NotAnArray`] if the JSON value is not an array
pub fn parse_response(status: u16, body: &[u8]) -> Result<Vec<Article>> {
    if !(200..=299).contains(&status) {
        return Err(GazetteError::http(status));
    }

    match serde_json::from_slice::<Value>(body)? {
        Value::Array(items) => Ok(items.into_iter().map(Article::from_json).collect()),
        other => {
            tracing::debug!(kind = crate::domain::article::json_kind(&other), "feed is not an array");
            Err(GazetteError::NotAnArray)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_timestamp_with_question_mark() {
        assert_eq!(
            cache_busted_url("http://host/date.json", 1_700_000_000_000),
            "http://host/date.json?t=1700000000000"
        );
    }

    #[test]
    fn appends_timestamp_to_existing_query() {
        assert_eq!(
            cache_busted_url("http://host/feed?lang=en", 5),
            "http://host/feed?lang=en&t=5"
        );
        assert_eq!(cache_busted_url("http://host/feed?", 5), "http://host/feed?t=5");
    }

    #[test]
    fn keeps_fragment_last() {
        assert_eq!(
            cache_busted_url("http://host/date.json#top", 9),
            "http://host/date.json?t=9#top"
        );
    }

    #[test]
    fn resolves_relative_data_path() {
        assert_eq!(
            resolve_source_url("http://localhost:8000/", "date.json"),
            "http://localhost:8000/date.json"
        );
        assert_eq!(
            resolve_source_url("http://localhost:8000", "/feeds/date.json"),
            "http://localhost:8000/feeds/date.json"
        );
    }

    #[test]
    fn absolute_data_path_wins() {
        assert_eq!(
            resolve_source_url("http://localhost:8000/", "https://cdn.example.com/a.json"),
            "https://cdn.example.com/a.json"
        );
    }

    #[test]
    fn request_ids_increase() {
        let first = LoadRequest::new("http://host/a.json", 1);
        let second = LoadRequest::new("http://host/a.json", 2);
        assert!(second.context.request_id > first.context.request_id);
    }

    #[test]
    fn request_context_round_trips_through_host_map() {
        let context = RequestContext {
            request_id: 7,
            trace_context: Some(TraceContext {
                trace_id: "0af7651916cd43dd8448eb211c80319c".into(),
                parent_span_id: "b7ad6b7169203331".into(),
            }),
        };

        assert_eq!(RequestContext::from_map(&context.to_map()), Some(context));
        assert_eq!(RequestContext::from_map(&BTreeMap::new()), None);
    }

    #[test]
    fn trace_context_rebuilds_remote_span_context() {
        let trace = TraceContext {
            trace_id: "0af7651916cd43dd8448eb211c80319c".into(),
            parent_span_id: "b7ad6b7169203331".into(),
        };
        let span_context = trace.span_context().unwrap();
        assert!(span_context.is_valid());
        assert!(span_context.is_remote());
        assert_eq!(format!("{:016x}", span_context.span_id()), "b7ad6b7169203331");

        let garbled = TraceContext {
            trace_id: "zz".into(),
            parent_span_id: "b7ad6b7169203331".into(),
        };
        assert!(garbled.span_context().is_none());
    }

    #[test]
    fn non_success_status_is_http_error() {
        let err = parse_response(404, b"[]").unwrap_err();
        assert!(matches!(err, GazetteError::Http { status: 404, .. }));
        assert_eq!(err.to_string(), "HTTP 404: Not Found");

        assert!(parse_response(500, b"[]").is_err());
        assert!(parse_response(199, b"[]").is_err());
    }

    #[test]
    fn malformed_body_is_json_error() {
        let err = parse_response(200, b"{not json").unwrap_err();
        assert!(matches!(err, GazetteError::Json(_)));
    }

    #[test]
    fn object_body_is_not_an_array() {
        let err = parse_response(200, br#"{"title":"A"}"#).unwrap_err();
        assert!(matches!(err, GazetteError::NotAnArray));
    }

    #[test]
    fn empty_array_is_success() {
        assert!(parse_response(200, b"[]").unwrap().is_empty());
    }

    #[test]
    fn decodes_articles_in_order() {
        let body = br#"[{"title":"A","tags":["news"]},{"title":"B","tags":["sports"]}]"#;
        let articles = parse_response(204, body).unwrap();

        let titles: Vec<_> = articles.iter().map(|a| a.title.as_deref()).collect();
        assert_eq!(titles, vec![Some("A"), Some("B")]);
    }
}
