//! OTLP JSON encoding for exported spans.
//!
//! Each export batch becomes one `resourceSpans` document, written as a single
//! line. Field names and value encodings follow the OTLP/JSON mapping, so the
//! file can be replayed into any collector that accepts it.

use super::SERVICE_NAME;
use opentelemetry::trace::{Event, Link, SpanId, SpanKind, Status};
use opentelemetry::{Array, KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Value as JsonValue};
use std::time::{Duration, SystemTime};

/// Encodes span batches under a fixed resource.
pub struct SpanFormatter {
    resource: Resource,
}

impl SpanFormatter {
    pub const fn new(resource: Resource) -> Self {
        Self { resource }
    }

    /// Builds the OTLP document for one batch.
    ///
    /// ```json
    /// {"resourceSpans": [{
    ///   "resource": {"attributes": [{"key": "service.name", "value": {"stringValue": "Gazette"}}]},
    ///   "scopeSpans": [{"scope": {"name": "Gazette"}, "spans": [...]}]
    /// }]}
    /// ```
    pub fn format_batch(&self, batch: &[SpanData]) -> JsonValue {
        let resource: Vec<JsonValue> = self
            .resource
            .iter()
            .map(|(key, value)| attribute(key.as_str(), value))
            .collect();
        let spans: Vec<JsonValue> = batch.iter().map(encode_span).collect();

        json!({
            "resourceSpans": [{
                "resource": { "attributes": resource },
                "scopeSpans": [{
                    "scope": { "name": SERVICE_NAME },
                    "spans": spans,
                }],
            }],
        })
    }
}

impl std::fmt::Debug for SpanFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpanFormatter").finish_non_exhaustive()
    }
}

fn encode_span(span: &SpanData) -> JsonValue {
    let (code, message) = status(&span.status);
    let parent = if span.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };

    json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent,
        "name": span.name,
        "kind": kind(&span.span_kind),
        "startTimeUnixNano": unix_nanos(span.start_time),
        "endTimeUnixNano": unix_nanos(span.end_time),
        "attributes": attributes(&span.attributes),
        "events": span.events.iter().map(encode_event).collect::<Vec<_>>(),
        "links": span.links.iter().map(encode_link).collect::<Vec<_>>(),
        "status": { "code": code, "message": message },
    })
}

fn encode_event(event: &Event) -> JsonValue {
    json!({
        "timeUnixNano": unix_nanos(event.timestamp),
        "name": event.name,
        "attributes": attributes(&event.attributes),
    })
}

// The response span links back to the span that issued the feed request.
fn encode_link(link: &Link) -> JsonValue {
    json!({
        "traceId": format!("{:032x}", link.span_context.trace_id()),
        "spanId": format!("{:016x}", link.span_context.span_id()),
        "attributes": attributes(&link.attributes),
    })
}

/// OTLP `SpanKind` numbering; 0 (unspecified) is never produced.
const fn kind(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

fn status(status: &Status) -> (u8, String) {
    match status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    }
}

fn attributes(pairs: &[KeyValue]) -> Vec<JsonValue> {
    pairs
        .iter()
        .map(|kv| attribute(kv.key.as_str(), &kv.value))
        .collect()
}

fn attribute(key: &str, value: &Value) -> JsonValue {
    json!({ "key": key, "value": any_value(value) })
}

/// OTLP `AnyValue`. 64-bit integers are strings in OTLP/JSON.
fn any_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!({ "boolValue": b }),
        Value::I64(i) => json!({ "intValue": i.to_string() }),
        Value::F64(f) => json!({ "doubleValue": f }),
        Value::String(s) => json!({ "stringValue": s.as_str() }),
        Value::Array(array) => json!({ "arrayValue": { "values": array_values(array) } }),
    }
}

fn array_values(array: &Array) -> Vec<JsonValue> {
    match array {
        Array::Bool(items) => items.iter().map(|b| any_value(&Value::Bool(*b))).collect(),
        Array::I64(items) => items.iter().map(|i| any_value(&Value::I64(*i))).collect(),
        Array::F64(items) => items.iter().map(|f| any_value(&Value::F64(*f))).collect(),
        Array::String(items) => items
            .iter()
            .map(|s| json!({ "stringValue": s.as_str() }))
            .collect(),
    }
}

/// Nanoseconds since the Unix epoch, as the decimal string OTLP JSON expects.
fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_nanos()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_carries_resource_and_scope() {
        let formatter = SpanFormatter::new(Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]));
        let json = formatter.format_batch(&[]);

        let resource_span = &json["resourceSpans"][0];
        let attributes = resource_span["resource"]["attributes"].as_array().unwrap();
        assert!(attributes.iter().any(|a| a["key"] == "service.name"
            && a["value"]["stringValue"] == SERVICE_NAME));
        assert_eq!(resource_span["scopeSpans"][0]["scope"]["name"], SERVICE_NAME);
        assert_eq!(resource_span["scopeSpans"][0]["spans"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn scalar_values_use_otlp_keys() {
        assert_eq!(any_value(&Value::I64(42)), json!({ "intValue": "42" }));
        assert_eq!(any_value(&Value::from("ok")), json!({ "stringValue": "ok" }));
    }

    #[test]
    fn arrays_become_array_values() {
        let value = Value::Array(vec![1_i64, 2].into());
        assert_eq!(
            any_value(&value),
            json!({ "arrayValue": { "values": [{ "intValue": "1" }, { "intValue": "2" }] } })
        );
    }

    #[test]
    fn every_array_kind_is_encoded() {
        let strings = Value::Array(vec![opentelemetry::StringValue::from("a"), "b".into()].into());
        assert_eq!(
            any_value(&strings),
            json!({ "arrayValue": { "values": [{ "stringValue": "a" }, { "stringValue": "b" }] } })
        );

        let flags = Value::Array(vec![true].into());
        assert_eq!(any_value(&flags), json!({ "arrayValue": { "values": [{ "boolValue": true }] } }));
    }

    #[test]
    fn error_status_keeps_description() {
        assert_eq!(status(&Status::error("feed unreachable")), (2, "feed unreachable".to_string()));
        assert_eq!(status(&Status::Unset), (0, String::new()));
    }

    #[test]
    fn epoch_is_zero_nanos() {
        assert_eq!(unix_nanos(SystemTime::UNIX_EPOCH), "0");
    }
}
