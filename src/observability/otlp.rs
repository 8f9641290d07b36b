//! Encoding of finished spans as OTLP/JSON.
//!
//! Every exported batch becomes one JSON document on one line, in the shape
//! OTLP collectors accept for `/v1/traces`:
//!
//! ```json
//! {"resourceSpans":[{"resource":{"attributes":[...]},
//!   "scopeSpans":[{"scope":{"name":"zbooks"},"spans":[...]}]}]}
//! ```
//!
//! IDs are lowercase hex, timestamps are decimal strings of Unix nanoseconds
//! and 64-bit integers are strings, as the OTLP/JSON mapping requires.

use opentelemetry::trace::{Event, Link, SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Value as Json};
use std::time::{SystemTime, UNIX_EPOCH};

/// Instrumentation scope name written on every batch.
pub const SCOPE_NAME: &str = "zbooks";

/// Encodes `batch` under `resource` as a single OTLP/JSON document.
pub fn encode_batch(resource: &Resource, batch: &[SpanData]) -> Json {
    let resource_attributes: Vec<Json> = resource.iter().map(|(key, value)| attribute(key.as_str(), value)).collect();

    json!({
        "resourceSpans": [{
            "resource": { "attributes": resource_attributes },
            "scopeSpans": [{
                "scope": { "name": SCOPE_NAME },
                "spans": batch.iter().map(encode_span).collect::<Vec<_>>(),
            }],
        }],
    })
}

fn encode_span(span: &SpanData) -> Json {
    let parent = if span.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        span.parent_span_id.to_string()
    };
    let (code, message) = status(&span.status);

    json!({
        "traceId": span.span_context.trace_id().to_string(),
        "spanId": span.span_context.span_id().to_string(),
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

fn encode_event(event: &Event) -> Json {
    json!({
        "timeUnixNano": unix_nanos(event.timestamp),
        "name": event.name,
        "attributes": attributes(&event.attributes),
    })
}

fn encode_link(link: &Link) -> Json {
    json!({
        "traceId": link.span_context.trace_id().to_string(),
        "spanId": link.span_context.span_id().to_string(),
        "attributes": attributes(&link.attributes),
    })
}

fn attributes(pairs: &[KeyValue]) -> Vec<Json> {
    pairs.iter().map(|kv| attribute(kv.key.as_str(), &kv.value)).collect()
}

fn attribute(key: &str, value: &Value) -> Json {
    json!({ "key": key, "value": any_value(value) })
}

/// OTLP `AnyValue`. Arrays are flattened to their display string.
pub fn any_value(value: &Value) -> Json {
    match value {
        Value::Bool(b) => json!({ "boolValue": b }),
        Value::I64(i) => json!({ "intValue": i.to_string() }),
        Value::F64(f) => json!({ "doubleValue": f }),
        Value::String(s) => json!({ "stringValue": s.as_str() }),
        Value::Array(_) => json!({ "stringValue": value.to_string() }),
    }
}

/// OTLP `SpanKind` number.
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

/// Nanoseconds since the Unix epoch as a decimal string. Times before the
/// epoch clamp to zero.
pub fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn timestamps_are_nanosecond_strings() {
        let time = UNIX_EPOCH + Duration::from_millis(1_500);
        assert_eq!(unix_nanos(time), "1500000000");
        assert_eq!(unix_nanos(UNIX_EPOCH - Duration::from_secs(1)), "0");
    }

    #[test]
    fn values_follow_the_otlp_json_mapping() {
        assert_eq!(any_value(&Value::I64(42)), json!({ "intValue": "42" }));
        assert_eq!(any_value(&Value::Bool(true)), json!({ "boolValue": true }));
        assert_eq!(any_value(&Value::from("Dune")), json!({ "stringValue": "Dune" }));
    }

    #[test]
    fn empty_batch_still_names_resource_and_scope() {
        let resource = Resource::new(vec![KeyValue::new("service.name", "zbooks")]);
        let doc = encode_batch(&resource, &[]);

        let scope = &doc["resourceSpans"][0]["scopeSpans"][0];
        assert_eq!(scope["scope"]["name"], SCOPE_NAME);
        assert_eq!(scope["spans"], json!([]));

        let attrs = doc["resourceSpans"][0]["resource"]["attributes"].as_array().unwrap();
        assert!(attrs.iter().any(|a| a["key"] == "service.name" && a["value"]["stringValue"] == "zbooks"));
    }
}
