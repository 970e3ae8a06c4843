//! File-backed OpenTelemetry span exporter.
//!
//! Every exported batch becomes one line of OTLP JSON
//! (`resourceSpans` > `scopeSpans` > `spans`) in a [`RotatingFile`].

use super::rotation::RotatingFile;
use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, SpanKind, Status, TraceError};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use serde_json::{json, Value as JsonValue};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

pub const SCOPE_NAME: &str = "RecipeExplorer";

struct FileSpanExporter {
    file: RotatingFile,
    resource: Resource,
    is_shutdown: bool,
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.is_shutdown {
            Err(TraceError::from("exporter is shut down"))
        } else {
            let line = otlp_document(&self.resource, &batch).to_string();
            self.file
                .write_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))
        };
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.resource = resource.clone();
    }
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("file", &self.file)
            .field("is_shutdown", &self.is_shutdown)
            .finish_non_exhaustive()
    }
}

/// Tracer provider that exports each span synchronously to `file_path`.
pub fn create_tracer_provider(file_path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter {
        file: RotatingFile::new(file_path),
        resource: resource.clone(),
        is_shutdown: false,
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

fn otlp_document(resource: &Resource, batch: &[SpanData]) -> JsonValue {
    let resource_attributes: Vec<JsonValue> = resource
        .iter()
        .map(|(key, value)| json!({ "key": key.to_string(), "value": otlp_value(value) }))
        .collect();

    json!({
        "resourceSpans": [{
            "resource": { "attributes": resource_attributes },
            "scopeSpans": [{
                "scope": { "name": SCOPE_NAME },
                "spans": batch.iter().map(otlp_span).collect::<Vec<_>>(),
            }],
        }],
    })
}

fn otlp_span(span: &SpanData) -> JsonValue {
    let parent = if span.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };
    let (code, message) = match &span.status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    };
    let kind = match span.span_kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    };

    json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent,
        "name": span.name,
        "kind": kind,
        "startTimeUnixNano": unix_nanos(span.start_time),
        "endTimeUnixNano": unix_nanos(span.end_time),
        "attributes": otlp_attributes(&span.attributes),
        "events": span.events.iter().map(|event| json!({
            "timeUnixNano": unix_nanos(event.timestamp),
            "name": event.name,
            "attributes": otlp_attributes(&event.attributes),
        })).collect::<Vec<_>>(),
        "links": span.links.iter().map(|link| json!({
            "traceId": format!("{:032x}", link.span_context.trace_id()),
            "spanId": format!("{:016x}", link.span_context.span_id()),
            "attributes": otlp_attributes(&link.attributes),
        })).collect::<Vec<_>>(),
        "status": { "code": code, "message": message },
    })
}

fn otlp_attributes(attributes: &[KeyValue]) -> Vec<JsonValue> {
    attributes
        .iter()
        .map(|kv| json!({ "key": kv.key.to_string(), "value": otlp_value(&kv.value) }))
        .collect()
}

/// OTLP encodes 64-bit integers as strings.
fn otlp_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!({ "boolValue": b }),
        Value::I64(i) => json!({ "intValue": i.to_string() }),
        Value::F64(f) => json!({ "doubleValue": f }),
        Value::String(s) => json!({ "stringValue": s.to_string() }),
        Value::Array(_) => json!({ "stringValue": format!("{value:?}") }),
    }
}

fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_use_otlp_shapes() {
        assert_eq!(otlp_value(&Value::I64(42)), json!({ "intValue": "42" }));
        assert_eq!(otlp_value(&Value::Bool(true)), json!({ "boolValue": true }));
        assert_eq!(
            otlp_value(&Value::String("grid".into())),
            json!({ "stringValue": "grid" })
        );
    }

    #[test]
    fn empty_batch_still_names_resource_and_scope() {
        let resource = Resource::new(vec![KeyValue::new("service.name", SCOPE_NAME)]);
        let doc = otlp_document(&resource, &[]);

        let resource_span = &doc["resourceSpans"][0];
        assert_eq!(resource_span["scopeSpans"][0]["scope"]["name"], SCOPE_NAME);
        assert!(resource_span["resource"]["attributes"]
            .as_array()
            .unwrap()
            .iter()
            .any(|attr| attr["key"] == "service.name"));
        assert_eq!(resource_span["scopeSpans"][0]["spans"], json!([]));
    }
}
