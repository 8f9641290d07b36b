//! Span exporter that appends OTLP/JSON documents to a local file.
//!
//! Zellij plugins cannot open network connections, so spans go to disk and
//! can be replayed into a collector later.

use super::otlp;
use super::rotating::RotatingFile;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::future;
use std::path::PathBuf;

#[derive(Debug)]
struct JsonFileExporter {
    file: RotatingFile,
    resource: Resource,
    shut_down: bool,
}

impl SpanExporter for JsonFileExporter {
    /// Writes the batch as one line.
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.shut_down {
            return Box::pin(future::ready(Err(TraceError::from("exporter is shut down"))));
        }

        let line = otlp::encode_batch(&self.resource, &batch).to_string();
        let result = self
            .file
            .write_line(&line)
            .map_err(|e| TraceError::from(e.to_string()));
        Box::pin(future::ready(result))
    }

    fn shutdown(&mut self) {
        self.shut_down = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.resource = resource.clone();
    }
}

/// Builds a provider that exports every span synchronously to `path`.
pub fn file_tracer_provider(path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = JsonFileExporter {
        file: RotatingFile::new(path),
        resource: resource.clone(),
        shut_down: false,
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::trace::{Tracer as _, TracerProvider as _};
    use opentelemetry::KeyValue;

    #[test]
    fn finished_spans_land_in_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zbooks-otlp.json");
        let resource = Resource::new(vec![KeyValue::new("service.name", "zbooks")]);

        let provider = file_tracer_provider(path.clone(), resource);
        provider.tracer("zbooks").in_span("store_add", |_cx| {});
        drop(provider);

        let contents = std::fs::read_to_string(path).unwrap();
        let doc: serde_json::Value = serde_json::from_str(contents.lines().next().unwrap()).unwrap();
        let span = &doc["resourceSpans"][0]["scopeSpans"][0]["spans"][0];
        assert_eq!(span["name"], "store_add");
        assert_eq!(span["parentSpanId"], "");
    }
}
