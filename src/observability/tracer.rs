//! Custom OpenTelemetry tracer provider with file-based span export.
//!
//! This module implements a custom `SpanExporter` that writes spans to a
//! rotating JSON file instead of sending them over the network. The plugin
//! sandbox has no collector to talk to, so traces are analysed offline.

use super::file_writer::{FileWriter, RotationPolicy};
use super::span_formatter::SpanFormatter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// File-based OpenTelemetry span exporter.
///
/// Implements the `SpanExporter` trait to write spans to a rotating file in
/// OTLP JSON format. Spans are formatted into complete OTLP batches with
/// resource attributes and scope information.
struct FileSpanExporter {
    /// File writer with rotation support.
    writer: FileWriter,
    /// OTLP JSON formatter.
    formatter: SpanFormatter,
    /// Shutdown flag (prevents export after shutdown).
    is_shutdown: AtomicBool,
}

impl FileSpanExporter {
    /// Creates a new file-based span exporter.
    ///
    /// # Parameters
    ///
    /// * `file_path` - Path to the JSON trace file
    /// * `resource` - OpenTelemetry resource metadata (service name, etc.)
    /// * `policy` - When to rotate the file and how many backups to keep
    const fn new(file_path: PathBuf, resource: Resource, policy: RotationPolicy) -> Self {
        Self {
            writer: FileWriter::new(file_path, policy),
            formatter: SpanFormatter::new(resource),
            is_shutdown: AtomicBool::new(false),
        }
    }
}

impl SpanExporter for FileSpanExporter {
    /// Exports a batch of spans to the file.
    ///
    /// Formats the batch as OTLP JSON and writes it as a single line to the
    /// file. Each line is a complete OTLP JSON document with `resourceSpans`,
    /// `scopeSpans`, and `spans` arrays.
    ///
    /// # Parameters
    ///
    /// * `batch` - Batch of span data to export
    ///
    /// # Returns
    ///
    /// - `Ok(())` if spans were written successfully
    /// - `Err(TraceError)` if the exporter is shut down or write fails
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Box::pin(std::future::ready(Err(TraceError::from(
                "exporter is shut down",
            ))));
        }

        let json = self.formatter.format_batch(&batch);
        let json_string = json.to_string();

        match self.writer.write_line(&json_string) {
            Ok(()) => Box::pin(std::future::ready(Ok(()))),
            Err(e) => Box::pin(std::future::ready(Err(TraceError::from(e.to_string())))),
        }
    }

    /// Shuts down the exporter.
    ///
    /// Sets the shutdown flag to prevent further exports. Does not flush or
    /// close the file (handled by Drop).
    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    /// No-op: the resource is fixed at construction.
    fn set_resource(&mut self, res: &Resource) {
        let _ = res;
    }
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("writer", &self.writer)
            .field("formatter", &self.formatter)
            .field("is_shutdown", &self.is_shutdown)
            .finish()
    }
}

/// Creates a tracer provider with file-based export.
///
/// Spans are exported one at a time as they end (simple exporter); the
/// plugin runtime has no background thread for a batch processor.
///
/// # Parameters
///
/// * `file_path` - Path to the JSON trace file
/// * `resource` - OpenTelemetry resource metadata
/// * `policy` - Rotation policy for the trace file
pub fn create_tracer_provider(
    file_path: PathBuf,
    resource: Resource,
    policy: RotationPolicy,
) -> TracerProvider {
    let exporter = FileSpanExporter::new(file_path, resource.clone(), policy);

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::trace::{Span as _, Tracer as _, TracerProvider as _};
    use opentelemetry::KeyValue;

    #[test]
    fn ended_spans_are_written_as_otlp_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gazette-otlp.json");
        let resource = Resource::new(vec![KeyValue::new("service.name", super::super::SERVICE_NAME)]);
        let provider = create_tracer_provider(path.clone(), resource, RotationPolicy::default());

        let mut span = provider.tracer("test").start("load_articles");
        span.set_attribute(KeyValue::new("article_count", 3_i64));
        span.end();

        let written = std::fs::read_to_string(&path).unwrap();
        let line: serde_json::Value = serde_json::from_str(written.lines().next().unwrap()).unwrap();
        let span = &line["resourceSpans"][0]["scopeSpans"][0]["spans"][0];
        assert_eq!(span["name"], "load_articles");
        assert_eq!(span["attributes"][0]["value"]["intValue"], "3");
    }
}
