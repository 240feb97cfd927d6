//! OpenTelemetry-based observability with file-based trace export.
//!
//! This module provides tracing infrastructure for the plugin, using the
//! OpenTelemetry OTLP format with file-based exporting. Traces are written to
//! JSON files for offline analysis and debugging.
//!
//! # Architecture
//!
//! ```text
//! tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON Files
//! ```
//!
//! # Features
//!
//! - **File-Based Export**: Traces written to `~/.local/share/zellij/gazette/gazette-otlp.json`
//! - **Automatic Rotation**: Size limit and backup count come from plugin configuration
//! - **OTLP Format**: Standard OpenTelemetry Protocol JSON format
//! - **Resource Metadata**: Includes the service name
//!
//! # Configuration
//!
//! - `trace_level`: `EnvFilter` directive, default `"info"`
//! - `trace_max_mb`: rotation threshold in MiB, default 10
//! - `trace_backups`: rotated files kept, default 3
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`tracer`]: Custom OpenTelemetry tracer provider with file export
//! - [`span_formatter`]: OTLP JSON span serialization
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use file_writer::RotationPolicy;
pub use init::init_tracing;

/// `service.name` resource attribute and instrumentation scope.
pub const SERVICE_NAME: &str = "Gazette";

/// Trace file name inside the data directory.
pub const TRACE_FILE_NAME: &str = "gazette-otlp.json";
