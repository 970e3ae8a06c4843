//! Tracing export to a local OTLP JSON file.
//!
//! ```text
//! tracing spans -> tracing-opentelemetry -> FileSpanExporter -> RotatingFile
//! ```
//!
//! The plugin sandbox has no network, so spans are written as OTLP JSON lines
//! under the plugin data directory and rotated at 10 MB, keeping three
//! backups. The level comes from the `trace_level` option (default `info`).

mod exporter;
mod init;
mod rotation;

pub use init::{init_tracing, TRACE_FILE_NAME};
