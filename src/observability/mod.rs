//! OpenTelemetry tracing with file-based span export.
//!
//! `tracing` spans and events are bridged into OpenTelemetry and written as
//! OTLP/JSON lines to a local file, since the plugin sandbox has no network:
//!
//! ```text
//! tracing → tracing-opentelemetry → SimpleSpanProcessor → JsonFileExporter → RotatingFile
//! ```
//!
//! The trace file lives at `~/.local/share/zellij/zbooks/zbooks-otlp.json`,
//! rolls over at 4 MiB and keeps two backups.
//!
//! # Configuration
//!
//! The `trace_level` plugin option takes an `EnvFilter` directive such as
//! `debug` or `zbooks=trace`. Default: `info`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - `exporter`: `SpanExporter` implementation and provider construction
//! - `otlp`: OTLP/JSON encoding of span batches
//! - `rotating`: Size-limited trace file

mod exporter;
pub mod init;
mod otlp;
mod rotating;

pub use init::{init_tracing, TRACE_FILE};
pub use rotating::RotatingFile;
