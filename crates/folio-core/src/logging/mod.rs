//! Structured logging through `tracing`, routed to a pluggable sink.
//!
//! The browser has no stdout, so the shell cannot use
//! `tracing_subscriber::fmt`. Instead [`ConsoleLayer`] turns each event into a
//! [`LogEntry`] and hands it to a [`LogSink`]: the devtools console in the
//! browser, a [`MemorySink`] in tests.
//!
//! ## Usage
//!
//! ```ignore
//! use folio_core::logging::{ConsoleLayer, LogEntry, LogSink};
//! use tracing_subscriber::prelude::*;
//!
//! struct DevtoolsSink;
//!
//! impl LogSink for DevtoolsSink {
//!     fn write(&self, entry: &LogEntry) {
//!         web_sys::console::log_1(&entry.to_line().into());
//!     }
//! }
//!
//! let subscriber = tracing_subscriber::registry()
//!     .with(tracing_subscriber::EnvFilter::new("info"))
//!     .with(ConsoleLayer::new(DevtoolsSink));
//!
//! tracing::subscriber::set_global_default(subscriber)?;
//! ```

pub mod entry;
pub mod layer;

// Re-exports for convenience
pub use entry::{LogEntry, LogLevel};
pub use layer::{ConsoleLayer, LogSink, MemorySink};
