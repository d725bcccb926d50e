//! Browser logger: `tracing` events to the devtools console.

use folio_core::logging::{ConsoleLayer, LogEntry, LogLevel, LogSink};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use wasm_bindgen::JsValue;
use web_sys::console;

struct DevtoolsSink;

impl LogSink for DevtoolsSink {
    fn write(&self, entry: &LogEntry) {
        let line = JsValue::from_str(&entry.to_line());
        match entry.level {
            LogLevel::Error => console::error_1(&line),
            LogLevel::Warn => console::warn_1(&line),
            LogLevel::Info => console::info_1(&line),
            LogLevel::Debug | LogLevel::Trace => console::debug_1(&line),
        }
    }
}

/// Install the global subscriber. `filter` uses `EnvFilter` syntax.
pub fn init(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(ConsoleLayer::new(DevtoolsSink));

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        console::warn_1(&JsValue::from_str("Folio: a tracing subscriber was already installed"));
    }
}
