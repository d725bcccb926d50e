//! Log entry type shared by every sink.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<&tracing::Level> for LogLevel {
    fn from(level: &tracing::Level) -> Self {
        match *level {
            tracing::Level::TRACE => LogLevel::Trace,
            tracing::Level::DEBUG => LogLevel::Debug,
            tracing::Level::INFO => LogLevel::Info,
            tracing::Level::WARN => LogLevel::Warn,
            tracing::Level::ERROR => LogLevel::Error,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        };
        f.write_str(s)
    }
}

/// One captured `tracing` event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,

    /// Module path / target (e.g., "folio_core::render")
    pub target: String,

    /// Human-readable message
    pub msg: String,

    /// Structured fields recorded alongside the message
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub fields: serde_json::Map<String, Value>,

    /// Enclosing span names, root first, joined with " > "
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<String>,
}

impl LogEntry {
    pub fn new(level: LogLevel, target: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            level,
            target: target.into(),
            msg: msg.into(),
            fields: serde_json::Map::new(),
            span: None,
        }
    }

    pub fn with_fields(mut self, fields: serde_json::Map<String, Value>) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_span(mut self, span: impl Into<String>) -> Self {
        self.span = Some(span.into());
        self
    }

    /// Single human-readable line: `LEVEL target: msg key=value …`.
    pub fn to_line(&self) -> String {
        let mut line = format!("{} {}: {}", self.level, self.target, self.msg);
        if let Some(span) = &self.span {
            line.push_str(&format!(" [{}]", span));
        }
        for (key, value) in &self.fields {
            match value {
                Value::String(s) => line.push_str(&format!(" {}={}", key, s)),
                other => line.push_str(&format!(" {}={}", key, other)),
            }
        }
        line
    }

    /// Serialize to a single JSON line (no trailing newline).
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_line() {
        let mut fields = serde_json::Map::new();
        fields.insert("page".to_string(), Value::String("task2".to_string()));
        fields.insert("bytes".to_string(), Value::Number(512.into()));

        let entry = LogEntry::new(LogLevel::Info, "folio_core::render", "Rendered page")
            .with_fields(fields)
            .with_span("navigate");

        assert_eq!(
            entry.to_line(),
            "INFO folio_core::render: Rendered page [navigate] bytes=512 page=task2"
        );
    }

    #[test]
    fn test_json_skips_empty_fields() {
        let entry = LogEntry::new(LogLevel::Warn, "folio", "hello");
        let json = entry.to_json_line().unwrap();
        assert_eq!(json, r#"{"level":"warn","target":"folio","msg":"hello"}"#);
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Error > LogLevel::Warn);
        assert_eq!(LogLevel::from(&tracing::Level::DEBUG), LogLevel::Debug);
    }
}
