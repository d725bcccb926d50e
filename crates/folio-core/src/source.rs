//! Where fragment text comes from.

use std::collections::HashMap;

use crate::error::{FolioError, FolioResult};

/// Retrieves fragment text by relative path.
///
/// A non-success response must surface as [`FolioError::Fetch`]; bootstrap
/// turns any error into an empty cache entry.
#[allow(async_fn_in_trait)]
pub trait ContentSource {
    async fn fetch(&self, path: &str) -> FolioResult<String>;
}

/// Fixed in-memory source. Unknown paths answer 404.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<String>, html: impl Into<String>) -> Self {
        self.files.insert(path.into(), html.into());
        self
    }
}

impl ContentSource for MemorySource {
    async fn fetch(&self, path: &str) -> FolioResult<String> {
        self.files.get(path).cloned().ok_or_else(|| FolioError::Fetch {
            path: path.to_string(),
            status: 404,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_source() {
        let source = MemorySource::new().with_file("Home.html", "<p>hi</p>");
        assert_eq!(source.fetch("Home.html").await.unwrap(), "<p>hi</p>");

        let err = source.fetch("Task1.html").await.unwrap_err();
        assert!(matches!(err, FolioError::Fetch { status: 404, .. }));
    }
}
