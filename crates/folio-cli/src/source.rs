//! Content source backed by a local directory.

use std::io::ErrorKind;
use std::path::PathBuf;

use folio_core::{ContentSource, FolioError, FolioResult};

/// Reads fragments relative to a root directory. A missing file behaves like
/// an HTTP 404.
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ContentSource for DirectorySource {
    async fn fetch(&self, path: &str) -> FolioResult<String> {
        match tokio::fs::read_to_string(self.root.join(path)).await {
            Ok(html) => Ok(html),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(FolioError::Fetch {
                path: path.to_string(),
                status: 404,
            }),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_relative_to_root() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("Home.html"), "<h1>Home</h1>").unwrap();
        let source = DirectorySource::new(dir.path());

        assert_eq!(source.fetch("Home.html").await.unwrap(), "<h1>Home</h1>");
        assert!(matches!(
            source.fetch("Task1.html").await,
            Err(FolioError::Fetch { status: 404, .. })
        ));
    }
}
