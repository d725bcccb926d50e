//! Error types for Folio

use thiserror::Error;

/// Main error type for Folio operations.
///
/// Nothing here is fatal to the site: callers log the error and degrade the
/// one feature that needed the failed operation.
#[derive(Error, Debug)]
pub enum FolioError {
    /// Content source answered with a non-success status
    #[error("Fetch of {path} failed with status {status}")]
    Fetch { path: String, status: u16 },

    /// Content source could not be reached at all
    #[error("Network error fetching {path}: {message}")]
    Network { path: String, message: String },

    /// Preference storage unavailable or rejected the write
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration document could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FolioError::Fetch {
            path: "Task1.html".to_string(),
            status: 404,
        };
        assert_eq!(format!("{}", err), "Fetch of Task1.html failed with status 404");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FolioError = io_err.into();
        assert!(matches!(err, FolioError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: FolioError = json_err.into();
        assert!(matches!(err, FolioError::Config(_)));
    }
}
