//! Error types for folio-core

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for folio-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving and reading content.
///
/// Frontmatter problems and unreadable directory listings never show up
/// here: those degrade to empty values at the call site.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Filesystem error not tied to a specific document read.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path involved in the failed operation
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A document existed at check time but could not be read or decoded.
    #[error("Failed to read markdown file {}: {source}", path.display())]
    Read {
        /// Path of the document
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The requested document or folder does not exist.
    #[error("Not found: {}", path.display())]
    NotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// A slug or folder name would resolve outside the content root.
    #[error("Invalid path component '{component}': {reason}")]
    InvalidPath {
        /// The offending slug or folder name
        component: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

impl Error {
    /// Creates an I/O error carrying the path it occurred at.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a read failure for a document.
    pub fn read(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Read {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a not-found error.
    pub fn not_found(path: impl AsRef<Path>) -> Self {
        Error::NotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Creates an invalid path component error.
    pub fn invalid_path<S: Into<String>>(component: S, reason: &'static str) -> Self {
        Error::InvalidPath {
            component: component.into(),
            reason,
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Returns whether this error means "absent" rather than "broken".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = Error::not_found("/content/missing.md");
        assert_eq!(err.to_string(), "Not found: /content/missing.md");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_read_error_is_not_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::read(io, "/content/secret.md");
        assert!(!err.is_not_found());
        assert!(err.to_string().starts_with("Failed to read markdown file /content/secret.md"));
    }

    #[test]
    fn test_invalid_path_display() {
        let err = Error::invalid_path("..", "must not reference a parent directory");
        assert_eq!(
            err.to_string(),
            "Invalid path component '..': must not reference a parent directory"
        );
    }

    #[test]
    fn test_config_error() {
        let err = Error::config("bad listen address");
        assert_eq!(err.to_string(), "Configuration error: bad listen address");
    }

    #[test]
    fn test_error_implements_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
