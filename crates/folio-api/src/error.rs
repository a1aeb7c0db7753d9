//! Error types for folio-api

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Result type alias for folio-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while serving requests.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from folio-core / folio-content
    #[error(transparent)]
    Content(#[from] folio_core::Error),

    /// Error from folio-client
    #[error(transparent)]
    Edit(#[from] folio_client::Error),

    /// Malformed request
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Server I/O error (binding, accepting)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Content(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            Error::Content(folio_core::Error::InvalidPath { .. }) => StatusCode::BAD_REQUEST,
            Error::Content(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Edit(_) => StatusCode::BAD_GATEWAY,
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the client.
    ///
    /// Edit failures are reported generically; the detail goes to the log.
    fn public_message(&self) -> String {
        match self {
            Error::Edit(_) => "Failed to transform text".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }
        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        let err: Error = folio_core::Error::not_found("/content/x.md").into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_path_status() {
        let err: Error = folio_core::Error::invalid_path("..", "no").into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_read_failure_status() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = folio_core::Error::read(io, "/content/x.md").into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_edit_failure_is_generic() {
        let err: Error = folio_client::Error::MissingSuggestedEdit.into();
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.public_message(), "Failed to transform text");
    }
}
