//! Error types for folio-client

use thiserror::Error;

/// Result type alias for folio-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when calling the edit service.
///
/// A failed call and a successful call with nothing in it are separate
/// variants so callers can tell them apart without string matching.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The configured service address is not a valid URI.
    #[error("Invalid edit service address '{addr}': {source}")]
    InvalidAddress {
        /// Address as configured
        addr: String,
        /// Underlying parse error
        #[source]
        source: tonic::transport::Error,
    },

    /// The RPC itself failed (connection, transport, or service status).
    #[error("Edit service call failed: {0}")]
    Rpc(Box<tonic::Status>),

    /// The call succeeded but the response had no suggested edit.
    #[error("No suggested edit received")]
    MissingSuggestedEdit,
}

impl From<tonic::Status> for Error {
    fn from(status: tonic::Status) -> Self {
        Error::Rpc(Box::new(status))
    }
}

impl Error {
    /// The gRPC status code, for RPC failures.
    pub fn code(&self) -> Option<tonic::Code> {
        match self {
            Error::Rpc(status) => Some(status.code()),
            _ => None,
        }
    }
}
