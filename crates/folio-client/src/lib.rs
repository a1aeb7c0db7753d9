//! # folio-client
//!
//! Client for the remote text edit service.
//!
//! The service exposes one unary RPC, `edit.EditService/Edit`, that takes
//! a text fragment and answers with a suggested replacement. This crate
//! provides:
//!
//! - [`proto`]: the request/response messages and a thin gRPC stub
//! - [`EditTransport`]: the seam between extraction logic and the wire
//! - [`EditClient`]: `transform(text) -> suggested edit`, failing when the
//!   call fails or the response carries no suggestion
//!
//! There is no retry, timeout override, or circuit breaking; callers decide
//! what to show when a transform fails.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod client;
pub mod error;
pub mod proto;

pub use client::{EditClient, EditTransport, GrpcEditTransport};
pub use error::{Error, Result};
