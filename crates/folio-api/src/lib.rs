//! # folio-api
//!
//! HTTP surface for Folio.
//!
//! - `GET /markdown`, `GET /markdown/folder/{folder}`: listings
//! - `GET /markdown/{slug}`, `GET /markdown/folder/{folder}/{slug}`: documents
//! - `POST /api/transform`, `POST /api/edit`: relay text to the edit service
//!
//! Handlers are thin: content comes from [`folio_content::ContentAccessor`]
//! and edits from [`folio_client::EditClient`]. Errors map to HTTP status
//! codes in [`error`].

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod error;
pub mod routes;
pub mod server;

pub use error::{Error, Result};
pub use server::{AppState, Server};
