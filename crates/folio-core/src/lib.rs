//! Folio Core: shared types, configuration, errors, and path resolution.
//!
//! This crate provides the foundational types used across all Folio crates.
//! It has no internal Folio dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`config`]: Process configuration
//! - [`error`]: Error types and Result alias
//! - [`util`]: Slug, route, and path utilities

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use config::FolioConfig;
pub use error::{Error, Result};

// Convenience re-exports from util
pub use util::ids::{DocumentId, format_slug};
pub use util::resolver::{DocumentResolver, path_exists};
pub use util::routes::{document_route, folder_route};
