//! Utility modules for slugs, routes, and path resolution.
//!
//! - [`ids`]: Document identifiers and slug formatting
//! - [`resolver`]: Content-root path resolution
//! - [`routes`]: Routable `/markdown/...` paths

pub mod ids;
pub mod resolver;
pub mod routes;
