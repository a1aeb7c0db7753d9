//! Process configuration.
//!
//! [`FolioConfig`] is built once at startup and handed to every component
//! that needs it. Values come from three layers, later ones winning:
//!
//! 1. Built-in defaults
//! 2. An optional TOML file
//! 3. Environment variables (`CONTENT_DIR`, `LLM_SERVICE_URL`, `FOLIO_LISTEN_ADDR`)
//!
//! ```rust
//! use folio_core::FolioConfig;
//!
//! let config = FolioConfig::from_toml_str("content_root = \"/srv/wiki\"").unwrap();
//! assert_eq!(config.content_root, std::path::PathBuf::from("/srv/wiki"));
//! assert_eq!(config.edit_service_addr, "localhost:50051");
//! ```

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Environment variable naming the content root.
pub const ENV_CONTENT_DIR: &str = "CONTENT_DIR";
/// Environment variable naming the edit service address.
pub const ENV_EDIT_SERVICE: &str = "LLM_SERVICE_URL";
/// Environment variable naming the HTTP listen address.
pub const ENV_LISTEN_ADDR: &str = "FOLIO_LISTEN_ADDR";

/// Default content root.
pub const DEFAULT_CONTENT_ROOT: &str = "/content";
/// Default document extension (without the leading dot).
pub const DEFAULT_EXTENSION: &str = "md";
/// Default edit service address.
pub const DEFAULT_EDIT_SERVICE_ADDR: &str = "localhost:50051";
/// Default HTTP listen address.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

/// Configuration shared by the content layer, edit client, and server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Directory all documents and folders are resolved under.
    pub content_root: PathBuf,
    /// Extension identifying documents, without the leading dot.
    pub document_extension: String,
    /// `host:port` of the remote edit service.
    pub edit_service_addr: String,
    /// Address the HTTP server binds to.
    pub listen_addr: SocketAddr,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            content_root: PathBuf::from(DEFAULT_CONTENT_ROOT),
            document_extension: DEFAULT_EXTENSION.to_string(),
            edit_service_addr: DEFAULT_EDIT_SERVICE_ADDR.to_string(),
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
        }
    }
}

impl FolioConfig {
    /// Parse configuration from TOML text. Missing keys take defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("Failed to parse config: {e}")))
    }

    /// Load configuration from a TOML file, or defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Overlay values from the process environment.
    pub fn apply_env(self) -> Result<Self> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Overlay values from an arbitrary variable lookup.
    ///
    /// Empty values are ignored, matching how an unset variable behaves.
    pub fn apply_env_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(root) = get(ENV_CONTENT_DIR) {
            self.content_root = PathBuf::from(root);
        }
        if let Some(addr) = get(ENV_EDIT_SERVICE) {
            self.edit_service_addr = addr;
        }
        if let Some(listen) = get(ENV_LISTEN_ADDR) {
            self.listen_addr = listen.parse().map_err(|e| {
                Error::config(format!("Invalid {ENV_LISTEN_ADDR} '{listen}': {e}"))
            })?;
        }
        Ok(self)
    }

    /// Serialize the configuration as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}
