//! Command-line interface definition.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use folio_core::FolioConfig;

/// Folio - serve a Markdown content root and relay text edits
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Content root directory
    #[arg(long, env = "CONTENT_DIR", global = true)]
    pub content_dir: Option<PathBuf>,

    /// Edit service address (host:port)
    #[arg(long, env = "LLM_SERVICE_URL", global = true)]
    pub edit_service: Option<String>,

    /// HTTP listen address
    #[arg(long, global = true)]
    pub listen: Option<SocketAddr>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Folio subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run the HTTP server
    Serve,
    /// List the content root or one folder
    List {
        /// Folder to list
        folder: Option<String>,
    },
    /// Print a document
    Show {
        /// Document slug
        slug: String,
        /// Folder containing the document
        #[arg(long)]
        folder: Option<String>,
        /// Print rendered HTML instead of JSON
        #[arg(long)]
        html: bool,
    },
    /// Send text to the edit service and print the suggestion
    Transform {
        /// Text to transform
        text: String,
    },
    /// Print the effective configuration
    Config,
}

impl Cli {
    /// Build the effective configuration: file, then environment, then flags.
    pub fn resolve_config(&self) -> folio_core::Result<FolioConfig> {
        let mut config = FolioConfig::load(self.config.as_deref())?.apply_env()?;
        if let Some(root) = &self.content_dir {
            config.content_root = root.clone();
        }
        if let Some(addr) = &self.edit_service {
            config.edit_service_addr = addr.clone();
        }
        if let Some(listen) = self.listen {
            config.listen_addr = listen;
        }
        Ok(config)
    }

    /// The command to run, defaulting to `serve`.
    pub fn effective_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }
}
