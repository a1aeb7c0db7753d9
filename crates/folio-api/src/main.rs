//! Folio
//!
//! Serves a Markdown content root over HTTP and relays text to the remote
//! edit service.

#![forbid(unsafe_code)]

use anyhow::{Context, Result, bail};
use clap::Parser;
use folio_api::Server;
use folio_api::cli::{Cli, Command};
use folio_client::EditClient;
use folio_content::ContentAccessor;
use folio_core::DocumentId;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info,folio=debug" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    let config = cli.resolve_config().context("Failed to load configuration")?;

    match cli.effective_command() {
        Command::Serve => {
            Server::new(config)?.run().await?;
        }
        Command::List { folder } => {
            let accessor = ContentAccessor::from_config(&config);
            let entries = match folder {
                Some(folder) => accessor.list_folder(&folder).await?,
                None => accessor.list_root().await?,
            };
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        Command::Show { slug, folder, html } => {
            let accessor = ContentAccessor::from_config(&config);
            let id = DocumentId { slug, folder };
            let Some(document) = accessor.get_document(&id).await? else {
                bail!("Document not found: {id}");
            };
            if html {
                print!("{}", accessor.render_html(&document));
            } else {
                println!("{}", serde_json::to_string_pretty(&document)?);
            }
        }
        Command::Transform { text } => {
            let client = EditClient::from_config(&config)?;
            match client.transform(&text).await {
                Ok(transformed) => println!("{transformed}"),
                Err(e) => {
                    tracing::error!(error = %e, "Error transforming text");
                    return Err(e.into());
                }
            }
        }
        Command::Config => {
            print!("{}", config.to_toml_string()?);
        }
    }

    Ok(())
}
