//! API server implementation

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use folio_client::EditClient;
use folio_content::ContentAccessor;
use folio_core::FolioConfig;
use tokio::net::TcpListener;

use crate::Result;
use crate::routes;

/// State shared by all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Content root access
    pub accessor: ContentAccessor,
    /// Remote edit service client
    pub editor: EditClient,
}

/// Folio HTTP server
#[derive(Debug)]
pub struct Server {
    config: FolioConfig,
    state: Arc<AppState>,
}

impl Server {
    /// Create a server from configuration.
    ///
    /// The edit service connection is lazy, so this succeeds even when the
    /// service is down. Must be called from within a Tokio runtime.
    pub fn new(config: FolioConfig) -> Result<Self> {
        let state = AppState {
            accessor: ContentAccessor::from_config(&config),
            editor: EditClient::from_config(&config)?,
        };
        Ok(Self::with_state(config, state))
    }

    /// Create a server with pre-built state.
    pub fn with_state(config: FolioConfig, state: AppState) -> Self {
        Self {
            config,
            state: Arc::new(state),
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(routes::health))
            .route("/markdown", get(routes::list_root))
            .route("/markdown/{slug}", get(routes::get_document))
            .route("/markdown/folder/{folder}", get(routes::list_folder))
            .route("/markdown/folder/{folder}/{slug}", get(routes::get_folder_document))
            .route("/api/transform", post(routes::transform))
            .route("/api/edit", post(routes::transform))
            .with_state(Arc::clone(&self.state))
    }

    /// Bind the configured address and serve until Ctrl-C.
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(self.config.listen_addr).await?;
        tracing::info!(
            addr = %self.config.listen_addr,
            content_root = %self.config.content_root.display(),
            edit_service = %self.config.edit_service_addr,
            "Folio server listening"
        );
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        tracing::info!("Folio server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
