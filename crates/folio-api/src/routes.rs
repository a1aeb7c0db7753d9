//! Route handlers.
//!
//! Listings and documents are returned as JSON. A document response is the
//! resolved document plus its rendered `html`.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use folio_content::{DirectoryEntry, ResolvedDocument};
use folio_core::DocumentId;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::server::AppState;
use crate::{Error, Result};

/// Body of a transform request.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransformRequest {
    /// Text to send to the edit service.
    pub text: String,
}

/// Body of a successful transform response.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformResponse {
    /// Suggested replacement text.
    pub transformed_text: String,
}

/// A document with its rendered body.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentResponse {
    /// The resolved document.
    #[serde(flatten)]
    pub document: ResolvedDocument,
    /// Body rendered to HTML.
    pub html: String,
}

/// `GET /health`
pub async fn health() -> &'static str {
    "ok"
}

/// `GET /markdown`
#[instrument(skip(state))]
pub async fn list_root(State(state): State<Arc<AppState>>) -> Result<Json<Vec<DirectoryEntry>>> {
    Ok(Json(state.accessor.list_root().await?))
}

/// `GET /markdown/folder/{folder}`
#[instrument(skip(state))]
pub async fn list_folder(
    State(state): State<Arc<AppState>>,
    Path(folder): Path<String>,
) -> Result<Json<Vec<DirectoryEntry>>> {
    Ok(Json(state.accessor.list_folder(&folder).await?))
}

/// `GET /markdown/{slug}`
#[instrument(skip(state))]
pub async fn get_document(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<DocumentResponse>> {
    load_document(&state, DocumentId::new(slug)).await
}

/// `GET /markdown/folder/{folder}/{slug}`
#[instrument(skip(state))]
pub async fn get_folder_document(
    State(state): State<Arc<AppState>>,
    Path((folder, slug)): Path<(String, String)>,
) -> Result<Json<DocumentResponse>> {
    load_document(&state, DocumentId::in_folder(slug, folder)).await
}

async fn load_document(state: &AppState, id: DocumentId) -> Result<Json<DocumentResponse>> {
    let document = state.accessor.get_document(&id).await?.ok_or_else(|| {
        let path = state
            .accessor
            .resolver()
            .resolve(&id)
            .unwrap_or_else(|_| id.to_string().into());
        folio_core::Error::not_found(path)
    })?;
    let html = state.accessor.render_html(&document);
    Ok(Json(DocumentResponse { document, html }))
}

/// `POST /api/transform` and `POST /api/edit`
#[instrument(skip_all)]
pub async fn transform(
    State(state): State<Arc<AppState>>,
    body: std::result::Result<Json<TransformRequest>, JsonRejection>,
) -> Result<Json<TransformResponse>> {
    let Json(request) = body.map_err(|e| Error::BadRequest(e.body_text()))?;
    tracing::info!(text_len = request.text.len(), "Received transform request");

    let transformed_text = state.editor.transform(&request.text).await?;
    tracing::info!(
        transformed_len = transformed_text.len(),
        "Successfully transformed text"
    );
    Ok(Json(TransformResponse { transformed_text }))
}
