use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use dhyan_common::Document;

use crate::error::{AppError, AppResult};
use crate::AppState;

pub async fn list_documents(
    State(state): State<Arc<AppState>>,
    Path(collection): Path<String>,
) -> AppResult<Json<Vec<Document>>> {
    let documents = state.documents.list(&collection)?;
    tracing::debug!("Serving {} documents from {}", documents.len(), collection);
    Ok(Json(documents))
}

pub async fn get_document(
    State(state): State<Arc<AppState>>,
    Path((collection, id)): Path<(String, String)>,
) -> AppResult<Json<Document>> {
    state
        .documents
        .find(&collection, &id)?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Document {}/{}", collection, id)))
}
