use axum::{extract::{Path, State}, Json};
use common::types::Detail;
use serde::{Deserialize, Serialize};
use service::WordEntry;
use tracing::info;
use utoipa::ToSchema;

use crate::errors::JsonApiError;
use crate::state::ServerState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AddWordRequest {
    pub word: String,
}

#[utoipa::path(
    post,
    path = "/add-word",
    tag = "words",
    request_body = AddWordRequest,
    responses(
        (status = 200, description = "Word stored", body = crate::openapi::WordEntryDoc),
        (status = 400, description = "Word already exists or is empty", body = crate::openapi::DetailDoc)
    )
)]
pub async fn add_word(
    State(state): State<ServerState>,
    Json(input): Json<AddWordRequest>,
) -> Result<Json<WordEntry>, JsonApiError> {
    let created = state.words.add(&input.word).await?;
    Ok(Json(created))
}

#[utoipa::path(
    get,
    path = "/words",
    tag = "words",
    responses((status = 200, description = "All stored words", body = [crate::openapi::WordEntryDoc]))
)]
pub async fn list_words(State(state): State<ServerState>) -> Result<Json<Vec<WordEntry>>, JsonApiError> {
    let words = state.words.list().await?;
    info!(count = words.len(), "list words");
    Ok(Json(words))
}

#[utoipa::path(
    delete,
    path = "/delete-word/{id}",
    tag = "words",
    params(("id" = i64, Path, description = "Identifier returned by /add-word")),
    responses(
        (status = 200, description = "Word deleted", body = crate::openapi::DetailDoc),
        (status = 404, description = "Word not found", body = crate::openapi::DetailDoc)
    )
)]
pub async fn delete_word(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<Detail>, JsonApiError> {
    state.words.delete(id).await?;
    Ok(Json(Detail::new("Word deleted.")))
}
