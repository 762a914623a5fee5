use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};

use crate::catalog::album::Album;
use crate::error::ApiError;
use crate::http::json::IndentedJson;
use crate::http::state::AppState;

/// GET /albums: every album in insertion order.
pub async fn list_albums(State(state): State<AppState>) -> IndentedJson<Vec<Album>> {
    let albums = state.read_store().list().to_vec();
    IndentedJson(albums)
}

/// GET /albums/{id}: first album whose id matches exactly.
pub async fn get_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<IndentedJson<Album>, ApiError> {
    let album = state.read_store().find(&id).cloned();
    match album {
        Some(album) => Ok(IndentedJson(album)),
        None => {
            tracing::debug!(id = %id, "album lookup missed");
            Err(ApiError::AlbumNotFound)
        }
    }
}

/// POST /albums: bind the body into an album, append it, echo it back.
/// The body is taken raw so binding ignores Content-Type and can report
/// every mistyped field at once.
pub async fn create_album(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, IndentedJson<Album>), ApiError> {
    let album = Album::from_json_body(&body).map_err(|errors| {
        tracing::warn!(?errors, "rejected album body");
        ApiError::MalformedRequest(errors)
    })?;

    let count = state.write_store().append(album.clone());
    tracing::info!(id = %album.id, count, "album added");

    Ok((StatusCode::CREATED, IndentedJson(album)))
}
