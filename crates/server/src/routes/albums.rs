use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use models::album::{Album, NewAlbum};
use tracing::{debug, info};

use crate::errors::ApiError;
use crate::state::ServerState;

/// `GET /albums`
pub async fn list_albums(State(state): State<ServerState>) -> Result<Json<Vec<Album>>, ApiError> {
    let albums = state.albums.list_albums().await?;
    info!(count = albums.len(), "list albums");
    Ok(Json(albums))
}

/// `GET /albums/:id`
pub async fn get_album(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Album>, ApiError> {
    let id = parse_id(&raw_id)?;
    match state.albums.album_by_id(id).await {
        Ok(album) => Ok(Json(album)),
        Err(e) if e.is_not_found() => {
            debug!(id, "album not found");
            Err(ApiError::NotFound)
        }
        Err(e) => Err(ApiError::Internal(e)),
    }
}

/// `POST /albums`; responds 201 with the new id as the body.
pub async fn create_album(
    State(state): State<ServerState>,
    payload: Result<Json<NewAlbum>, JsonRejection>,
) -> Result<(StatusCode, Json<i64>), ApiError> {
    let Json(input) = payload.map_err(|rejection| {
        debug!(reason = %rejection.body_text(), "rejected album payload");
        ApiError::InvalidPayload
    })?;
    let id = state.albums.add_album(input).await?;
    info!(id, "created album");
    Ok((StatusCode::CREATED, Json(id)))
}

/// Base-10 `i64`, optional sign, nothing else.
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|e| {
        debug!(raw, error = %e, "invalid album id");
        ApiError::InvalidId
    })
}
