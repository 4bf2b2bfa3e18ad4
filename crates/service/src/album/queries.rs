use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryFilter,
    QueryResult, QueryTrait,
};
use tracing::debug;

use models::album::{self, Album, Entity as AlbumEntity, NewAlbum};

use crate::errors::ServiceError;

/// Decode every row or fail the whole call; no partial result.
fn decode_all(op: &'static str, rows: &[QueryResult]) -> Result<Vec<Album>, ServiceError> {
    rows.iter()
        .map(|row| {
            Album::from_query_result(row, "").map_err(|source| ServiceError::RowScan { op, source })
        })
        .collect()
}

/// Every album, in whatever order the engine returns them.
pub async fn list_albums(db: &DatabaseConnection) -> Result<Vec<Album>, ServiceError> {
    const OP: &str = "list_albums";
    let stmt = AlbumEntity::find().build(db.get_database_backend());
    let rows = db
        .query_all(stmt)
        .await
        .map_err(|source| ServiceError::Query { op: OP, source })?;
    let albums = decode_all(OP, &rows)?;
    debug!(op = OP, count = albums.len(), "albums fetched");
    Ok(albums)
}

/// Albums whose artist equals `name` exactly (case rules per engine collation).
pub async fn albums_by_artist(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Vec<Album>, ServiceError> {
    const OP: &str = "albums_by_artist";
    let stmt = AlbumEntity::find()
        .filter(album::Column::Artist.eq(name))
        .build(db.get_database_backend());
    let rows = db
        .query_all(stmt)
        .await
        .map_err(|source| ServiceError::Query { op: OP, source })?;
    let albums = decode_all(OP, &rows)?;
    debug!(op = OP, artist = %name, count = albums.len(), "albums fetched");
    Ok(albums)
}

/// Single-row lookup by primary key.
pub async fn album_by_id(db: &DatabaseConnection, id: i64) -> Result<Album, ServiceError> {
    const OP: &str = "album_by_id";
    let stmt = AlbumEntity::find_by_id(id).build(db.get_database_backend());
    let row = db
        .query_one(stmt)
        .await
        .map_err(|source| ServiceError::Query { op: OP, source })?
        .ok_or(ServiceError::NotFound { id })?;
    Album::from_query_result(&row, "").map_err(|source| ServiceError::RowScan { op: OP, source })
}

/// Insert and return the id the engine assigned.
pub async fn add_album(db: &DatabaseConnection, input: NewAlbum) -> Result<i64, ServiceError> {
    let res = AlbumEntity::insert(input.into_active_model())
        .exec(db)
        .await
        .map_err(|source| ServiceError::Insert { source })?;
    debug!(op = "add_album", id = res.last_insert_id, "album inserted");
    Ok(res.last_insert_id)
}

pub async fn ping(db: &DatabaseConnection) -> Result<(), ServiceError> {
    db.ping().await.map_err(|source| ServiceError::Query { op: "ping", source })
}
