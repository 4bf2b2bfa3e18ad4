use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::album::{Album, NewAlbum};

use crate::album::queries;
use crate::errors::ServiceError;

/// Album store as seen by the HTTP layer.
#[async_trait]
pub trait AlbumRepository: Send + Sync {
    async fn list_albums(&self) -> Result<Vec<Album>, ServiceError>;
    async fn albums_by_artist(&self, name: &str) -> Result<Vec<Album>, ServiceError>;
    async fn album_by_id(&self, id: i64) -> Result<Album, ServiceError>;
    async fn add_album(&self, album: NewAlbum) -> Result<i64, ServiceError>;
    async fn ping(&self) -> Result<(), ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmAlbumRepository {
    db: DatabaseConnection,
}

impl SeaOrmAlbumRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AlbumRepository for SeaOrmAlbumRepository {
    async fn list_albums(&self) -> Result<Vec<Album>, ServiceError> {
        queries::list_albums(&self.db).await
    }

    async fn albums_by_artist(&self, name: &str) -> Result<Vec<Album>, ServiceError> {
        queries::albums_by_artist(&self.db, name).await
    }

    async fn album_by_id(&self, id: i64) -> Result<Album, ServiceError> {
        queries::album_by_id(&self.db, id).await
    }

    async fn add_album(&self, album: NewAlbum) -> Result<i64, ServiceError> {
        queries::add_album(&self.db, album).await
    }

    async fn ping(&self) -> Result<(), ServiceError> {
        queries::ping(&self.db).await
    }
}
