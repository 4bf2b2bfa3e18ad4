use std::sync::Arc;

use service::AlbumRepository;

/// Handed to every handler through axum `State`; cloning shares the store.
#[derive(Clone)]
pub struct ServerState {
    pub albums: Arc<dyn AlbumRepository>,
}

impl ServerState {
    pub fn new<R: AlbumRepository + 'static>(repo: R) -> Self {
        Self { albums: Arc::new(repo) }
    }
}
