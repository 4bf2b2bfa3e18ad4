//! Every store call fails; the server must answer 5xx and keep serving.

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use models::album::{Album, NewAlbum};
use sea_orm::DbErr;
use serde_json::{json, Value};
use service::{AlbumRepository, ServiceError};
use tower::ServiceExt;

use server::{routes, ServerState};

struct BrokenStore;

fn down() -> DbErr {
    DbErr::Custom("connection reset by peer".into())
}

#[async_trait]
impl AlbumRepository for BrokenStore {
    async fn list_albums(&self) -> Result<Vec<Album>, ServiceError> {
        Err(ServiceError::Query { op: "list_albums", source: down() })
    }

    async fn albums_by_artist(&self, _name: &str) -> Result<Vec<Album>, ServiceError> {
        Err(ServiceError::Query { op: "albums_by_artist", source: down() })
    }

    async fn album_by_id(&self, _id: i64) -> Result<Album, ServiceError> {
        Err(ServiceError::RowScan { op: "album_by_id", source: down() })
    }

    async fn add_album(&self, _album: NewAlbum) -> Result<i64, ServiceError> {
        Err(ServiceError::Insert { source: down() })
    }

    async fn ping(&self) -> Result<(), ServiceError> {
        Err(ServiceError::Query { op: "ping", source: down() })
    }
}

fn app() -> Router {
    routes::build_router(ServerState::new(BrokenStore), routes::default_cors())
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let res = app.clone().oneshot(req).await.expect("router is infallible");
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.expect("read body");
    let body = serde_json::from_slice(&bytes).expect("json body");
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).expect("request")
}

#[tokio::test]
async fn list_failure_is_500() {
    let (status, body) = send(&app(), get("/albums")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"message": "internal server error"}));
}

#[tokio::test]
async fn lookup_failure_is_500_not_404_or_200() {
    let (status, body) = send(&app(), get("/albums/1")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"message": "internal server error"}));
}

#[tokio::test]
async fn invalid_id_is_rejected_before_the_store() {
    let (status, body) = send(&app(), get("/albums/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"message": "invalid album id"}));
}

#[tokio::test]
async fn insert_failure_is_500() {
    let req = Request::builder()
        .method("POST")
        .uri("/albums")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"title":"Blue Train","artist":"John Coltrane","price":56.99}"#))
        .expect("request");
    let (status, body) = send(&app(), req).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"message": "internal server error"}));
}

#[tokio::test]
async fn health_reports_unavailable() {
    let (status, body) = send(&app(), get("/health")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({"status": "unavailable"}));
}

#[tokio::test]
async fn keeps_serving_after_failures() {
    let app = app();
    for _ in 0..3 {
        let (status, _) = send(&app, get("/albums")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
    let (status, body) = send(&app, get("/albums/xyz")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid album id");
}

#[test]
fn driver_text_never_reaches_clients() {
    let rt = tokio::runtime::Runtime::new().expect("runtime");
    let (_, body) = rt.block_on(send(&app(), get("/albums")));
    assert!(!body.to_string().contains("connection reset"));
}
