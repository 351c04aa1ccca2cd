use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use bytes::Bytes;
use chrono::Utc;
use http_body_util::BodyExt;
use tower::ServiceExt;

use drive_photocast::config::AppConfig;
use drive_photocast::domain::{
    DriveError, PhotoContent, PhotoDescriptor, PhotoId, PhotoSource,
};
use drive_photocast::interfaces::web::{PhotoCastState, build_router};

const BASE_URL: &str = "http://localhost:8080";

/// In-memory photo source standing in for the Drive API
struct FakeSource {
    photos: Vec<PhotoDescriptor>,
    fail_listing: bool,
    bytes: HashMap<String, (String, Vec<u8>)>,
}

impl FakeSource {
    fn with_photos(photos: Vec<PhotoDescriptor>) -> Self {
        Self {
            photos,
            fail_listing: false,
            bytes: HashMap::new(),
        }
    }

    fn failing() -> Self {
        Self {
            photos: Vec::new(),
            fail_listing: true,
            bytes: HashMap::new(),
        }
    }

    fn with_file(mut self, id: &str, mime: &str, data: &[u8]) -> Self {
        self.bytes
            .insert(id.to_string(), (mime.to_string(), data.to_vec()));
        self
    }
}

#[async_trait::async_trait]
impl PhotoSource for FakeSource {
    async fn list_photos(&self, _folder_id: &str) -> Result<Vec<PhotoDescriptor>, DriveError> {
        if self.fail_listing {
            return Err(DriveError::Unavailable("connection refused".to_string()));
        }
        Ok(self.photos.clone())
    }

    async fn fetch_bytes(&self, file_id: &PhotoId) -> Result<PhotoContent, DriveError> {
        match self.bytes.get(file_id.as_str()) {
            Some((mime, data)) => {
                let chunks: Vec<Result<Bytes, DriveError>> =
                    vec![Ok(Bytes::from(data.clone()))];
                Ok(PhotoContent {
                    mime_type: mime.clone(),
                    stream: Box::pin(futures_util::stream::iter(chunks)),
                })
            }
            None => Err(DriveError::NotFound(file_id.to_string())),
        }
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        base_url: BASE_URL.to_string(),
        folder_id: "folder-1".to_string(),
        api_key: "test-key".to_string(),
        host: "127.0.0.1".to_string(),
        port: 8080,
        environment: "test".to_string(),
        poll_interval: Duration::from_secs(10),
    }
}

fn descriptor(id: &str) -> PhotoDescriptor {
    PhotoDescriptor::new(
        PhotoId::new(id),
        format!("{id}.jpg"),
        "image/jpeg",
        Utc::now(),
        BASE_URL,
    )
}

fn make_app(source: FakeSource) -> axum::Router {
    let state = PhotoCastState::new(test_config(), Arc::new(source));
    build_router(state)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_configuration_and_counts() {
    let app = make_app(FakeSource::with_photos(vec![descriptor("a")]));

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["driveFolder"], "folder-1");
    assert_eq!(json["baseUrl"], BASE_URL);
    assert_eq!(json["environment"], "test");
    // Nothing has reconciled yet, so the snapshot is still empty
    assert_eq!(json["photosLoaded"], 0);
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn photos_returns_fresh_listing() {
    let app = make_app(FakeSource::with_photos(vec![
        descriptor("a"),
        descriptor("b"),
    ]));

    let response = app
        .oneshot(Request::get("/photos").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let photos = json.as_array().unwrap();
    assert_eq!(photos.len(), 2);
    assert_eq!(photos[0]["id"], "a");
    assert_eq!(photos[0]["mimeType"], "image/jpeg");
    assert_eq!(photos[0]["url"], format!("{BASE_URL}/image/a"));
}

#[tokio::test]
async fn photos_failure_becomes_500_with_error_body() {
    let app = make_app(FakeSource::failing());

    let response = app
        .oneshot(Request::get("/photos").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("unreachable"));
}

#[tokio::test]
async fn image_streams_bytes_with_cache_headers() {
    let data = b"\xff\xd8\xff\xe0 not a real jpeg";
    let app = make_app(
        FakeSource::with_photos(vec![]).with_file("f1", "image/jpeg", data),
    );

    let response = app
        .oneshot(Request::get("/image/f1").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "image/jpeg"
    );
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "public, max-age=86400"
    );
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], data);
}

#[tokio::test]
async fn image_with_url_unsafe_id_round_trips() {
    let data = b"bytes";
    let app = make_app(
        FakeSource::with_photos(vec![]).with_file("a b", "image/png", data),
    );

    // The proxy URL derivation percent-encodes the id; axum decodes it back
    let response = app
        .oneshot(Request::get("/image/a%20b").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], data);
}

#[tokio::test]
async fn image_unknown_id_is_not_found() {
    let app = make_app(FakeSource::with_photos(vec![]));

    let response = app
        .oneshot(Request::get("/image/missing").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("missing"));
}

#[tokio::test]
async fn root_serves_landing_page() {
    let app = make_app(FakeSource::with_photos(vec![]));

    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let app = make_app(FakeSource::with_photos(vec![]));

    let response = app
        .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
