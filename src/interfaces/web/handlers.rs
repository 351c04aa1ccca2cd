use super::error_response::ErrorResponse;
use super::models::HealthResponse;
use super::photo_stream::stream_photos;
use super::server::PhotoCastState;
use crate::domain::{DriveError, PhotoDescriptor, PhotoId};
use axum::{
    Json,
    body::Body,
    extract::{Path, State, ws::WebSocketUpgrade},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

/// Proxied images are immutable per file id, so clients may cache for a day
const IMAGE_CACHE_CONTROL: &str = "public, max-age=86400";

/// GET /photos — fresh Drive fetch on every call
///
/// Deliberately independent of the polled snapshot; between poll ticks the
/// result can diverge from what the realtime channel has announced.
pub async fn get_photos(
    State(state): State<PhotoCastState>,
) -> Result<Json<Vec<PhotoDescriptor>>, ErrorResponse> {
    match state.source.list_photos(&state.config.folder_id).await {
        Ok(photos) => Ok(Json(photos)),
        Err(e) => {
            error!("Failed to list photos: {}", e);
            Err(ErrorResponse::internal(e.to_string()))
        }
    }
}

/// GET /health
pub async fn get_health(State(state): State<PhotoCastState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        photos_loaded: state.photos.photos_loaded().await,
        drive_folder: state.config.folder_id.clone(),
        base_url: state.config.base_url.clone(),
        environment: state.config.environment.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// GET /image/{file_id} — stream image bytes through the server
///
/// Upstream failures before the first byte become error responses. A failure
/// mid-transfer aborts the streaming body, which terminates the connection
/// instead of rewriting an already committed success status.
pub async fn serve_image(
    State(state): State<PhotoCastState>,
    Path(file_id): Path<String>,
) -> Response {
    let id = PhotoId::new(file_id);

    let content = match state.source.fetch_bytes(&id).await {
        Ok(content) => content,
        Err(DriveError::NotFound(id)) => {
            warn!(%id, "Image request for unknown file id");
            return ErrorResponse::new(
                StatusCode::NOT_FOUND,
                format!("Unknown file id: {id}"),
            )
            .into_response();
        }
        Err(e) => {
            error!(%id, "Failed to fetch image bytes: {}", e);
            return ErrorResponse::internal(e.to_string()).into_response();
        }
    };

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_str(&content.mime_type)
            .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream")),
    );
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(IMAGE_CACHE_CONTROL),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );

    (StatusCode::OK, headers, Body::from_stream(content.stream)).into_response()
}

/// WebSocket handler for photo change notifications
pub async fn websocket_handler(
    State(state): State<PhotoCastState>,
    ws: WebSocketUpgrade,
) -> Response {
    ws.on_upgrade(move |socket| stream_photos(socket, state))
}
