use super::embedded_assets::WebAssets;
use super::{get_health, get_photos, serve_image, websocket_handler};
use crate::application::PhotoService;
use crate::config::AppConfig;
use crate::domain::PhotoSource;
use crate::infrastructure::DriveClient;
use axum::{
    Router,
    body::Body,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
    routing::get,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

const SETUP_INSTRUCTIONS: &str = "drive-photocast is running.\n\n\
Set DRIVE_FOLDER_ID and GOOGLE_API_KEY, then open /photos for the current \
listing, /health for status, or connect a WebSocket client to /ws for \
change notifications.\n";

/// Shared state handed to every HTTP and WebSocket handler
#[derive(Clone)]
pub struct PhotoCastState {
    pub config: Arc<AppConfig>,
    pub photos: Arc<PhotoService>,
    pub source: Arc<dyn PhotoSource>,
}

impl PhotoCastState {
    pub fn new(config: AppConfig, source: Arc<dyn PhotoSource>) -> Self {
        let photos = Arc::new(PhotoService::new(source.clone(), config.folder_id.clone()));
        Self {
            config: Arc::new(config),
            photos,
            source,
        }
    }
}

/// Create the application router with all endpoints
pub fn build_router(state: PhotoCastState) -> Router {
    Router::new()
        // API endpoints
        .route("/photos", get(get_photos))
        .route("/health", get(get_health))
        .route("/image/{file_id}", get(serve_image))
        // WebSocket endpoint
        .route("/ws", get(websocket_handler))
        // Add state
        .with_state(state)
        // Add CORS support
        .layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
        // Serve embedded static files as fallback
        .fallback(static_handler)
}

pub async fn create_server(config: AppConfig) -> anyhow::Result<()> {
    info!("Starting drive-photocast web server...");

    // Parse socket address
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    let source: Arc<dyn PhotoSource> = Arc::new(DriveClient::new(
        config.api_key.clone(),
        config.base_url.clone(),
    )?);
    let state = PhotoCastState::new(config, source);

    // Drive the reconciler on a fixed interval
    spawn_poll_loop(state.photos.clone(), state.config.poll_interval);

    let app = build_router(state);

    // Create TCP listener
    let listener = TcpListener::bind(&addr).await?;

    println!("🌐 Web server started successfully!");
    println!("   URL: http://{addr}");
    println!("   Press Ctrl+C to stop");

    // Run the server
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}

/// Spawn the fixed-interval polling loop that drives reconciliation
///
/// A failed pass is logged and skipped; the loop itself never stops.
fn spawn_poll_loop(photos: Arc<PhotoService>, period: Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            // First tick fires immediately, populating the snapshot at startup
            ticker.tick().await;
            if let Err(e) = photos.reconcile().await {
                warn!("Reconciliation failed: {}", e);
            }
        }
    });
}

/// 埋め込まれた静的ファイルを提供するハンドラ
async fn static_handler(uri: Uri) -> impl IntoResponse {
    let path = uri.path().trim_start_matches('/');

    // ルートパスの場合は index.html、無ければセットアップ手順を提供
    if path.is_empty() {
        return match WebAssets::get("index.html") {
            Some(content) => html_response(content.data.to_vec()),
            None => (StatusCode::OK, SETUP_INSTRUCTIONS).into_response(),
        };
    }

    match WebAssets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();

            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, mime.as_ref())
                .body(Body::from(content.data.to_vec()))
                .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
        }
        None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
    }
}

fn html_response(data: Vec<u8>) -> Response {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/html")
        .body(Body::from(data))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}
