//! Web インターフェース
//!
//! 写真一覧・ヘルスチェック・画像プロキシの HTTP エンドポイントと、
//! 追加/削除通知をプッシュする WebSocket エンドポイントを提供します。

mod embedded_assets;
mod error_response;
mod handlers;
mod models;
mod photo_stream;

pub mod server;

pub use server::{PhotoCastState, build_router};

// 内部使用のため、必要な型のみを再エクスポート
pub(crate) use handlers::{get_health, get_photos, serve_image, websocket_handler};
