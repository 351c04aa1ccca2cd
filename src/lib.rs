//! # Drive Photocast
//!
//! Google Drive のフォルダをポーリングして写真の追加・削除を検出し、
//! 接続中のブラウザへ WebSocket でプッシュ通知するサービス。
//! 画像本体はこのサーバーがプロキシとして配信します。
//!
//! このクレートは以下の層に分かれています：
//!
//! - **Domain Layer**: スナップショットと差分計算のドメインモデル
//! - **Application Layer**: 写真サービスとユースケース
//! - **Infrastructure Layer**: Google Drive API クライアント
//! - **Interface Layer**: HTTP / WebSocket エンドポイント

pub mod application;
pub mod config;
pub mod debug;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

// 公開API
pub use domain::*;
