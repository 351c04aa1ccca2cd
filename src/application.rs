//! アプリケーション層
//!
//! ユースケースとアプリケーションサービス

pub mod photo_service;
pub mod use_cases;

pub use photo_service::PhotoService;
