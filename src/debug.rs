//! デバッグとログ機能
//!
//! プロジェクト全体のデバッグとログ機能を提供

use std::fs;
use tracing::{Level, debug, info};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// デバッグ設定
#[derive(Debug, Clone)]
pub struct DebugConfig {
    /// ログレベル
    pub log_level: Level,
    /// ファイルログを有効にするか
    pub enable_file_logging: bool,
    /// ログファイルのディレクトリ
    pub log_directory: String,
    /// コンソールログを有効にするか
    pub enable_console_logging: bool,
    /// JSONフォーマットを使用するか
    pub use_json_format: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            enable_file_logging: false,
            log_directory: "logs".to_string(),
            enable_console_logging: true,
            use_json_format: false,
        }
    }
}

impl DebugConfig {
    /// 開発環境用の設定
    pub fn development() -> Self {
        Self {
            log_level: Level::DEBUG,
            enable_file_logging: false,
            log_directory: "logs".to_string(),
            enable_console_logging: true,
            use_json_format: false,
        }
    }

    /// 本番環境用の設定
    pub fn production() -> Self {
        Self {
            log_level: Level::INFO,
            enable_file_logging: true,
            log_directory: "/var/log/drive-photocast".to_string(),
            enable_console_logging: false,
            use_json_format: true,
        }
    }

    /// テスト環境用の設定
    pub fn test() -> Self {
        Self {
            log_level: Level::WARN,
            enable_file_logging: false,
            log_directory: "test_logs".to_string(),
            enable_console_logging: true,
            use_json_format: false,
        }
    }
}

/// ログシステムを初期化
pub fn init_logging(config: &DebugConfig) -> Result<(), Box<dyn std::error::Error>> {
    // ログディレクトリを作成
    if config.enable_file_logging {
        fs::create_dir_all(&config.log_directory)?;
    }

    // 環境変数からのフィルター設定
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("drive_photocast={}", config.log_level)))?;

    if config.enable_file_logging {
        let file_appender = RollingFileAppender::new(
            Rotation::DAILY,
            &config.log_directory,
            "drive-photocast.log",
        );

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(file_appender)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    }

    info!("ログシステムが初期化されました");
    debug!("デバッグ設定: {:?}", config);

    Ok(())
}
