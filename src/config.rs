//! アプリケーション設定
//!
//! 起動時に環境変数から一度だけ読み込む。フォルダIDと認証情報が
//! 無い場合は致命的エラーとしてプロセスを終了させる。

use crate::domain::ConfigError;
use std::time::Duration;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;

/// アプリケーション全体の設定
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 外部から到達可能なベースURL（プロキシURLの導出に使う）
    pub base_url: String,
    /// 監視対象の Drive フォルダID
    pub folder_id: String,
    /// Google API キー
    pub api_key: String,
    /// バインドするホスト
    pub host: String,
    /// リッスンポート
    pub port: u16,
    /// 環境名（health エンドポイントで報告）
    pub environment: String,
    /// ポーリング間隔
    pub poll_interval: Duration,
}

impl AppConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 任意の変数ソースから設定を読み込む（テスト用の分離点）
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let folder_id = lookup("DRIVE_FOLDER_ID")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingVariable("DRIVE_FOLDER_ID"))?;

        let api_key = Self::load_api_key(&lookup)?;

        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "PORT",
                    value,
                })?,
            None => DEFAULT_PORT,
        };

        let base_url = lookup("BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| format!("http://localhost:{port}"));

        let environment =
            lookup("APP_ENV").unwrap_or_else(|| "development".to_string());

        let poll_interval_secs = match lookup("POLL_INTERVAL_SECS") {
            Some(value) => value
                .parse::<u64>()
                .ok()
                .filter(|v| *v > 0)
                .ok_or(ConfigError::InvalidValue {
                    name: "POLL_INTERVAL_SECS",
                    value,
                })?,
            None => DEFAULT_POLL_INTERVAL_SECS,
        };

        Ok(Self {
            base_url,
            folder_id,
            api_key,
            host: "0.0.0.0".to_string(),
            port,
            environment,
            poll_interval: Duration::from_secs(poll_interval_secs),
        })
    }

    /// API キーを読み込む
    ///
    /// GOOGLE_API_KEY を優先し、無ければ GOOGLE_API_KEY_FILE のパスから読む
    fn load_api_key(lookup: &impl Fn(&str) -> Option<String>) -> Result<String, ConfigError> {
        if let Some(key) = lookup("GOOGLE_API_KEY").filter(|v| !v.trim().is_empty()) {
            return Ok(key.trim().to_string());
        }

        if let Some(path) = lookup("GOOGLE_API_KEY_FILE") {
            let contents =
                std::fs::read_to_string(&path).map_err(|e| ConfigError::CredentialsFile {
                    path: path.clone(),
                    reason: e.to_string(),
                })?;
            let key = contents.trim().to_string();
            if key.is_empty() {
                return Err(ConfigError::CredentialsFile {
                    path,
                    reason: "file is empty".to_string(),
                });
            }
            return Ok(key);
        }

        Err(ConfigError::MissingVariable("GOOGLE_API_KEY"))
    }
}
