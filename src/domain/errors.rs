use thiserror::Error;

/// 起動時設定のエラー（致命的、プロセスは起動を中断する）
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVariable(&'static str),

    #[error("Failed to read credentials file {path}: {reason}")]
    CredentialsFile { path: String, reason: String },

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Drive API アクセスのエラー
#[derive(Error, Debug)]
pub enum DriveError {
    #[error("Drive API is unreachable: {0}")]
    Unavailable(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Drive API returned status {status}: {message}")]
    Api { status: u16, message: String },
}

impl DriveError {
    /// リコンサイルを中断してリトライで回復できるエラーか
    pub fn is_recoverable(&self) -> bool {
        matches!(self, DriveError::Unavailable(_) | DriveError::Api { .. })
    }
}
