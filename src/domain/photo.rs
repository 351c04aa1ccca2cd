//! 写真のドメインモデル
//!
//! Drive 上の画像ファイル一件を表す値オブジェクトを定義

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 写真ID
///
/// Drive のファイルIDをそのまま保持する不透明な識別子
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoId(String);

impl PhotoId {
    /// 文字列から作成
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// 文字列として取得
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PhotoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for PhotoId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// 写真のメタデータ
///
/// 一度構築したら変更しない。`url` はこのサービス自身が提供する
/// プロキシURLで、`id` と外部公開ベースURLから決定的に導出される。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoDescriptor {
    pub id: PhotoId,
    pub name: String,
    pub mime_type: String,
    pub modified_time: DateTime<Utc>,
    pub url: String,
}

impl PhotoDescriptor {
    /// メタデータとベースURLからディスクリプタを作成
    pub fn new(
        id: PhotoId,
        name: impl Into<String>,
        mime_type: impl Into<String>,
        modified_time: DateTime<Utc>,
        base_url: &str,
    ) -> Self {
        let url = proxy_url(base_url, &id);
        Self {
            id,
            name: name.into(),
            mime_type: mime_type.into(),
            modified_time,
            url,
        }
    }
}

/// ファイルIDからプロキシURLを導出
///
/// ID は URL セーフとは限らないのでパーセントエンコードする
pub fn proxy_url(base_url: &str, id: &PhotoId) -> String {
    format!(
        "{}/image/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(id.as_str())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proxy_url_derivation() {
        let id = PhotoId::new("abc123");
        assert_eq!(
            proxy_url("http://localhost:8080", &id),
            "http://localhost:8080/image/abc123"
        );
    }

    #[test]
    fn test_proxy_url_trims_trailing_slash() {
        let id = PhotoId::new("abc123");
        assert_eq!(
            proxy_url("https://photos.example.com/", &id),
            "https://photos.example.com/image/abc123"
        );
    }

    #[test]
    fn test_proxy_url_escapes_unsafe_ids() {
        let id = PhotoId::new("a b/c?d");
        assert_eq!(
            proxy_url("http://localhost:8080", &id),
            "http://localhost:8080/image/a%20b%2Fc%3Fd"
        );
    }

    #[test]
    fn test_descriptor_serializes_camel_case() {
        let descriptor = PhotoDescriptor::new(
            PhotoId::new("f1"),
            "sunset.jpg",
            "image/jpeg",
            Utc::now(),
            "http://localhost:8080",
        );
        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(json["id"], "f1");
        assert_eq!(json["mimeType"], "image/jpeg");
        assert!(json["modifiedTime"].is_string());
        assert_eq!(json["url"], "http://localhost:8080/image/f1");
    }
}
