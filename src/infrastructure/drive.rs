//! Google Drive v3 クライアント
//!
//! `files.list` による一覧取得と `files.get?alt=media` によるバイト
//! ストリーミングのみを使う薄いラッパー。認証は API キー。

use crate::domain::{DriveError, PhotoContent, PhotoDescriptor, PhotoId, PhotoSource};
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const DRIVE_API_BASE: &str = "https://www.googleapis.com/drive/v3";

/// 一回のリスティングで取得する最大件数
const LIST_PAGE_SIZE: u32 = 100;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// `files.list` のレスポンス
#[derive(Debug, Deserialize)]
struct FileListResponse {
    #[serde(default)]
    files: Vec<DriveFile>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DriveFile {
    id: String,
    name: String,
    mime_type: String,
    modified_time: DateTime<Utc>,
}

/// Drive API の写真ソース実装
pub struct DriveClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl DriveClient {
    /// クライアントを作成
    ///
    /// `base_url` はプロキシURL導出に使う外部公開アドレス
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self, DriveError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent(concat!("drive-photocast/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DriveError::Unavailable(e.to_string()))?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }

    /// `alt=media` のダウンロードURLを組み立てる。ファイルIDは
    /// URL セーフとは限らないのでエンコードする
    fn media_url(&self, file_id: &PhotoId) -> String {
        format!(
            "{DRIVE_API_BASE}/files/{}?alt=media&key={}",
            urlencoding::encode(file_id.as_str()),
            self.api_key
        )
    }

    async fn error_from_response(response: reqwest::Response) -> DriveError {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        DriveError::Api { status, message }
    }
}

#[async_trait::async_trait]
impl PhotoSource for DriveClient {
    async fn list_photos(&self, folder_id: &str) -> Result<Vec<PhotoDescriptor>, DriveError> {
        let query = format!(
            "'{folder_id}' in parents and mimeType contains 'image/' and trashed = false"
        );

        let page_size = LIST_PAGE_SIZE.to_string();
        let response = self
            .http
            .get(format!("{DRIVE_API_BASE}/files"))
            .query(&[
                ("q", query.as_str()),
                ("orderBy", "modifiedTime desc"),
                ("pageSize", page_size.as_str()),
                ("fields", "files(id,name,mimeType,modifiedTime)"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| DriveError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let listing: FileListResponse = response
            .json()
            .await
            .map_err(|e| DriveError::Unavailable(e.to_string()))?;

        debug!(count = listing.files.len(), folder_id, "Drive listing fetched");

        Ok(listing
            .files
            .into_iter()
            .map(|f| {
                PhotoDescriptor::new(
                    PhotoId::new(f.id),
                    f.name,
                    f.mime_type,
                    f.modified_time,
                    &self.base_url,
                )
            })
            .collect())
    }

    async fn fetch_bytes(&self, file_id: &PhotoId) -> Result<PhotoContent, DriveError> {
        let response = self
            .http
            .get(self.media_url(file_id))
            .send()
            .await
            .map_err(|e| DriveError::Unavailable(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(DriveError::NotFound(file_id.to_string()));
        }
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let mime_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();

        let stream = response
            .bytes_stream()
            .map_err(|e| DriveError::Unavailable(e.to_string()));

        Ok(PhotoContent {
            mime_type,
            stream: Box::pin(stream),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_url_escapes_file_id() {
        let client = DriveClient::new("key-1", "http://localhost:8080").unwrap();
        let url = client.media_url(&PhotoId::new("a b/c"));
        assert_eq!(
            url,
            "https://www.googleapis.com/drive/v3/files/a%20b%2Fc?alt=media&key=key-1"
        );
    }

    #[test]
    fn test_file_list_response_parsing() {
        let json = r#"{
            "files": [
                {
                    "id": "f1",
                    "name": "sunset.jpg",
                    "mimeType": "image/jpeg",
                    "modifiedTime": "2024-06-01T12:00:00.000Z"
                }
            ]
        }"#;
        let parsed: FileListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.files.len(), 1);
        assert_eq!(parsed.files[0].id, "f1");
        assert_eq!(parsed.files[0].mime_type, "image/jpeg");
    }

    #[test]
    fn test_empty_file_list_response() {
        let parsed: FileListResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.files.is_empty());
    }
}
