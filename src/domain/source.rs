//! リモート写真ソースのポート
//!
//! フォルダの一覧取得とバイト取得を抽象化するトレイト。
//! インフラ層の Drive クライアントが実装し、テストではフェイクを差し込む。

use crate::domain::errors::DriveError;
use crate::domain::photo::{PhotoDescriptor, PhotoId};
use bytes::Bytes;
use futures_util::Stream;
use std::pin::Pin;

/// 取得したファイル本体のバイトストリーム
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, DriveError>> + Send>>;

/// ストリーミング取得したファイル本体
pub struct PhotoContent {
    pub mime_type: String,
    pub stream: ByteStream,
}

/// リモートストレージの写真ソース
///
/// `list_photos` は updateTime 降順・画像のみ・ゴミ箱除外の一覧を返す。
/// 失敗は「変化なし」として扱うこと（空フォルダと解釈してはならない）。
#[async_trait::async_trait]
pub trait PhotoSource: Send + Sync {
    /// フォルダ内の画像ファイル一覧を取得
    async fn list_photos(&self, folder_id: &str) -> Result<Vec<PhotoDescriptor>, DriveError>;

    /// ファイルIDのバイト列をストリーミング取得
    async fn fetch_bytes(&self, file_id: &PhotoId) -> Result<PhotoContent, DriveError>;
}
