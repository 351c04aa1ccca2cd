//! フォルダ監視のドメインイベント
//!
//! リコンサイル一回分の差分として発行されるイベントを定義

use crate::domain::photo::{PhotoDescriptor, PhotoId};
use serde::Serialize;

/// 一回のリコンサイルで検出された変化
///
/// 追加は先に、削除は後に発行される。既存ディスクリプタの
/// メタデータ変化はイベントにならない。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PhotoEvent {
    /// フォルダに新しい写真が現れた
    Added(PhotoDescriptor),
    /// 既知の写真がフォルダから消えた
    Removed(PhotoId),
}

impl PhotoEvent {
    /// イベントタイプ名を取得
    pub fn event_type(&self) -> &'static str {
        match self {
            PhotoEvent::Added(_) => "new-photo",
            PhotoEvent::Removed(_) => "photo-removed",
        }
    }
}
