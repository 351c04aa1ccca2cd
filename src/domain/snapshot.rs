//! スナップショット
//!
//! 「現在フォルダに存在すると信じている写真」の集合。リコンサイラが
//! 新しいリスティングとの差分を計算しながら唯一この状態を変更する。

use crate::domain::events::PhotoEvent;
use crate::domain::photo::{PhotoDescriptor, PhotoId};
use std::collections::HashMap;

/// フォルダの最終既知状態
///
/// ファイルIDからディスクリプタへの写像。保存順序は持たない。
#[derive(Debug, Default)]
pub struct Snapshot {
    entries: HashMap<PhotoId, PhotoDescriptor>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &PhotoId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn get(&self, id: &PhotoId) -> Option<&PhotoDescriptor> {
        self.entries.get(id)
    }

    /// 全写真のプロキシURLを取得
    pub fn urls(&self) -> Vec<String> {
        self.entries.values().map(|d| d.url.clone()).collect()
    }

    /// 新しいリスティングを取り込み、差分イベントを返す
    ///
    /// 追加はリスティングの順序どおりに先に検出し、削除を後に検出する。
    /// 両方に存在するディスクリプタには触れない。名前や更新時刻が
    /// 変わっていてもイベントは発行しない（既知の制限）。
    /// 同じリスティングを二回適用しても二回目は空の差分になる。
    pub fn apply_listing(&mut self, listing: Vec<PhotoDescriptor>) -> Vec<PhotoEvent> {
        let mut events = Vec::new();

        let fresh_ids: std::collections::HashSet<PhotoId> =
            listing.iter().map(|d| d.id.clone()).collect();

        for descriptor in listing {
            if !self.entries.contains_key(&descriptor.id) {
                self.entries
                    .insert(descriptor.id.clone(), descriptor.clone());
                events.push(PhotoEvent::Added(descriptor));
            }
        }

        let removed: Vec<PhotoId> = self
            .entries
            .keys()
            .filter(|id| !fresh_ids.contains(id))
            .cloned()
            .collect();
        for id in removed {
            self.entries.remove(&id);
            events.push(PhotoEvent::Removed(id));
        }

        events
    }
}
