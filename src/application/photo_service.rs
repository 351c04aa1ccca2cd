//! 写真サービス
//!
//! スナップショット・ブロードキャストハブ・リコンサイル実行中ガードを
//! 一つのオブジェクトが所有する。HTTP ハンドラと WebSocket ハンドラは
//! このサービスへのハンドル経由でのみ状態を読む。

use crate::domain::{DriveError, PhotoEvent, PhotoSource, Snapshot};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock, broadcast};
use tracing::{debug, info};

/// ブロードキャストチャネルの容量
///
/// 受信が追いつかないクライアントはメッセージを落とすだけで、
/// 他のクライアントやリコンサイルを止めない
const EVENT_CHANNEL_CAPACITY: usize = 64;

pub struct PhotoService {
    source: Arc<dyn PhotoSource>,
    folder_id: String,
    snapshot: RwLock<Snapshot>,
    events: broadcast::Sender<PhotoEvent>,
    /// リコンサイルの直列化ガード
    ///
    /// 一回のパスがリモート応答待ちでサスペンドしている間に、別のパスが
    /// 古いベースラインに対して差分を計算するのを防ぐ
    reconcile_guard: Mutex<()>,
}

impl PhotoService {
    pub fn new(source: Arc<dyn PhotoSource>, folder_id: impl Into<String>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            source,
            folder_id: folder_id.into(),
            snapshot: RwLock::new(Snapshot::new()),
            events,
            reconcile_guard: Mutex::new(()),
        }
    }

    /// イベント購読を開始
    pub fn subscribe(&self) -> broadcast::Receiver<PhotoEvent> {
        self.events.subscribe()
    }

    /// リスティングを取得してスナップショットと突き合わせる
    ///
    /// 取得に失敗した場合はスナップショットを一切変更せず、イベントも
    /// 発行しない。リモート障害を「全写真削除」と誤解して
    /// photo-removed の嵐を流してはならない。
    pub async fn reconcile(&self) -> Result<Vec<PhotoEvent>, DriveError> {
        let _guard = self.reconcile_guard.lock().await;

        let listing = self.source.list_photos(&self.folder_id).await?;

        let events = {
            let mut snapshot = self.snapshot.write().await;
            snapshot.apply_listing(listing)
        };

        for event in &events {
            match event {
                PhotoEvent::Added(descriptor) => {
                    info!(id = %descriptor.id, name = %descriptor.name, "Photo added");
                }
                PhotoEvent::Removed(id) => {
                    info!(%id, "Photo removed");
                }
            }
            // 購読者ゼロは正常（send は fire-and-forget）
            let _ = self.events.send(event.clone());
        }

        if events.is_empty() {
            debug!("Reconciliation pass found no changes");
        }

        Ok(events)
    }

    /// スナップショットが空なら一度だけリコンサイルする
    ///
    /// 新規クライアント接続時のブートストラップに使う
    pub async fn ensure_loaded(&self) -> Result<(), DriveError> {
        if self.snapshot.read().await.is_empty() {
            self.reconcile().await?;
        }
        Ok(())
    }

    /// 既知の全写真のプロキシURL
    pub async fn photo_urls(&self) -> Vec<String> {
        self.snapshot.read().await.urls()
    }

    /// 既知の写真数
    pub async fn photos_loaded(&self) -> usize {
        self.snapshot.read().await.len()
    }
}
