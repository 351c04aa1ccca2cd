use crate::config::AppConfig;
use crate::domain::PhotoSource;
use crate::infrastructure::DriveClient;
use tracing::info;

/// 設定と Drive API への到達性を一度だけ確認するユースケース
pub struct CheckSetupUseCase;

impl CheckSetupUseCase {
    pub fn new() -> Self {
        Self
    }

    pub async fn execute(&self, config: &AppConfig) -> anyhow::Result<usize> {
        info!(folder_id = %config.folder_id, "Checking Drive API access...");

        let client = DriveClient::new(config.api_key.clone(), config.base_url.clone())?;
        let photos = client.list_photos(&config.folder_id).await?;

        for photo in &photos {
            info!(id = %photo.id, name = %photo.name, "Found photo");
        }

        Ok(photos.len())
    }
}

impl Default for CheckSetupUseCase {
    fn default() -> Self {
        Self::new()
    }
}
