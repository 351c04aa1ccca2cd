use rust_embed::Embed;

/// 同梱するランディングページの静的アセット
#[derive(Embed)]
#[folder = "web/"]
#[include = "*"]
#[include = "**/*"]
pub struct WebAssets;
