//! インフラストラクチャ層
//!
//! 外部システム（Google Drive API）との統合

pub mod drive;

pub use drive::DriveClient;
