//! ドメイン層
//!
//! 写真フォルダ監視のビジネスロジックとドメインモデルを含む層

pub mod errors;
pub mod events;
pub mod photo;
pub mod snapshot;
pub mod source;

pub use errors::{ConfigError, DriveError};
pub use events::PhotoEvent;
pub use photo::{PhotoDescriptor, PhotoId};
pub use snapshot::Snapshot;
pub use source::{ByteStream, PhotoContent, PhotoSource};
