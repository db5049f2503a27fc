pub mod disk;
pub mod error;
pub mod remote;

pub use disk::DiskStorage;
pub use error::StorageError;
pub use remote::{RemoteConfig, RemoteStorage};

use bytes::Bytes;

/// Destination for uploaded binary content, chosen once at startup.
///
/// `store` accepts one attachment and returns the reference URL under which
/// the bytes are retrievable by plain GET as soon as the call returns. Each
/// call generates its own name, so two stores of the same file never collide.
#[async_trait::async_trait]
pub trait StorageBackend: Send + Sync {
    async fn store(
        &self,
        field_name: &str,
        original_filename: &str,
        data: Bytes,
    ) -> Result<String, StorageError>;
}
