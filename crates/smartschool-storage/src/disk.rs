use std::path::{Path, PathBuf};

use bytes::Bytes;
use chrono::Utc;
use rand::Rng;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::{StorageBackend, StorageError};

/// Writes uploads into a directory served read-only under a fixed URL prefix.
pub struct DiskStorage {
    dir: PathBuf,
    public_prefix: String,
}

impl DiskStorage {
    pub async fn new(dir: PathBuf, public_prefix: &str) -> Result<Self, StorageError> {
        fs::create_dir_all(&dir).await?;
        info!("Upload directory: {}", dir.display());
        Ok(Self {
            dir,
            public_prefix: public_prefix.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait::async_trait]
impl StorageBackend for DiskStorage {
    async fn store(
        &self,
        field_name: &str,
        original_filename: &str,
        data: Bytes,
    ) -> Result<String, StorageError> {
        // The upload directory is shared across concurrent requests; the
        // random suffix keeps names distinct even within one millisecond.
        let filename = format!(
            "{}-{}{}",
            Utc::now().timestamp_millis(),
            rand::rng().random_range(0..1_000_000_000u32),
            extension_of(original_filename),
        );

        let path = self.dir.join(&filename);
        let mut file = fs::File::create(&path).await?;
        file.write_all(&data).await?;
        file.flush().await?;

        debug!("Stored '{}' upload at {}", field_name, path.display());
        Ok(format!("{}/{}", self.public_prefix, filename))
    }
}

/// Extension of the client's filename, dot included; empty when there is none.
fn extension_of(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_preserved_with_dot() {
        assert_eq!(extension_of("photo.JPG"), ".JPG");
        assert_eq!(extension_of("archive.tar.gz"), ".gz");
        assert_eq!(extension_of("no-extension"), "");
    }
}
