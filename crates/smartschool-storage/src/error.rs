use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// The remote host only accepts a fixed set of image formats.
    #[error("unsupported file format: '{0}'")]
    UnsupportedFormat(String),

    #[error("failed to write upload: {0}")]
    Io(#[from] std::io::Error),

    #[error("media host rejected upload: {0}")]
    Rejected(String),

    #[error("media host request failed: {0}")]
    Http(#[from] reqwest::Error),
}
