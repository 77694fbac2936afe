use archimatch_core::error::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The upload was rejected before anything was written.
    #[error(transparent)]
    Rejected(#[from] CoreError),

    #[error("Storage misconfigured: {0}")]
    Config(String),

    #[error("Local storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Object store request failed: {0}")]
    Remote(String),
}
