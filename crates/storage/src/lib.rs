//! Object storage for uploaded images.
//!
//! Two backends share the [`ObjectStore`] trait: a local directory served
//! by the API itself, and an S3-compatible bucket (AWS S3, Cloudflare R2,
//! MinIO) with a public base URL.

pub mod config;
pub mod error;
pub mod local;
pub mod s3;
pub mod upload;

use async_trait::async_trait;

pub use config::{S3Credentials, StorageBackend, StorageConfig};
pub use error::StorageError;
pub use local::LocalStore;
pub use s3::S3Store;
pub use upload::{upload_image, UploadedImage};

/// A flat key/value store for public images.
///
/// Implementations must be object-safe so the API can hold an
/// `Arc<dyn ObjectStore>` chosen at startup.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `bytes` under `key` and return the public URL of the object.
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<String, StorageError>;

    /// Short backend name for logs.
    fn name(&self) -> &'static str;
}

/// Build the backend selected by the configuration.
pub async fn from_config(config: &StorageConfig) -> Result<std::sync::Arc<dyn ObjectStore>, StorageError> {
    match &config.backend {
        StorageBackend::Local { dir, public_url } => {
            Ok(std::sync::Arc::new(LocalStore::new(dir.clone(), public_url.clone()).await?))
        }
        StorageBackend::S3 {
            bucket,
            region,
            endpoint,
            public_url,
            credentials,
        } => Ok(std::sync::Arc::new(
            S3Store::connect(bucket, region, endpoint.as_deref(), credentials.as_ref(), public_url).await,
        )),
    }
}
