use std::path::PathBuf;

use async_trait::async_trait;

use crate::config::public_url;
use crate::error::StorageError;
use crate::ObjectStore;

/// Stores objects as files in a local directory.
pub struct LocalStore {
    dir: PathBuf,
    public_url: String,
}

impl LocalStore {
    /// Create the store, making sure the directory exists.
    pub async fn new(dir: PathBuf, public_url: String) -> Result<Self, StorageError> {
        tokio::fs::create_dir_all(&dir).await?;
        Ok(Self { dir, public_url })
    }
}

#[async_trait]
impl ObjectStore for LocalStore {
    async fn put(&self, key: &str, bytes: Vec<u8>, _content_type: &str) -> Result<String, StorageError> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(StorageError::Config(format!("Invalid object key '{key}'")));
        }
        let path = self.dir.join(key);
        tokio::fs::write(&path, &bytes).await?;
        tracing::debug!(path = %path.display(), size = bytes.len(), "Wrote local object");
        Ok(public_url(&self.public_url, key))
    }

    fn name(&self) -> &'static str {
        "local"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn put_writes_file_and_returns_url() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("uploads");
        let store = LocalStore::new(dir.clone(), "http://localhost:3000/uploads/".into())
            .await
            .unwrap();

        let url = store.put("1-abc.png", vec![1, 2, 3], "image/png").await.unwrap();

        assert_eq!(url, "http://localhost:3000/uploads/1-abc.png");
        assert_eq!(std::fs::read(dir.join("1-abc.png")).unwrap(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn put_rejects_path_traversal() {
        let tmp = tempfile::tempdir().unwrap();
        let store = LocalStore::new(tmp.path().to_path_buf(), "http://x".into())
            .await
            .unwrap();

        let result = store.put("../escape.png", vec![0], "image/png").await;
        assert_matches!(result, Err(StorageError::Config(_)));
    }
}
