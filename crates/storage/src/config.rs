use std::path::PathBuf;

use crate::error::StorageError;

/// Where uploaded images live.
#[derive(Debug, Clone)]
pub enum StorageBackend {
    /// Files written under `dir`, reachable below `public_url`.
    Local { dir: PathBuf, public_url: String },
    /// Objects written to an S3-compatible bucket, reachable below `public_url`.
    S3 {
        bucket: String,
        region: String,
        endpoint: Option<String>,
        public_url: String,
        /// Static keys; `None` falls back to the default AWS credential chain.
        credentials: Option<S3Credentials>,
    },
}

/// Static S3 access keys, as issued for an R2 API token.
#[derive(Clone, PartialEq, Eq)]
pub struct S3Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
}

impl S3Credentials {
    /// Pair up the two keys. Both or neither must be given.
    pub fn from_parts(
        access_key_id: Option<String>,
        secret_access_key: Option<String>,
    ) -> Result<Option<Self>, StorageError> {
        let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        match (non_empty(access_key_id), non_empty(secret_access_key)) {
            (Some(access_key_id), Some(secret_access_key)) => Ok(Some(Self {
                access_key_id,
                secret_access_key,
            })),
            (None, None) => Ok(None),
            _ => Err(StorageError::Config(
                "S3_ACCESS_KEY_ID and S3_SECRET_ACCESS_KEY must be set together".into(),
            )),
        }
    }
}

impl std::fmt::Debug for S3Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"[redacted]")
            .finish()
    }
}

/// Storage configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
}

impl StorageConfig {
    /// Load from the environment.
    ///
    /// | Env Var            | Default                          |
    /// |--------------------|----------------------------------|
    /// | `STORAGE_BACKEND`  | `local`                          |
    /// | `LOCAL_UPLOAD_DIR` | `storage/uploads`                |
    /// | `LOCAL_PUBLIC_URL` | `http://localhost:3000/uploads`  |
    /// | `S3_BUCKET`        | `archi-match-photos`             |
    /// | `S3_REGION`        | `auto`                           |
    /// | `S3_ENDPOINT`      | none                             |
    /// | `S3_PUBLIC_URL`    | required when the backend is s3  |
    /// | `S3_ACCESS_KEY_ID` | none (default AWS chain)         |
    /// | `S3_SECRET_ACCESS_KEY` | none, paired with the key id |
    pub fn from_env() -> Result<Self, StorageError> {
        let backend = std::env::var("STORAGE_BACKEND").unwrap_or_else(|_| "local".into());

        let backend = match backend.as_str() {
            "local" => StorageBackend::Local {
                dir: std::env::var("LOCAL_UPLOAD_DIR")
                    .unwrap_or_else(|_| "storage/uploads".into())
                    .into(),
                public_url: std::env::var("LOCAL_PUBLIC_URL")
                    .unwrap_or_else(|_| "http://localhost:3000/uploads".into()),
            },
            "s3" => StorageBackend::S3 {
                bucket: std::env::var("S3_BUCKET").unwrap_or_else(|_| "archi-match-photos".into()),
                region: std::env::var("S3_REGION").unwrap_or_else(|_| "auto".into()),
                endpoint: std::env::var("S3_ENDPOINT").ok().filter(|s| !s.is_empty()),
                public_url: std::env::var("S3_PUBLIC_URL")
                    .map_err(|_| StorageError::Config("S3_PUBLIC_URL must be set for the s3 backend".into()))?,
                credentials: S3Credentials::from_parts(
                    std::env::var("S3_ACCESS_KEY_ID").ok(),
                    std::env::var("S3_SECRET_ACCESS_KEY").ok(),
                )?,
            },
            other => {
                return Err(StorageError::Config(format!(
                    "Unknown STORAGE_BACKEND '{other}' (expected 'local' or 's3')"
                )))
            }
        };

        Ok(Self { backend })
    }

    /// Local directory to serve statically, if the local backend is active.
    pub fn local_dir(&self) -> Option<&PathBuf> {
        match &self.backend {
            StorageBackend::Local { dir, .. } => Some(dir),
            StorageBackend::S3 { .. } => None,
        }
    }
}

/// Join a base URL and a key with exactly one slash.
pub(crate) fn public_url(base: &str, key: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), key.trim_start_matches('/'))
}
