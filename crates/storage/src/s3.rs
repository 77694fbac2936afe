use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

use crate::config::{public_url, S3Credentials};
use crate::error::StorageError;
use crate::ObjectStore;

/// Stores objects in an S3-compatible bucket.
pub struct S3Store {
    client: Client,
    bucket: String,
    public_url: String,
}

impl S3Store {
    /// Build a client from the default AWS credential chain, or from static
    /// `credentials` when given (R2 tokens). A custom `endpoint` switches to
    /// path-style addressing.
    pub async fn connect(
        bucket: &str,
        region: &str,
        endpoint: Option<&str>,
        credentials: Option<&S3Credentials>,
        public_base: &str,
    ) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(Region::new(region.to_string()));

        if let Some(creds) = credentials {
            loader = loader.credentials_provider(Credentials::new(
                creds.access_key_id.clone(),
                creds.secret_access_key.clone(),
                None,
                None,
                "archimatch-config",
            ));
        }

        let shared = loader.load().await;
        let mut builder = aws_sdk_s3::config::Builder::from(&shared);
        if let Some(endpoint) = endpoint {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        tracing::info!(bucket, region, endpoint = ?endpoint, "S3 object store configured");

        Self {
            client: Client::from_conf(builder.build()),
            bucket: bucket.to_string(),
            public_url: public_base.to_string(),
        }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<String, StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| StorageError::Remote(e.to_string()))?;
        Ok(public_url(&self.public_url, key))
    }

    fn name(&self) -> &'static str {
        "s3"
    }
}
