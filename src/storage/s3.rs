use crate::error::{ArchiveError, ConfigError};
use crate::prelude::*;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::{config::Region, Client};
use tracing::info;

use super::{ObjectClient, PutAck};

pub struct S3Client {
    client: Client,
}

impl S3Client {
    pub async fn new(region: String) -> Result<Self> {
        let config = aws_config::defaults(aws_config::BehaviorVersion::v2024_03_28())
            .region(Region::new(region))
            .load()
            .await;

        if config.credentials_provider().is_none() {
            return Err(ConfigError::S3Config("no AWS credentials resolved".to_string()).into());
        }

        Ok(Self {
            client: Client::new(&config),
        })
    }
}

impl ObjectClient for S3Client {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: &[u8],
        content_type: &str,
    ) -> Result<PutAck, ArchiveError> {
        let output = self
            .client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body.to_vec()))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| ArchiveError::Transport(e.to_string()))?;

        info!("Uploaded metric batch to S3: {}", key);
        Ok(PutAck {
            e_tag: output.e_tag().map(str::to_string),
        })
    }
}
