mod s3;

pub use s3::S3Client;

use crate::error::ArchiveError;

/// Acknowledgement returned by a completed write. S3 reports a content
/// digest (ETag) for every object it accepts.
#[derive(Debug, Clone)]
pub struct PutAck {
    pub e_tag: Option<String>,
}

pub trait ObjectClient: Send + Sync {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: &[u8],
        content_type: &str,
    ) -> Result<PutAck, ArchiveError>;
}
