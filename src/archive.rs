use chrono::{DateTime, Datelike, Utc};

use crate::error::ArchiveError;
use crate::storage::ObjectClient;

const CONTENT_TYPE_JSON: &str = "application/json";

/// Builds the storage key addressing one archived batch:
/// `<year>/<month>/<day>/<hostname>/<unix-seconds>.json`.
///
/// Keys for a fixed hostname sort lexicographically in time order. Two
/// batches for the same host within the same second produce the same key,
/// so the later upload overwrites the earlier object.
pub fn archive_key(hostname: &str, now: DateTime<Utc>) -> String {
    format!(
        "{year:04}/{month:02}/{day:02}/{hostname}/{timestamp}.json",
        year = now.year(),
        month = now.month(),
        day = now.day(),
        timestamp = now.timestamp(),
    )
}

/// Uploads serialized metric batches to a fixed bucket, one put per flush
/// cycle. The client is injected once at construction; `None` means
/// initialization never succeeded and every post fails fast with
/// [`ArchiveError::ClientUninitialized`].
pub struct ArchiveSink<C> {
    client: Option<C>,
    bucket: String,
}

impl<C: ObjectClient> ArchiveSink<C> {
    pub fn new(client: Option<C>, bucket: String) -> Self {
        Self { client, bucket }
    }

    /// Posts one batch under a fresh archive key.
    ///
    /// The payload is borrowed; the caller keeps ownership of whatever
    /// backs it. No retry or backoff happens here: a client failure is
    /// returned to the caller unmodified.
    pub async fn post(&self, hostname: &str, payload: &[u8]) -> Result<(), ArchiveError> {
        let client = self
            .client
            .as_ref()
            .ok_or(ArchiveError::ClientUninitialized)?;

        let key = archive_key(hostname, Utc::now());
        client
            .put_object(&self.bucket, &key, payload, CONTENT_TYPE_JSON)
            .await?;

        Ok(())
    }
}
