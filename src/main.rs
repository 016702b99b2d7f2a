use dotenv::dotenv;
use metrics_archive::archive::ArchiveSink;
use metrics_archive::config::Settings;
use metrics_archive::error::ArchiveError;
use metrics_archive::prelude::*;
use metrics_archive::storage::{ObjectClient, S3Client};
use std::path::Path;
use std::time::Duration;
use tokio::time;
use tracing::{error, info, warn};

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    dotenv().ok();
    info!("Starting metrics archive sink");

    let settings = Settings::new()?;
    let hostname = settings.resolved_hostname();
    std::fs::create_dir_all(&settings.spool_dir)?;

    let (client, bucket) = match &settings.s3 {
        Some(s3) => match S3Client::new(s3.region.clone()).await {
            Ok(client) => {
                info!("S3 client initialized for bucket {}", s3.bucket);
                (Some(client), s3.bucket.clone())
            }
            Err(e) => {
                warn!("S3 client initialization failed, archiving disabled: {}", e);
                (None, s3.bucket.clone())
            }
        },
        None => {
            warn!("No S3 configuration present, archiving disabled");
            (None, String::new())
        }
    };
    let sink = ArchiveSink::new(client, bucket);

    let mut interval = time::interval(Duration::from_secs(settings.flush_interval));
    loop {
        interval.tick().await;
        if let Err(e) = flush_spool(&sink, &settings.spool_dir, &hostname).await {
            error!("Spool flush failed: {}", e);
        }
    }
}

/// Drains one flush cycle's worth of spooled batches. Each `.json` file
/// in the spool directory is posted independently; a transport failure
/// leaves the file in place for the next cycle, while an uninitialized
/// client drops the batch after logging once.
async fn flush_spool<C: ObjectClient>(
    sink: &ArchiveSink<C>,
    spool_dir: &Path,
    hostname: &str,
) -> Result<()> {
    let mut entries = tokio::fs::read_dir(spool_dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }

        let payload = tokio::fs::read(&path).await?;
        match sink.post(hostname, &payload).await {
            Ok(()) => {
                tokio::fs::remove_file(&path).await?;
            }
            Err(e @ ArchiveError::ClientUninitialized) => {
                warn!("Dropping batch {}: {}", path.display(), e);
                tokio::fs::remove_file(&path).await?;
            }
            Err(e) => {
                error!("Failed to archive {}: {}", path.display(), e);
            }
        }
    }
    Ok(())
}
