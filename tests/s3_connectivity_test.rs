use dotenv::dotenv;
use metrics_archive::archive::ArchiveSink;
use metrics_archive::storage::S3Client;
use std::env;

#[tokio::test]
#[ignore = "requires AWS credentials and a reachable bucket"]
async fn test_s3_connectivity() {
    // Load the .env file
    dotenv().ok();

    let bucket = env::var("AWS_S3_BUCKET").expect("AWS_S3_BUCKET must be set");
    let region = env::var("AWS_REGION").expect("AWS_REGION must be set");

    println!("Using bucket: {}", bucket); // Debug print

    let client = S3Client::new(region)
        .await
        .expect("Failed to create S3 client");
    let sink = ArchiveSink::new(Some(client), bucket);

    let batch = br#"[{"name":"connectivity.check","value":1.0,"tags":[],"timestamp":0}]"#;
    sink.post("testbox", batch)
        .await
        .expect("Failed to post test batch");
    println!("Successfully archived test batch to S3");
}
