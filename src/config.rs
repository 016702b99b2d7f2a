use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub hostname: Option<String>,
    pub flush_interval: u64,
    pub spool_dir: PathBuf,
    pub s3: Option<S3Settings>,
}

#[derive(Debug, Deserialize)]
pub struct S3Settings {
    pub region: String,
    pub bucket: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(File::new("config/default", FileFormat::Toml))
            // Add in the current environment file
            // Default to 'development' env
            // Note that this file is _optional_
            .add_source(File::new(&format!("config/{}", env), FileFormat::Toml).required(false))
            .build()?;

        // You can deserialize (and thus freeze) the entire configuration
        s.try_deserialize()
    }

    /// Hostname recorded in archive keys. Falls back to the HOSTNAME
    /// environment variable when the config file leaves it unset.
    pub fn resolved_hostname(&self) -> String {
        self.hostname
            .clone()
            .or_else(|| std::env::var("HOSTNAME").ok())
            .unwrap_or_else(|| "localhost".to_string())
    }
}
