pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Archive error: {0}")]
    Archive(#[from] ArchiveError),
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Configuration parsing error: {0}")]
    Parse(#[from] config::ConfigError),

    #[error("S3 config error: {0}")]
    S3Config(String),
}

/// Failures surfaced by a single archive post. `ClientUninitialized` is
/// distinguishable from transport failures so callers can decide whether
/// to alert or drop the batch.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ArchiveError {
    #[error("S3 client has not been initialized")]
    ClientUninitialized,

    #[error("S3 upload error: {0}")]
    Transport(String),
}
