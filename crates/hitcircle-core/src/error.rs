use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("No chart file found in {0}")]
    ChartNotFound(PathBuf),

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid replay: {0}")]
    InvalidReplay(String),

    #[error("Not an archive file: {0}")]
    InvalidArchive(PathBuf),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParseError(e.message().to_string())
    }
}
