use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read options file '{path}'")]
    ReadOptions {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse options file '{path}': {source}")]
    ParseOptions {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Options file '{path}' has no \"class\" field")]
    MissingClass { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
