use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DropError>;

#[derive(Error, Debug)]
pub enum DropError {
    #[error("Type hint unavailable for {path}: {source}")]
    TypeHintUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Image decoding failed: {0}")]
    DecodeFailed(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}
