use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OcmError {
    #[error("bundled asset not found: {0} (the installation is incomplete)")]
    MissingAsset(PathBuf),

    #[error("home directory not found: set HOME environment variable")]
    HomeNotFound,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OcmError>;
