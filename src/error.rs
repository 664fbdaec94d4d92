use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced while turning a Twine 2 HTML archive into a story.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("not a Twine 2-style file")]
    NotTwine2,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
