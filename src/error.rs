//! Error types for treesvg
//!
//! Uses `thiserror` for library errors; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for treesvg operations
pub type TreeSvgResult<T> = Result<T, TreeSvgError>;

/// Main error type for treesvg operations
#[derive(Error, Debug)]
pub enum TreeSvgError {
    /// Scan root does not exist
    #[error("path not found: {path}")]
    PathNotFound { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
