use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollectError {
    #[error("Root directory not found or not a directory: {}", path.display())]
    RootNotFound { path: PathBuf },

    #[error("No included extensions given (at least one is required)")]
    NoExtensions,

    #[error("Traversal failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
