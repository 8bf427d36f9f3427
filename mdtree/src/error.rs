//! Error types for document output

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing a built document
#[derive(Debug, Error)]
pub enum MdTreeError {
    /// Writing the document to disk failed
    #[error("Failed to write markdown to '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, MdTreeError>;
