//! Error types for changelog generation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChangelogError>;

#[derive(Error, Debug)]
pub enum ChangelogError {
    /// git could not be run, failed, or produced undecodable output.
    /// Nothing has been written when this is returned.
    #[error("history extraction failed: {0}")]
    Extraction(String),

    /// The destination could not be created or written. A truncated or
    /// partial file may remain at `path`.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Neither root variable was set and the executable's own directory
    /// could not be determined.
    #[error("cannot determine the directory of the running executable: {0}")]
    OwnDirectory(#[source] std::io::Error),
}
