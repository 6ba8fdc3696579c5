//! Error type shared by the relpath-core modules

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RelpathError>;

#[derive(Debug, Error)]
pub enum RelpathError {
    /// A list file could not be opened or read as UTF-8 text.
    #[error("cannot read list file {}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output")]
    Write(#[source] io::Error),

    #[error("failed to encode output record")]
    Encode(#[from] serde_json::Error),
}
