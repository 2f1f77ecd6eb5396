//! Error types shared by the archive, decompression and fetch stages.

use std::io;

use thiserror::Error;

use crate::io::FetchError;

/// Result alias used across the library.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can abort an ingestion attempt.
///
/// Row-shape problems in the CSV text are not errors: offending rows are
/// dropped with a warning and parsing continues.
#[derive(Debug, Error)]
pub enum Error {
    /// No local file header signature was found in the scanned range.
    #[error("no valid file found in zip archive")]
    ArchiveFormat,

    /// The header points at payload bytes past the end of the buffer.
    #[error("entry payload at offset {offset} with {size} bytes exceeds archive length {len}")]
    PayloadOutOfBounds { offset: usize, size: usize, len: usize },

    #[error("unsupported compression method: {0}")]
    UnsupportedCompression(u16),

    #[error("deflate stream is malformed")]
    Decompression(#[source] io::Error),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl Error {
    /// True for both ways an archive can be structurally unreadable.
    pub fn is_archive_format(&self) -> bool {
        matches!(self, Error::ArchiveFormat | Error::PayloadOutOfBounds { .. })
    }
}
