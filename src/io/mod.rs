//! Byte sources that deliver a raw archive to the loader.

mod http;
mod local;

pub use http::HttpFetcher;
pub use local::LocalFileFetcher;

use async_trait::async_trait;
use thiserror::Error;

/// Failures reported by a [`Fetch`] implementation.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to fetch {url}: {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("max retries exceeded after {attempts} attempts for {url}")]
    RetriesExceeded { url: String, attempts: u32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Trait for sources that deliver a whole archive in one buffer
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Fetch every byte of the archive
    async fn fetch(&self) -> Result<Vec<u8>, FetchError>;

    /// Human readable origin, used in diagnostics
    fn source(&self) -> &str;
}
