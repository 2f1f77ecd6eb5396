use super::{Fetch, FetchError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Local file source
pub struct LocalFileFetcher {
    path: PathBuf,
    display: String,
}

impl LocalFileFetcher {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            display: path.display().to_string(),
        }
    }
}

#[async_trait]
impl Fetch for LocalFileFetcher {
    async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        let data = tokio::fs::read(&self.path).await?;
        tracing::debug!(path = %self.display, bytes = data.len(), "read local archive");
        Ok(data)
    }

    fn source(&self) -> &str {
        &self.display
    }
}
