//! The ingestion pipeline: fetch, unzip, decode, parse.

use std::sync::Arc;

use crate::csv::{TabularDataset, parse};
use crate::error::Result;
use crate::io::Fetch;
use crate::zip::extract_text;

/// Turn raw archive bytes into a dataset.
///
/// Fails when the archive cannot be read; an archive whose CSV has no valid
/// rows yields an empty dataset instead.
pub fn ingest(archive: &[u8]) -> Result<TabularDataset> {
    let text = extract_text(archive)?;
    Ok(parse(&text))
}

/// Loads a CSV table from a zipped source.
pub struct TableLoader<F: Fetch> {
    fetcher: Arc<F>,
}

impl<F: Fetch> TableLoader<F> {
    pub fn new(fetcher: Arc<F>) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &Arc<F> {
        &self.fetcher
    }

    /// Fetch the archive and return the decoded text of its first entry.
    pub async fn load_text(&self) -> Result<String> {
        let result = self.fetch_text().await;
        if let Err(ref e) = result {
            tracing::error!(source = self.fetcher.source(), "Error loading CSV from zip: {e}");
        }
        result
    }

    /// Fetch the archive and parse its first entry as CSV.
    pub async fn load(&self) -> Result<TabularDataset> {
        let text = self.load_text().await?;
        let dataset = parse(&text);
        tracing::info!(
            source = self.fetcher.source(),
            columns = dataset.columns.len(),
            records = dataset.len(),
            "loaded table"
        );
        Ok(dataset)
    }

    async fn fetch_text(&self) -> Result<String> {
        let archive = self.fetcher.fetch().await?;
        extract_text(&archive)
    }
}
