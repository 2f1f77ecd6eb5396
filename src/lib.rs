//! # zipcsv
//!
//! Load CSV tables distributed as single-entry ZIP archives.
//!
//! The ingestion chain scans a raw buffer for the first ZIP Local File
//! Header, decompresses its payload (STORED or raw DEFLATE), decodes the
//! bytes as UTF-8 and parses the text as comma-separated records with
//! numeric coercion. A serializer turns a dataset back into CSV for export.
//!
//! ## Features
//!
//! - Archives from the local filesystem or HTTP/HTTPS URLs
//! - STORED and DEFLATE entries, located without a Central Directory
//! - Quote-aware CSV rows; malformed rows are skipped with a warning
//! - Cells typed as numbers or text
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use zipcsv::{HttpFetcher, TableLoader};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let fetcher = Arc::new(HttpFetcher::new("https://example.com/table.zip".to_string())?);
//!     let loader = TableLoader::new(fetcher);
//!
//!     let dataset = loader.load().await?;
//!     println!("{} records in {:?}", dataset.len(), dataset.columns);
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod csv;
pub mod error;
pub mod io;
pub mod loader;
pub mod zip;

pub use cli::Cli;
pub use csv::{Field, Record, TabularDataset, export_csv, parse, serialize};
pub use error::{Error, Result};
pub use io::{Fetch, FetchError, HttpFetcher, LocalFileFetcher};
pub use loader::{TableLoader, ingest};
pub use zip::{CompressionMethod, decompress, extract_text, locate_entry};
