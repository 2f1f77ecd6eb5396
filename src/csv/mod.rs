//! Comma-separated tables: the in-memory model, parsing and export.
//!
//! The dialect is fixed: comma delimiter, double-quote quoting with `""` as
//! an escaped quote, one record per physical line.

mod parser;
mod record;
mod serializer;

pub use parser::{DELIMITER, QUOTE, parse, parse_line};
pub use record::{Field, Record, TabularDataset};
pub use serializer::{DEFAULT_EXPORT_NAME, export_csv, serialize};
