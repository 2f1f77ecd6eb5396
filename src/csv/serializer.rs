//! [`TabularDataset`] back to comma-separated text, and export to disk.

use std::borrow::Cow;
use std::path::Path;

use super::parser::{DELIMITER, QUOTE};
use super::record::{Field, TabularDataset};

/// File name used when an export target is not given
pub const DEFAULT_EXPORT_NAME: &str = "export.csv";

/// Serialize a dataset to CSV text.
///
/// The header comes from the key order of the first record, not from
/// `dataset.columns`, so columns missing from the first record are not
/// exported. Missing cells and [`Field::Empty`] become empty cells. Text
/// containing a comma or quote is quoted with inner quotes doubled. Lines
/// are joined with `\n` without a trailing newline; an empty dataset gives
/// an empty string.
pub fn serialize(dataset: &TabularDataset) -> String {
    let Some(first) = dataset.records.first() else {
        return String::new();
    };
    let headers: Vec<&str> = first.keys().collect();

    let mut lines = Vec::with_capacity(dataset.records.len() + 1);
    lines.push(headers.join(","));

    for record in &dataset.records {
        let cells: Vec<Cow<'_, str>> = headers
            .iter()
            .map(|header| match record.get(header) {
                Some(field) => render(field),
                None => Cow::Borrowed(""),
            })
            .collect();
        lines.push(cells.join(","));
    }

    lines.join("\n")
}

fn render(field: &Field) -> Cow<'_, str> {
    match field {
        Field::Text(s) if s.contains(DELIMITER) || s.contains(QUOTE) => {
            Cow::Owned(format!("\"{}\"", s.replace('"', "\"\"")))
        }
        Field::Text(s) => Cow::Borrowed(s),
        Field::Number(n) => Cow::Owned(n.to_string()),
        Field::Empty => Cow::Borrowed(""),
    }
}

/// Write the serialized dataset to `path`.
///
/// Returns `Ok(false)` without touching the filesystem when the dataset has
/// no records.
pub async fn export_csv(dataset: &TabularDataset, path: &Path) -> std::io::Result<bool> {
    if dataset.is_empty() {
        tracing::info!(path = %path.display(), "nothing to export");
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    tokio::fs::write(path, serialize(dataset)).await?;
    tracing::info!(path = %path.display(), records = dataset.len(), "exported CSV");
    Ok(true)
}
