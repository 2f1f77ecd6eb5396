//! Main entry point for the zipcsv CLI application.
//!
//! Loads a zipped CSV table from a local file or HTTP URL, then lists it,
//! pipes it to stdout or exports it to a file.

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tracing_subscriber::EnvFilter;

use zipcsv::cli::Mode;
use zipcsv::{Cli, Fetch, HttpFetcher, LocalFileFetcher, TableLoader, TabularDataset, export_csv, serialize};

/// Application entry point.
///
/// Parses command-line arguments and dispatches to the appropriate fetcher
/// based on whether the input is a local file or HTTP URL.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so piped CSV on stdout stays clean
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if cli.is_http_url() {
        let fetcher = Arc::new(HttpFetcher::with_options(
            cli.file.clone(),
            Duration::from_secs(cli.timeout),
            cli.retries,
        )?);

        process_table(fetcher.clone(), &cli).await?;

        // Display network transfer statistics for HTTP sources
        if !cli.is_quiet() {
            eprintln!("\nTotal bytes transferred: {}", format_size(fetcher.transferred_bytes()));
        }
    } else {
        let fetcher = Arc::new(LocalFileFetcher::new(Path::new(&cli.file)));
        process_table(fetcher, &cli).await?;
    }

    Ok(())
}

/// Load the table and run the requested mode.
///
/// - List mode (`-l` or `-v`, and the default): columns and record count,
///   or every record when verbose
/// - Pipe mode (`-p`): write the table as CSV to stdout
/// - Export mode (`-d`): write the table as CSV to a file
async fn process_table<F: Fetch + 'static>(fetcher: Arc<F>, cli: &Cli) -> Result<()> {
    let loader = TableLoader::new(fetcher);
    let dataset = loader.load().await?;

    match cli.mode() {
        Mode::List { verbose } => list_table(&dataset, verbose),
        Mode::Pipe => {
            let mut stdout = tokio::io::stdout();
            let mut csv = serialize(&dataset);
            if !csv.is_empty() {
                csv.push('\n');
            }
            stdout.write_all(csv.as_bytes()).await?;
            stdout.flush().await?;
        }
        Mode::Export(path) => export_table(&dataset, Path::new(path), cli).await?,
    }

    Ok(())
}

/// Print a summary of the dataset.
///
/// The simple format prints one column name per line followed by the record
/// count. The verbose format also prints every record as `name=value` pairs.
fn list_table(dataset: &TabularDataset, verbose: bool) {
    for column in &dataset.columns {
        println!("{}", column);
    }
    println!("{}", "-".repeat(40));
    println!("{} columns, {} records", dataset.columns.len(), dataset.len());

    if verbose {
        println!("{}", "-".repeat(40));
        for (index, record) in dataset.records.iter().enumerate() {
            let cells: Vec<String> = record
                .iter()
                .map(|(name, field)| format!("{}={}", name, field))
                .collect();
            println!("{:>6}  {}", index + 1, cells.join(", "));
        }
    }
}

/// Export the dataset, honouring the overwrite flag.
async fn export_table(dataset: &TabularDataset, path: &Path, cli: &Cli) -> Result<()> {
    if path.exists() && !cli.overwrite {
        if !cli.is_quiet() {
            eprintln!("Skipping: {} (use -o to overwrite)", path.display());
        }
        return Ok(());
    }

    let written = export_csv(dataset, path).await?;
    if !cli.is_quiet() {
        if written {
            println!("  exporting: {} ({} records)", path.display(), dataset.len());
        } else {
            println!("  nothing to export: table has no records");
        }
    }

    Ok(())
}

/// Format a byte size into a human-readable string.
///
/// Automatically selects the appropriate unit (bytes, KB, MB, GB)
/// based on the size magnitude.
fn format_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}
