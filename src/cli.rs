use clap::Parser;

use crate::csv::DEFAULT_EXPORT_NAME;

#[derive(Parser, Debug)]
#[command(name = "zipcsv")]
#[command(version)]
#[command(about = "Load a CSV table packed in a ZIP archive from disk or HTTP", long_about = None)]
#[command(after_help = "Examples:\n  \
  zipcsv data.zip                 show columns and record count\n  \
  zipcsv -p data.zip | less       print the table as CSV\n  \
  zipcsv -d=out.csv https://example.com/teiten.zip   export a remote table")]
pub struct Cli {
    /// ZIP file path or HTTP URL
    #[arg(value_name = "FILE")]
    pub file: String,

    /// List columns and record count
    #[arg(short = 'l')]
    pub list: bool,

    /// List verbosely (every record)
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Print the table as CSV to stdout, no messages
    #[arg(short = 'p')]
    pub pipe: bool,

    /// Export the table as CSV to PATH (`-d=PATH`; bare `-d` writes export.csv)
    #[arg(
        short = 'd',
        value_name = "PATH",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = DEFAULT_EXPORT_NAME
    )]
    pub export: Option<String>,

    /// Overwrite an existing export file WITHOUT prompting
    #[arg(short = 'o')]
    pub overwrite: bool,

    /// Quiet mode (-qq => quieter)
    #[arg(short = 'q', action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// HTTP request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    pub timeout: u64,

    /// Attempts for HTTP timeouts and connection failures
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub retries: u32,
}

/// What to do with the loaded table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode<'a> {
    /// Print columns and record count, every record when verbose
    List { verbose: bool },
    /// Write the table as CSV to stdout
    Pipe,
    /// Write the table as CSV to a file
    Export(&'a str),
}

impl Cli {
    /// Listing (`-l`/`-v`) wins over pipe, pipe over export. Without any
    /// of them the table is listed.
    pub fn mode(&self) -> Mode<'_> {
        if self.list || self.verbose {
            return Mode::List {
                verbose: self.verbose,
            };
        }
        if self.pipe {
            return Mode::Pipe;
        }
        match self.export {
            Some(ref path) => Mode::Export(path),
            None => Mode::List { verbose: false },
        }
    }

    pub fn is_http_url(&self) -> bool {
        self.file.starts_with("http://") || self.file.starts_with("https://")
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet > 0 || self.pipe
    }

    pub fn is_very_quiet(&self) -> bool {
        self.quiet > 1
    }

    /// Default tracing filter when `RUST_LOG` is unset
    pub fn log_filter(&self) -> &'static str {
        if self.is_very_quiet() {
            "error"
        } else if self.verbose {
            "info"
        } else {
            "warn"
        }
    }
}
