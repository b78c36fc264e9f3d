//! Command-line argument definitions for the bibcorpus converter
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::constants::DEFAULT_OUTPUT_PATH;
use crate::{CorpusError, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the bibcorpus converter
///
/// Converts BibTeX bibliography files into a JSON corpus, recovering from
/// malformed entries instead of aborting on the first syntax error.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "bibcorpus",
    version,
    about = "Convert BibTeX bibliographies into a JSON corpus",
    long_about = "Parses BibTeX (.bib) files with fault-tolerant error recovery, keeping every \
                  well-formed entry while skipping the ones it cannot read, and writes the \
                  result as a JSON array ready for scripting and data analysis."
)]
pub struct Args {
    /// Path to the BibTeX file to convert
    ///
    /// The whole file is read into memory before parsing, so very large
    /// bibliographies need a correspondingly large amount of RAM.
    #[arg(value_name = "BIB_FILE", help = "Path to the BibTeX (.bib) file to convert")]
    pub bib_file: PathBuf,

    /// Output path for the generated JSON corpus
    ///
    /// Parent directories are created if they don't exist.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = DEFAULT_OUTPUT_PATH,
        help = "Output path for the generated JSON corpus"
    )]
    pub output_path: PathBuf,

    /// Write compact JSON instead of pretty-printed
    ///
    /// By default the corpus is pretty-printed for readability. This flag
    /// produces a single-line array, which is smaller and faster to load.
    #[arg(long = "compact", help = "Write compact JSON instead of pretty-printed")]
    pub compact: bool,

    /// Output format for the run summary
    #[arg(
        long = "summary-format",
        value_enum,
        default_value = "human",
        help = "Output format for the run summary"
    )]
    pub summary_format: SummaryFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options for the run summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    /// Human-readable summary with per-field and per-year breakdowns
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.bib_file.exists() {
            return Err(CorpusError::configuration(format!(
                "Input file does not exist: {}",
                self.bib_file.display()
            )));
        }

        if !self.bib_file.is_file() {
            return Err(CorpusError::configuration(format!(
                "Input path is not a file: {}",
                self.bib_file.display()
            )));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show the progress spinner (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl Default for Args {
    fn default() -> Self {
        Self {
            bib_file: PathBuf::new(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            compact: false,
            summary_format: SummaryFormat::Human,
            verbose: 0,
            quiet: false,
        }
    }
}
