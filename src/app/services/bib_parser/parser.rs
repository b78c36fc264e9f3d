//! Core bibliography parser implementation
//!
//! This module provides the main parser orchestration, handling file
//! reading, the entry-by-entry parse loop, and statistics collection.

use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use super::entry_parser::parse_entry;
use super::scanner::Scanner;
use super::stats::{ParseOutcome, ParseResult, RunStatistics};
use crate::constants::{PROGRESS_UPDATE_INTERVAL, YEAR_FIELD, is_numeric_year};
use crate::{CorpusError, Result};

/// Fault-tolerant parser for bibliography files
///
/// The parser never aborts on malformed entries: structural errors are
/// recovered by scanning forward, the offending entry or field is
/// disregarded, and the counts are reported in the run statistics.
#[derive(Debug)]
pub struct BibParser {
    show_progress: bool,
}

impl BibParser {
    /// Create a new parser with progress reporting enabled
    pub fn new() -> Self {
        Self {
            show_progress: true,
        }
    }

    /// Create a parser with progress reporting set explicitly
    pub fn with_progress(show_progress: bool) -> Self {
        Self { show_progress }
    }

    /// Parse a bibliography file and return records with statistics
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing bibliography file: {}", file_path.display());

        let content =
            std::fs::read_to_string(file_path).map_err(|source| CorpusError::ReadFailed {
                path: file_path.to_path_buf(),
                source,
            })?;

        Ok(self.parse_str(&content))
    }

    /// Parse bibliography text already in memory.
    ///
    /// Never fails: malformed entries are disregarded and counted, and an
    /// empty input yields an empty result with zeroed statistics.
    pub fn parse_str(&self, content: &str) -> ParseResult {
        let spinner = if self.show_progress {
            Some(create_spinner("Parsing entries..."))
        } else {
            None
        };

        let mut scanner = Scanner::new(content);
        let mut stats = RunStatistics::new();
        let mut records = Vec::new();

        loop {
            match parse_entry(&mut scanner) {
                ParseOutcome::Parsed(record) => {
                    if let Some(year) = record.field(YEAR_FIELD) {
                        if !is_numeric_year(year) {
                            warn!("Invalid year format '{}' in entry '{}'", year, record.id);
                        }
                    }
                    stats.record_valid(&record);
                    records.push(record);
                }
                ParseOutcome::Skipped => stats.record_disregarded(),
                ParseOutcome::EndOfStream => break,
            }

            if stats.processed % PROGRESS_UPDATE_INTERVAL == 0 {
                debug!("Processed {} entries...", stats.processed);
                if let Some(ref pb) = spinner {
                    pb.set_message(format!("Parsed {} entries...", stats.processed));
                }
            }
        }

        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }

        info!(
            "Parsed {} valid entries from {} total ({} disregarded)",
            stats.valid, stats.processed, stats.disregarded
        );

        ParseResult { records, stats }
    }
}

impl Default for BibParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a simple spinner for the indeterminate parse phase
fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
