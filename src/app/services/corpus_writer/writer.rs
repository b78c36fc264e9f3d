//! Core corpus writer implementation
//!
//! Buffers the entire corpus as one JSON array and writes it in a single
//! operation, creating the output directory if it does not exist.

use std::path::Path;

use tracing::{debug, info};

use crate::app::models::Record;
use crate::{CorpusError, Result};

/// Writer for the converted JSON corpus
#[derive(Debug)]
pub struct CorpusWriter {
    pretty: bool,
}

impl CorpusWriter {
    /// Create a writer producing human-readable, indented output
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Create a writer with the output style set explicitly
    pub fn with_pretty(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Serialize all records as one JSON array and write them to disk.
    ///
    /// The parent directory is created if missing. Nothing reaches disk
    /// until the whole corpus has been serialized.
    pub fn write_corpus(&self, records: &[Record], output_path: &Path) -> Result<WriteStats> {
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| {
                    CorpusError::OutputDirectoryFailed {
                        path: parent.to_path_buf(),
                        source,
                    }
                })?;
            }
        }

        let mut json = if self.pretty {
            serde_json::to_string_pretty(records)?
        } else {
            serde_json::to_string(records)?
        };
        json.push('\n');

        let bytes_written = json.len();
        debug!(
            "Serialized {} records into {}",
            records.len(),
            WriteStats::format_bytes(bytes_written)
        );

        std::fs::write(output_path, json).map_err(|source| CorpusError::WriteFailed {
            path: output_path.to_path_buf(),
            source,
        })?;

        info!(
            "Wrote {} records to {}",
            records.len(),
            output_path.display()
        );

        Ok(WriteStats {
            records_written: records.len(),
            bytes_written,
        })
    }
}

impl Default for CorpusWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Writing statistics for reporting and diagnostics
#[derive(Debug, Clone, Default)]
pub struct WriteStats {
    /// Number of records written to the corpus
    pub records_written: usize,

    /// Total bytes written to storage
    pub bytes_written: usize,
}

impl WriteStats {
    /// Format bytes in human-readable format
    pub fn format_bytes(bytes: usize) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}
