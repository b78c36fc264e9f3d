//! Configuration management and validation.
//!
//! Provides the runtime configuration for a conversion run: input and
//! output locations, output formatting, and progress reporting.

use crate::constants::DEFAULT_OUTPUT_PATH;
use crate::error::{CorpusError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Runtime configuration for a corpus conversion run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the bibliography file to convert
    pub input_path: PathBuf,

    /// Path of the JSON corpus to produce
    pub output_path: PathBuf,

    /// Pretty-print the JSON output
    pub pretty: bool,

    /// Show a progress spinner during the entry loop
    pub show_progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::new(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            pretty: true,
            show_progress: true,
        }
    }
}

impl Config {
    /// Create a configuration for the given input file
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            ..Default::default()
        }
    }

    /// Set the output location
    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    /// Switch between pretty-printed and compact JSON output
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Enable or disable the progress spinner
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(CorpusError::configuration("Input path cannot be empty"));
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(CorpusError::configuration("Output path cannot be empty"));
        }

        Ok(())
    }
}
