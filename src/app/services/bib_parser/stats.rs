//! Parse outcomes and run statistics for bibliography conversion
//!
//! This module provides the per-invocation outcome type, the combined
//! result structure, and the counters and histograms accumulated over a
//! conversion run.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::app::models::Record;
use crate::constants::{YEAR_FIELD, is_numeric_year};

/// Outcome of one entry-parse invocation
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// A fully parsed record
    Parsed(Record),
    /// A malformed entry, skipped after recovery
    Skipped,
    /// No further input
    EndOfStream,
}

/// Parsed records together with the statistics of the run that produced them
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    /// Successfully parsed records, in source order
    pub records: Vec<Record>,

    /// Run-wide counters and histograms
    pub stats: RunStatistics,
}

/// Counters and histograms accumulated over one conversion run.
///
/// `processed == valid + disregarded` holds at every point in a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunStatistics {
    /// Entries encountered, whether or not they parsed
    pub processed: usize,

    /// Entries fully parsed and emitted
    pub valid: usize,

    /// Entries skipped after a structural failure
    pub disregarded: usize,

    /// Valid records per all-digit year value
    pub year_counts: BTreeMap<String, usize>,

    /// Valid records containing each field name
    pub field_counts: BTreeMap<String, usize>,
}

impl RunStatistics {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for a fully parsed record
    pub fn record_valid(&mut self, record: &Record) {
        self.processed += 1;
        self.valid += 1;

        if let Some(year) = record.field(YEAR_FIELD) {
            if is_numeric_year(year) {
                *self.year_counts.entry(year.to_string()).or_insert(0) += 1;
            }
        }

        // A field name repeated within one record still counts once
        let mut seen = HashSet::new();
        for (name, _) in record.fields() {
            if seen.insert(name) {
                *self.field_counts.entry(name.to_string()).or_insert(0) += 1;
            }
        }
    }

    /// Account for an entry disregarded after recovery
    pub fn record_disregarded(&mut self) {
        self.processed += 1;
        self.disregarded += 1;
    }

    /// Share of valid records carrying the given field, as a percentage
    pub fn field_percentage(&self, name: &str) -> f64 {
        if self.valid == 0 {
            return 0.0;
        }
        let count = self.field_counts.get(name).copied().unwrap_or(0);
        (count as f64 / self.valid as f64) * 100.0
    }

    /// Share of processed entries that parsed successfully, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.processed == 0 {
            0.0
        } else {
            (self.valid as f64 / self.processed as f64) * 100.0
        }
    }
}
