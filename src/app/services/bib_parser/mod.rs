//! Fault-tolerant parser for bibliography files
//!
//! This module converts BibTeX-style source text into records, recovering
//! from malformed input rather than aborting: a structural error skips the
//! offending entry or field, counts it, and parsing continues with the next
//! one.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Parse orchestration, file handling, and statistics collection
//! - [`scanner`] - Character cursor with single-character pushback
//! - [`value_reader`] - Token and delimited-value reading
//! - [`entry_parser`] - Per-entry state machine with error recovery
//! - [`stats`] - Parse outcomes and run statistics
//!
//! ## Usage
//!
//! ```rust
//! use bibcorpus::app::services::bib_parser::BibParser;
//!
//! let parser = BibParser::with_progress(false);
//! let result = parser.parse_str("@article{key1, title = {Hello}, year = {2020}}");
//!
//! assert_eq!(result.stats.valid, 1);
//! assert_eq!(result.records[0].field("title"), Some("Hello"));
//! ```

pub mod entry_parser;
pub mod parser;
pub mod scanner;
pub mod stats;
pub mod value_reader;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::BibParser;
pub use stats::{ParseOutcome, ParseResult, RunStatistics};
