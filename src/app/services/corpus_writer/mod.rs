//! JSON corpus writer for converted bibliography records
//!
//! This module serializes the full set of parsed records as a single JSON
//! array and writes it to disk in one operation, creating the output
//! directory when needed. Nothing is streamed: the corpus is buffered in
//! memory until serialization completes.
//!
//! ## Architecture
//!
//! - [`writer`] - Core CorpusWriter implementation and write statistics
//!
//! ## Usage
//!
//! ```rust
//! use std::path::Path;
//! use bibcorpus::app::models::Record;
//! use bibcorpus::app::services::corpus_writer::CorpusWriter;
//!
//! # fn example(records: Vec<Record>) -> bibcorpus::Result<()> {
//! let writer = CorpusWriter::new();
//! let stats = writer.write_corpus(&records, Path::new("data/corpus.json"))?;
//!
//! println!("Wrote {} records", stats.records_written);
//! # Ok(())
//! # }
//! ```

pub mod writer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use writer::{CorpusWriter, WriteStats};
