//! bibcorpus library
//!
//! A Rust library for converting BibTeX bibliography files into JSON corpora
//! suitable for scripting and data analysis.
//!
//! This library provides tools for:
//! - Parsing BibTeX entries with a character-level scanner and single-slot pushback
//! - Recovering from malformed entries instead of aborting the whole run
//! - Normalizing multi-line field values into single-line strings
//! - Collecting run statistics (valid/disregarded counts, year histogram, field occurrence)
//! - Writing the corpus as a JSON array with stable key order per record

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod bib_parser;
        pub mod corpus_writer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::Record;
pub use app::services::bib_parser::{BibParser, ParseOutcome, ParseResult, RunStatistics};
pub use app::services::corpus_writer::{CorpusWriter, WriteStats};
pub use config::Config;
pub use error::{CorpusError, Result};
