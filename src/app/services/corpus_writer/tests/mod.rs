//! Test helpers for corpus writer testing

use tempfile::TempDir;

use crate::app::models::Record;


/// Helper to build a couple of representative records
pub fn sample_records() -> Vec<Record> {
    let mut first = Record::new("article", "smith2020");
    first.insert_field("title", "A Study of Things");
    first.insert_field("year", "2020");

    let mut second = Record::new("book", "doe1999");
    second.insert_field("title", "The Book of Examples");

    vec![first, second]
}

/// Helper to create a temporary output directory
pub fn temp_output_dir() -> TempDir {
    TempDir::new().unwrap()
}
