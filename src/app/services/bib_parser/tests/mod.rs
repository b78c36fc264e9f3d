//! Test fixtures and helpers for bibliography parser testing
//!
//! This module provides shared sample bibliographies and file helpers used
//! across the parser test modules.

use std::io::Write;
use tempfile::NamedTempFile;

mod value_reader_tests;

/// Helper to create a small well-formed bibliography
pub fn sample_bibliography() -> String {
    r#"% Sample references
@article{smith2020,
    title = {A Study of Things},
    author = {Smith, Jane and Doe, John},
    year = {2020},
    journal = {Journal of Things}
}

@book{doe1999,
    title = "The Book of Examples",
    author = "Doe, John",
    year = {1999}
}

@inproceedings{lee2021,
    title = {Conference Findings},
    year = {2021},
    booktitle = {Proceedings of Examples}
}
"#
    .to_string()
}

/// Helper to create a bibliography whose middle entry is missing its
/// opening brace
pub fn bibliography_with_broken_entry() -> String {
    r#"@article{good2020,
    title = {Fine},
    year = {2020}
}

@articlebroken, title={Lost}}

@article{also_good2021,
    title = {Also Fine},
    year = {2021}
}
"#
    .to_string()
}

/// Helper to create a temporary file with given bibliography content
pub fn create_temp_bib(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
