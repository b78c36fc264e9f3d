//! Application constants for the bibcorpus converter
//!
//! This module contains the entry syntax markers, output schema names,
//! and default values used throughout the converter.

// =============================================================================
// Entry Syntax Markers
// =============================================================================

/// Character introducing a bibliographic entry
pub const ENTRY_MARKER: char = '@';

/// Character introducing a line comment (consumed through end of line)
pub const COMMENT_MARKER: char = '%';

/// Opening delimiter of an entry's field list and of braced values
pub const BRACE_OPEN: char = '{';

/// Closing delimiter of an entry's field list and of braced values
pub const BRACE_CLOSE: char = '}';

/// Delimiter of quoted field values
pub const QUOTE_DELIMITER: char = '"';

/// Escape character inside field values
pub const ESCAPE_CHAR: char = '\\';

/// Separator between the citation key and fields, and between fields
pub const FIELD_SEPARATOR: char = ',';

/// Separator between a field name and its value
pub const FIELD_ASSIGN: char = '=';

// =============================================================================
// Output Schema Constants
// =============================================================================

/// JSON key carrying the lowercased entry type (e.g. "article")
pub const ENTRY_TYPE_KEY: &str = "ENTRYTYPE";

/// JSON key carrying the citation key
pub const ID_KEY: &str = "ID";

/// Field name inspected for the per-year histogram
pub const YEAR_FIELD: &str = "year";

/// Default output location for the converted corpus
pub const DEFAULT_OUTPUT_PATH: &str = "data/corpus.json";

// =============================================================================
// Buffer and Progress Configuration
// =============================================================================

/// Initial capacity for token and value buffers
pub const VALUE_BUFFER_CAPACITY: usize = 256;

/// Progress reporting update interval (number of processed entries)
pub const PROGRESS_UPDATE_INTERVAL: usize = 1000;

// =============================================================================
// Helper Functions
// =============================================================================

/// Check whether a year value is purely numeric and eligible for the
/// per-year histogram
pub fn is_numeric_year(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}
