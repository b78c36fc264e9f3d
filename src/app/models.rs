//! Data models for bibliography records
//!
//! This module contains the core data structure for representing a parsed
//! bibliography entry, preserving field order as it appears in the source.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::constants::{ENTRY_TYPE_KEY, ID_KEY};

/// A single bibliography entry with its type, citation key, and fields.
///
/// Fields are stored in source order and serialized in that same order,
/// after the entry type and citation key. Duplicate field names are kept;
/// lookups return the first occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Entry type with the leading marker stripped, lowercased (e.g. "article")
    pub entry_type: String,
    /// Citation key identifying the entry
    pub id: String,
    fields: Vec<(String, String)>,
}

impl Record {
    /// Create a new record with no fields
    pub fn new(entry_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            entry_type: entry_type.into(),
            id: id.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field, preserving insertion order
    pub fn insert_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    /// Look up a field value by name, returning the first occurrence
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over fields in insertion order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of fields on this record
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 2))?;
        map.serialize_entry(ENTRY_TYPE_KEY, &self.entry_type)?;
        map.serialize_entry(ID_KEY, &self.id)?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let record = Record::new("article", "smith2020");
        assert_eq!(record.entry_type, "article");
        assert_eq!(record.id, "smith2020");
        assert_eq!(record.field_count(), 0);
    }

    #[test]
    fn test_field_insertion_and_lookup() {
        let mut record = Record::new("book", "jones1999");
        record.insert_field("title", "A Title");
        record.insert_field("year", "1999");

        assert_eq!(record.field("title"), Some("A Title"));
        assert_eq!(record.field("year"), Some("1999"));
        assert_eq!(record.field("author"), None);
        assert_eq!(record.field_count(), 2);
    }

    #[test]
    fn test_duplicate_fields_keep_first_on_lookup() {
        let mut record = Record::new("article", "dup2001");
        record.insert_field("note", "first");
        record.insert_field("note", "second");

        assert_eq!(record.field("note"), Some("first"));
        assert_eq!(record.field_count(), 2);
    }

    #[test]
    fn test_fields_iterate_in_insertion_order() {
        let mut record = Record::new("article", "ordered");
        record.insert_field("zebra", "z");
        record.insert_field("alpha", "a");
        record.insert_field("mid", "m");

        let names: Vec<&str> = record.fields().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["zebra", "alpha", "mid"]);
    }

    #[test]
    fn test_serialization_puts_type_and_id_first() {
        let mut record = Record::new("article", "smith2020");
        record.insert_field("year", "2020");
        record.insert_field("title", "Example");

        let json = serde_json::to_string(&record).unwrap();
        let type_pos = json.find("ENTRYTYPE").unwrap();
        let id_pos = json.find("\"ID\"").unwrap();
        let year_pos = json.find("year").unwrap();
        let title_pos = json.find("title").unwrap();

        assert!(type_pos < id_pos);
        assert!(id_pos < year_pos);
        assert!(year_pos < title_pos);
    }

    #[test]
    fn test_serialization_values() {
        let mut record = Record::new("inproceedings", "conf2015");
        record.insert_field("title", "Talk Title");

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"ENTRYTYPE":"inproceedings","ID":"conf2015","title":"Talk Title"}"#
        );
    }
}
