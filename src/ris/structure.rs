//! RIS record data structures.
//!
//! A record keeps every tag it saw. A tag seen once holds a single value; a tag
//! seen again is promoted to an ordered sequence, so `KW` lists and two-part
//! `AB` abstracts keep their source order.

use crate::ris::tags::RisTag;
use std::collections::HashMap;

/// The value stored for one tag within a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// The tag appeared once.
    Single(String),
    /// The tag appeared two or more times, in source order.
    Multiple(Vec<String>),
}

impl FieldValue {
    /// Append another occurrence of the same tag.
    pub fn push(&mut self, value: String) {
        match self {
            FieldValue::Single(first) => {
                let first = std::mem::take(first);
                *self = FieldValue::Multiple(vec![first, value]);
            }
            FieldValue::Multiple(values) => values.push(value),
        }
    }

    /// The first value of this field.
    pub fn first(&self) -> &str {
        match self {
            FieldValue::Single(value) => value,
            FieldValue::Multiple(values) => values.first().map_or("", String::as_str),
        }
    }

    /// All values in source order.
    pub fn values(&self) -> &[String] {
        match self {
            FieldValue::Single(value) => std::slice::from_ref(value),
            FieldValue::Multiple(values) => values,
        }
    }

    pub fn len(&self) -> usize {
        self.values().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One record parsed from a RIS file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RisRecord {
    data: HashMap<RisTag, FieldValue>,
    /// 1-based line number of the record's first field, for diagnostics.
    pub(crate) line: usize,
}

impl RisRecord {
    /// Create a new empty record starting at `line`.
    pub(crate) fn new(line: usize) -> Self {
        Self {
            data: HashMap::new(),
            line,
        }
    }

    /// Store a value, promoting a repeated tag to a sequence.
    pub fn add_data(&mut self, tag: RisTag, value: String) {
        match self.data.get_mut(&tag) {
            Some(existing) => existing.push(value),
            None => {
                self.data.insert(tag, FieldValue::Single(value));
            }
        }
    }

    /// The value of a tag, `None` when the tag never appeared.
    pub fn get(&self, tag: &RisTag) -> Option<&FieldValue> {
        self.data.get(tag)
    }

    /// The first value of a tag, if it exists.
    pub fn get_first(&self, tag: &RisTag) -> Option<&str> {
        self.get(tag).map(FieldValue::first)
    }

    /// 1-based source line where the record starts.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Check if the record holds any field.
    pub fn has_content(&self) -> bool {
        !self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_record_new() {
        let record = RisRecord::new(1);
        assert!(!record.has_content());
        assert_eq!(record.line(), 1);
        assert_eq!(record.get(&RisTag::Title), None);
    }

    #[test]
    fn test_add_data_promotes_to_sequence() {
        let mut record = RisRecord::new(1);
        record.add_data(RisTag::Keywords, "A".to_string());
        assert_eq!(
            record.get(&RisTag::Keywords),
            Some(&FieldValue::Single("A".to_string()))
        );

        record.add_data(RisTag::Keywords, "B".to_string());
        assert_eq!(
            record.get(&RisTag::Keywords),
            Some(&FieldValue::Multiple(vec!["A".to_string(), "B".to_string()]))
        );

        record.add_data(RisTag::Keywords, "C".to_string());
        assert_eq!(record.get(&RisTag::Keywords).map(FieldValue::len), Some(3));
        assert_eq!(record.get_first(&RisTag::Keywords), Some("A"));
    }

    #[test]
    fn test_empty_value_is_present() {
        let mut record = RisRecord::new(3);
        record.add_data(RisTag::Issue, String::new());
        assert!(record.has_content());
        assert_eq!(record.get_first(&RisTag::Issue), Some(""));
        assert_eq!(record.get_first(&RisTag::Volume), None);
    }

    #[test]
    fn test_field_value_values() {
        let single = FieldValue::Single("x".to_string());
        assert_eq!(single.values(), ["x".to_string()]);
        assert!(!single.is_empty());
    }
}
