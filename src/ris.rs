//! RIS format parser implementation.
//!
//! Provides functionality to split RIS exports into records of tagged fields.
//! Records are separated by blank lines; repeated tags inside a record keep
//! every value in source order.
//!
//! # Example
//!
//! ```
//! use ris2dspace::{FieldValue, RisParser, RisTag};
//!
//! let input = "T1  - 標題\nKW  - 甲\nKW  - A\n\n";
//!
//! let records = RisParser::new().parse(input).unwrap();
//! assert_eq!(records[0].get_first(&RisTag::Title), Some("標題"));
//! assert_eq!(records[0].get(&RisTag::Keywords).map(FieldValue::len), Some(2));
//! ```

mod parse;
mod structure;
mod tags;

use crate::Result;
use parse::ris_parse;
use std::io::BufRead;

pub use structure::{FieldValue, RisRecord};
pub use tags::RisTag;

/// Parser for RIS format exports.
///
/// RIS is a standardized format for bibliographic citations that uses two-letter
/// tags at the start of each line to denote different citation fields.
#[derive(Debug, Clone, Default)]
pub struct RisParser;

impl RisParser {
    /// Creates a new RIS parser instance.
    ///
    /// # Examples
    ///
    /// ```
    /// use ris2dspace::RisParser;
    /// let parser = RisParser::new();
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parses a string containing one or more RIS records.
    pub fn parse(&self, input: &str) -> Result<Vec<RisRecord>> {
        ris_parse(input.lines().map(Ok::<_, std::io::Error>))
    }

    /// Parses RIS records from a buffered reader, reading it once front to back.
    ///
    /// # Errors
    ///
    /// Returns `ConvertError::Io` if reading fails, including input that is not
    /// valid UTF-8. No records are returned in that case.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Vec<RisRecord>> {
        ris_parse(reader.lines())
    }
}
