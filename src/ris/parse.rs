//! RIS format parsing implementation.
//!
//! This module handles the low-level, line-by-line parsing of RIS text into
//! records. Records are separated by blank lines; every other line is a
//! `TG  - value` field.

use crate::Result;
use crate::ris::structure::RisRecord;
use crate::ris::tags::RisTag;
use tracing::trace;

/// Width of the tag plus the `"  - "` separator that precedes a value.
const VALUE_OFFSET: usize = 6;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parser state between two lines.
enum State {
    /// Before the first field, or right after a blank line.
    Boundary,
    /// Inside a record that has at least one field.
    Collecting(RisRecord),
}

/// Parse a forward-only sequence of lines into records.
///
/// The first line-source error aborts the whole parse.
pub(crate) fn ris_parse<I, S>(lines: I) -> Result<Vec<RisRecord>>
where
    I: IntoIterator<Item = std::io::Result<S>>,
    S: AsRef<str>,
{
    let mut records = Vec::new();
    let mut state = State::Boundary;

    for (index, line) in lines.into_iter().enumerate() {
        let line = line?;
        let mut line = line.as_ref();
        if index == 0 {
            line = line.strip_prefix(BYTE_ORDER_MARK).unwrap_or(line);
        }
        let line_number = index + 1;

        if is_boundary(line) {
            if let State::Collecting(record) = std::mem::replace(&mut state, State::Boundary) {
                records.push(record);
            }
            continue;
        }

        let (tag, value) = split_line(line);
        trace!(line = line_number, tag = %tag, "field");
        match &mut state {
            State::Collecting(record) => record.add_data(tag, value),
            State::Boundary => {
                let mut record = RisRecord::new(line_number);
                record.add_data(tag, value);
                state = State::Collecting(record);
            }
        }
    }

    if let State::Collecting(record) = state {
        records.push(record);
    }

    // The trailing blank line of an export closes the last record; a record
    // without fields never reaches the mapper.
    records.retain(RisRecord::has_content);

    Ok(records)
}

/// Check if a line separates two records.
fn is_boundary(line: &str) -> bool {
    line.trim_end_matches(['\r', '\n']).is_empty()
}

/// Split a field line into its tag (first two characters) and its value
/// (everything from the seventh character on).
fn split_line(line: &str) -> (RisTag, String) {
    let line = line.trim_end_matches(['\r', '\n']);
    let tag_end = line
        .char_indices()
        .nth(2)
        .map_or(line.len(), |(offset, _)| offset);
    let value: String = line.chars().skip(VALUE_OFFSET).collect();

    (RisTag::from_tag(&line[..tag_end]), value)
}
