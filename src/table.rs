//! DSpace metadata table output.
//!
//! The table is a comma separated file with one header row naming the twelve
//! DSpace columns, followed by one row per record.
//!
//! # Example
//!
//! ```
//! use ris2dspace::{Locales, MetadataRow};
//! use ris2dspace::table::render_table;
//!
//! let rows = vec![MetadataRow {
//!     title_native: "標題".to_string(),
//!     ..Default::default()
//! }];
//! let bytes = render_table(&rows, &Locales::default()).unwrap();
//! let text = String::from_utf8(bytes).unwrap();
//! assert!(text.starts_with("dc.contributor.author[zh_TW],dc.contributor.author[en_US],"));
//! ```

use crate::config::Locales;
use crate::mapping::MetadataRow;
use crate::Result;
use csv::WriterBuilder;
use std::io::Write;

/// Columns of the metadata table, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    AuthorNative,
    AuthorRomanized,
    TitleNative,
    TitleRomanized,
    DateNative,
    Contents,
    AbstractNative,
    AbstractRomanized,
    RelationNative,
    SubjectNative,
    SubjectRomanized,
    TypeNative,
}

/// Which locale a column header carries.
enum Language {
    Native,
    Romanized,
    Unqualified,
}

impl Column {
    /// All columns in output order.
    pub const ALL: [Column; 12] = [
        Column::AuthorNative,
        Column::AuthorRomanized,
        Column::TitleNative,
        Column::TitleRomanized,
        Column::DateNative,
        Column::Contents,
        Column::AbstractNative,
        Column::AbstractRomanized,
        Column::RelationNative,
        Column::SubjectNative,
        Column::SubjectRomanized,
        Column::TypeNative,
    ];

    /// The DSpace metadata field name, without a language qualifier.
    pub fn field(&self) -> &'static str {
        match self {
            Column::AuthorNative | Column::AuthorRomanized => "dc.contributor.author",
            Column::TitleNative | Column::TitleRomanized => "dc.title",
            Column::DateNative => "dc.date",
            Column::Contents => "contents",
            Column::AbstractNative | Column::AbstractRomanized => "dc.description.abstract",
            Column::RelationNative => "dc.relation",
            Column::SubjectNative | Column::SubjectRomanized => "dc.subject",
            Column::TypeNative => "dc.type",
        }
    }

    fn language(&self) -> Language {
        match self {
            Column::Contents => Language::Unqualified,
            Column::AuthorRomanized
            | Column::TitleRomanized
            | Column::AbstractRomanized
            | Column::SubjectRomanized => Language::Romanized,
            _ => Language::Native,
        }
    }

    /// Header text, e.g. `dc.title[zh_TW]`.
    pub fn header(&self, locales: &Locales) -> String {
        match self.language() {
            Language::Native => format!("{}[{}]", self.field(), locales.native),
            Language::Romanized => format!("{}[{}]", self.field(), locales.romanized),
            Language::Unqualified => self.field().to_string(),
        }
    }
}

/// Header row for the given locales.
pub fn headers(locales: &Locales) -> Vec<String> {
    Column::ALL.iter().map(|column| column.header(locales)).collect()
}

/// Write the header row and every row to `writer`.
pub fn write_table<W: Write>(writer: W, rows: &[MetadataRow], locales: &Locales) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    writer.write_record(headers(locales))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Render the whole table in memory.
pub fn render_table(rows: &[MetadataRow], locales: &Locales) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_table(&mut buffer, rows, locales)?;
    Ok(buffer)
}

/// Read a rendered table back into rows, checking the header.
#[cfg(test)]
pub(crate) fn read_table(input: &[u8], locales: &Locales) -> Result<Vec<MetadataRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input);

    let found: Vec<String> = reader.headers()?.iter().map(String::from).collect();
    if found != headers(locales) {
        return Err(crate::ConvertError::InvalidConfig(format!(
            "unexpected table header: {}",
            found.join(",")
        )));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let cell = |column: Column| {
            record
                .get(column as usize)
                .unwrap_or_default()
                .to_string()
        };
        rows.push(MetadataRow {
            author_native: cell(Column::AuthorNative),
            author_romanized: cell(Column::AuthorRomanized),
            title_native: cell(Column::TitleNative),
            title_romanized: cell(Column::TitleRomanized),
            date_native: cell(Column::DateNative),
            contents: cell(Column::Contents),
            abstract_native: cell(Column::AbstractNative),
            abstract_romanized: cell(Column::AbstractRomanized),
            relation_native: cell(Column::RelationNative),
            subject_native: cell(Column::SubjectNative),
            subject_romanized: cell(Column::SubjectRomanized),
            type_native: cell(Column::TypeNative),
        });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_headers_default_locales() {
        assert_eq!(
            headers(&Locales::default()),
            vec![
                "dc.contributor.author[zh_TW]",
                "dc.contributor.author[en_US]",
                "dc.title[zh_TW]",
                "dc.title[en_US]",
                "dc.date[zh_TW]",
                "contents",
                "dc.description.abstract[zh_TW]",
                "dc.description.abstract[en_US]",
                "dc.relation[zh_TW]",
                "dc.subject[zh_TW]",
                "dc.subject[en_US]",
                "dc.type[zh_TW]",
            ]
        );
    }

    #[test]
    fn test_headers_custom_locales() {
        let locales = Locales::new("native", "romanized");
        assert_eq!(Column::AuthorNative.header(&locales), "dc.contributor.author[native]");
        assert_eq!(Column::SubjectRomanized.header(&locales), "dc.subject[romanized]");
        assert_eq!(Column::Contents.header(&locales), "contents");
    }

    #[test]
    fn test_serialized_cells_follow_column_order() {
        let row = MetadataRow {
            author_native: "王曉明".to_string(),
            relation_native: "Foo, Volume 3".to_string(),
            type_native: "Journal Article".to_string(),
            ..Default::default()
        };
        let text = String::from_utf8(render_table(&[row], &Locales::default()).unwrap())
            .unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "王曉明,,,,,,,,\"Foo, Volume 3\",,,Journal Article");

        let header_row = headers(&Locales::default());
        assert_eq!(header_row[8], "dc.relation[zh_TW]");
    }

    #[test]
    fn test_read_table_round_trip() {
        let rows = vec![
            MetadataRow {
                title_native: "標題".to_string(),
                abstract_romanized: "Line one\nline two".to_string(),
                ..Default::default()
            },
            MetadataRow {
                subject_native: "甲||乙".to_string(),
                ..Default::default()
            },
        ];
        let locales = Locales::default();
        let bytes = render_table(&rows, &locales).unwrap();
        assert_eq!(read_table(&bytes, &locales).unwrap(), rows);
    }

    #[test]
    fn test_read_table_rejects_foreign_header() {
        let bytes = render_table(&[], &Locales::default()).unwrap();
        let result = read_table(&bytes, &Locales::new("ja", "en"));
        assert!(matches!(result, Err(crate::ConvertError::InvalidConfig(_))));
    }

    #[test]
    fn test_empty_table_has_header_only() {
        let text = String::from_utf8(render_table(&[], &Locales::default()).unwrap()).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
