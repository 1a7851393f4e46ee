//! Mapping of RIS records onto DSpace metadata rows.
//!
//! Every record becomes exactly one [`MetadataRow`]. Bilingual fields are split
//! into a native-script cell and a romanized cell; missing tags leave their
//! cells empty.

mod keywords;
mod names;
mod relation;

use crate::ris::{FieldValue, RisRecord, RisTag};
use itertools::Itertools;
use serde::Serialize;

pub use keywords::{VALUE_SEPARATOR, partition_keywords};
pub use names::split_name;
pub use relation::build_relation;

/// Value of the `dc.type` column for every row.
pub const ITEM_TYPE: &str = "Journal Article";

/// One row of the DSpace metadata table.
///
/// Fields are declared in column order; serialising a row writes the cells in
/// the order of [`Column::ALL`](crate::Column::ALL).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetadataRow {
    pub author_native: String,
    pub author_romanized: String,
    pub title_native: String,
    pub title_romanized: String,
    /// Left empty for manual entry.
    pub date_native: String,
    pub contents: String,
    pub abstract_native: String,
    pub abstract_romanized: String,
    pub relation_native: String,
    pub subject_native: String,
    pub subject_romanized: String,
    pub type_native: String,
}

impl From<&RisRecord> for MetadataRow {
    fn from(record: &RisRecord) -> Self {
        map_record(record)
    }
}

/// Map one parsed record onto a metadata row.
pub fn map_record(record: &RisRecord) -> MetadataRow {
    let (author_native, author_romanized) = split_authors(record.get(&RisTag::Author));
    let (abstract_native, abstract_romanized) = split_abstract(record.get(&RisTag::Abstract));
    let (subject_native, subject_romanized) = partition_keywords(record.get(&RisTag::Keywords));

    MetadataRow {
        author_native,
        author_romanized,
        title_native: first_or_empty(record, &RisTag::Title),
        title_romanized: first_or_empty(record, &RisTag::TitleTranslated),
        date_native: String::new(),
        contents: String::new(),
        abstract_native,
        abstract_romanized,
        relation_native: build_relation(record),
        subject_native,
        subject_romanized,
        type_native: ITEM_TYPE.to_string(),
    }
}

fn first_or_empty(record: &RisRecord, tag: &RisTag) -> String {
    record.get_first(tag).unwrap_or_default().to_string()
}

/// Split every author and join each side with `||`, skipping empty parts.
fn split_authors(authors: Option<&FieldValue>) -> (String, String) {
    let Some(authors) = authors else {
        return (String::new(), String::new());
    };
    let (native, romanized): (Vec<&str>, Vec<&str>) =
        authors.values().iter().map(|name| split_name(name)).unzip();

    (
        native.into_iter().filter(|name| !name.is_empty()).join(VALUE_SEPARATOR),
        romanized.into_iter().filter(|name| !name.is_empty()).join(VALUE_SEPARATOR),
    )
}

/// The first abstract is native, the second romanized; later ones are dropped.
fn split_abstract(abstracts: Option<&FieldValue>) -> (String, String) {
    match abstracts {
        None => (String::new(), String::new()),
        Some(FieldValue::Single(text)) => (text.clone(), String::new()),
        Some(FieldValue::Multiple(texts)) => (
            texts.first().cloned().unwrap_or_default(),
            texts.get(1).cloned().unwrap_or_default(),
        ),
    }
}
