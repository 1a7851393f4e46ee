//! Citation relation string for the `dc.relation` column.

use crate::ris::{RisRecord, RisTag};

/// Build `Journal, Volume v, Issue i, Page(s) s-e` from a record.
///
/// Each clause appears only when its tags are present; the page clause needs
/// both a start and an end page. A present but empty tag still yields its
/// clause.
///
/// ```
/// use ris2dspace::RisParser;
/// use ris2dspace::mapping::build_relation;
///
/// let records = RisParser::new()
///     .parse("JO  - Foo\nVL  - 3\nSP  - 10\nEP  - 20\n")
///     .unwrap();
/// assert_eq!(build_relation(&records[0]), "Foo, Volume 3, Page(s) 10-20");
/// ```
pub fn build_relation(record: &RisRecord) -> String {
    let mut relation = String::new();

    if let Some(journal) = record.get_first(&RisTag::Journal) {
        relation.push_str(journal);
    }
    if let Some(volume) = record.get_first(&RisTag::Volume) {
        relation.push_str(", Volume ");
        relation.push_str(volume);
    }
    if let Some(issue) = record.get_first(&RisTag::Issue) {
        relation.push_str(", Issue ");
        relation.push_str(issue);
    }
    if let (Some(start), Some(end)) = (
        record.get_first(&RisTag::StartPage),
        record.get_first(&RisTag::EndPage),
    ) {
        relation.push_str(&format!(", Page(s) {start}-{end}"));
    }

    relation
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(fields: &[(RisTag, &str)]) -> RisRecord {
        let mut record = RisRecord::new(1);
        for (tag, value) in fields {
            record.add_data(tag.clone(), value.to_string());
        }
        record
    }

    #[test]
    fn test_full_relation() {
        let record = record(&[
            (RisTag::Journal, "Foo"),
            (RisTag::Volume, "3"),
            (RisTag::Issue, "2"),
            (RisTag::StartPage, "10"),
            (RisTag::EndPage, "20"),
        ]);
        assert_eq!(build_relation(&record), "Foo, Volume 3, Issue 2, Page(s) 10-20");
    }

    #[test]
    fn test_missing_issue() {
        let record = record(&[
            (RisTag::Journal, "Foo"),
            (RisTag::Volume, "3"),
            (RisTag::StartPage, "10"),
            (RisTag::EndPage, "20"),
        ]);
        assert_eq!(build_relation(&record), "Foo, Volume 3, Page(s) 10-20");
    }

    #[test]
    fn test_page_clause_needs_both_pages() {
        let record = record(&[(RisTag::Journal, "Foo"), (RisTag::StartPage, "10")]);
        assert_eq!(build_relation(&record), "Foo");
    }

    #[test]
    fn test_without_journal() {
        let record = record(&[(RisTag::Volume, "3"), (RisTag::Issue, "2")]);
        assert_eq!(build_relation(&record), ", Volume 3, Issue 2");
    }

    #[test]
    fn test_empty_record() {
        assert_eq!(build_relation(&RisRecord::new(1)), "");
    }

    #[test]
    fn test_present_but_empty_issue() {
        let record = record(&[(RisTag::Journal, "Foo"), (RisTag::Issue, "")]);
        assert_eq!(build_relation(&record), "Foo, Issue ");
    }
}
