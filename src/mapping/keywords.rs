//! Splitting of keyword lists into two locales.
//!
//! Exports list every keyword in the original script first and then the
//! romanized keywords. The split is positional: nothing in the values
//! themselves is inspected.

use crate::ris::FieldValue;
use itertools::Itertools;

/// Separator DSpace uses between repeated values in one cell.
pub const VALUE_SEPARATOR: &str = "||";

/// Split a keyword field into `(native, romanized)` cells.
///
/// A single keyword fills the native cell. A sequence of `n` keywords puts
/// the first `ceil(n / 2)` into the native cell and the rest into the
/// romanized cell, each joined with `||`.
///
/// ```
/// use ris2dspace::FieldValue;
/// use ris2dspace::mapping::partition_keywords;
///
/// let keywords = FieldValue::Multiple(vec!["A".into(), "B".into(), "C".into()]);
/// assert_eq!(
///     partition_keywords(Some(&keywords)),
///     ("A||B".to_string(), "C".to_string())
/// );
/// ```
pub fn partition_keywords(keywords: Option<&FieldValue>) -> (String, String) {
    match keywords {
        None => (String::new(), String::new()),
        Some(FieldValue::Single(keyword)) => (keyword.clone(), String::new()),
        Some(FieldValue::Multiple(keywords)) => {
            let split = keywords.len().div_ceil(2);
            let (native, romanized) = keywords.split_at(split);
            (
                native.iter().join(VALUE_SEPARATOR),
                romanized.iter().join(VALUE_SEPARATOR),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn multiple(values: &[&str]) -> FieldValue {
        FieldValue::Multiple(values.iter().map(|v| v.to_string()).collect())
    }

    #[rstest]
    #[case(&["A", "B", "C", "D"], "A||B", "C||D")]
    #[case(&["A", "B", "C"], "A||B", "C")]
    #[case(&["A", "B"], "A", "B")]
    #[case(&["數位典藏", "後設資料", "Digital Archives", "Metadata"], "數位典藏||後設資料", "Digital Archives||Metadata")]
    fn test_partition_sequence(
        #[case] keywords: &[&str],
        #[case] native: &str,
        #[case] romanized: &str,
    ) {
        let keywords = multiple(keywords);
        assert_eq!(
            partition_keywords(Some(&keywords)),
            (native.to_string(), romanized.to_string())
        );
    }

    #[test]
    fn test_partition_single_keyword() {
        let keyword = FieldValue::Single("Metadata".to_string());
        assert_eq!(
            partition_keywords(Some(&keyword)),
            ("Metadata".to_string(), String::new())
        );
    }

    #[test]
    fn test_partition_missing_keywords() {
        assert_eq!(partition_keywords(None), (String::new(), String::new()));
    }
}
