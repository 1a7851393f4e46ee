//! Splitting of bilingual author names.
//!
//! Airiti exports write an author as `王曉明(Xiao Ming Wang)`: the name in its
//! original script, followed by the romanized form in parentheses.

/// Split an author string into its `(native, romanized)` parts.
///
/// Without parentheses the whole string goes to one side: romanized when it
/// contains any ASCII letter, native otherwise. An unmatched or empty
/// parenthesis yields an empty romanized part. Both parts are taken as
/// written, surrounding spaces included.
///
/// ```
/// use ris2dspace::mapping::split_name;
///
/// assert_eq!(split_name("王曉明(Xiao Ming Wang)"), ("王曉明", "Xiao Ming Wang"));
/// assert_eq!(split_name("Xiao Ming Wang"), ("", "Xiao Ming Wang"));
/// assert_eq!(split_name("王曉明"), ("王曉明", ""));
/// ```
pub fn split_name(name: &str) -> (&str, &str) {
    match name.split_once('(') {
        Some((native, rest)) => {
            let romanized = rest.split_once(')').map_or("", |(inner, _)| inner);
            (native, romanized)
        }
        None if name.chars().any(|c| c.is_ascii_alphabetic()) => ("", name),
        None => (name, ""),
    }
}
