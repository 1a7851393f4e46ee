//! RIS format tags consumed by the metadata mapping.
//!
//! Only the tags that feed a DSpace column get a named variant. Anything else
//! is kept as [`RisTag::Unknown`] so that records stay faithful to the export.
//! See: http://en.wikipedia.org/wiki/RIS_(file_format)

/// RIS format tags.
///
/// Tag codes follow the Airiti Library export, where `T1` holds the title in
/// the original script and `TT` its translated (romanized) form.
#[allow(clippy::upper_case_acronyms)]
#[non_exhaustive]
#[derive(Debug, Eq, PartialEq, Hash, Clone)]
pub enum RisTag {
    /// TY - Type of reference
    Type,
    /// AU - Author
    Author,
    /// T1 - Primary title
    Title,
    /// TT - Translated title
    TitleTranslated,
    /// AB - Abstract
    Abstract,
    /// JO - Journal/Periodical name
    Journal,
    /// VL - Volume number
    Volume,
    /// IS - Issue number
    Issue,
    /// SP - Start page
    StartPage,
    /// EP - End page
    EndPage,
    /// KW - Keywords
    Keywords,
    /// ER - End of reference
    EndOfReference,
    /// Unknown tag
    Unknown(String),
}

impl RisTag {
    /// Convert a string tag to a RisTag enum.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "TY" => RisTag::Type,
            "AU" => RisTag::Author,
            "T1" => RisTag::Title,
            "TT" => RisTag::TitleTranslated,
            "AB" => RisTag::Abstract,
            "JO" => RisTag::Journal,
            "VL" => RisTag::Volume,
            "IS" => RisTag::Issue,
            "SP" => RisTag::StartPage,
            "EP" => RisTag::EndPage,
            "KW" => RisTag::Keywords,
            "ER" => RisTag::EndOfReference,
            _ => RisTag::Unknown(tag.to_string()),
        }
    }

    /// Convert a RisTag enum back to its string representation.
    pub fn as_tag(&self) -> &str {
        match self {
            RisTag::Type => "TY",
            RisTag::Author => "AU",
            RisTag::Title => "T1",
            RisTag::TitleTranslated => "TT",
            RisTag::Abstract => "AB",
            RisTag::Journal => "JO",
            RisTag::Volume => "VL",
            RisTag::Issue => "IS",
            RisTag::StartPage => "SP",
            RisTag::EndPage => "EP",
            RisTag::Keywords => "KW",
            RisTag::EndOfReference => "ER",
            RisTag::Unknown(tag) => tag,
        }
    }
}

impl std::fmt::Display for RisTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("AU", RisTag::Author)]
    #[case("T1", RisTag::Title)]
    #[case("TT", RisTag::TitleTranslated)]
    #[case("KW", RisTag::Keywords)]
    #[case("ER", RisTag::EndOfReference)]
    fn test_known_tags_round_trip(#[case] code: &str, #[case] tag: RisTag) {
        assert_eq!(RisTag::from_tag(code), tag);
        assert_eq!(tag.as_tag(), code);
    }

    #[test]
    fn test_unknown_tag_is_preserved() {
        let tag = RisTag::from_tag("N1");
        assert_eq!(tag, RisTag::Unknown("N1".to_string()));
        assert_eq!(tag.to_string(), "N1");
    }
}
