//! Per-character Unicode diagnostics
//!
//! Nothing here feeds back into normalization; it exists to make the
//! difference between two visually identical strings visible.

use serde::Serialize;
use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::char::canonical_combining_class;

/// Name reported for characters without a Unicode name (controls,
/// unassigned code points).
pub const UNKNOWN_NAME: &str = "UNKNOWN";

/// Unicode metadata for one character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnicodeCharInfo {
    #[serde(rename = "char")]
    pub ch: char,
    /// `U+` followed by at least four uppercase hex digits.
    #[serde(rename = "codepointHex")]
    pub codepoint: String,
    pub name: String,
    /// Two-letter general category code, e.g. `Lo` or `Mn`.
    pub category: &'static str,
    pub combining_class: u8,
}

impl UnicodeCharInfo {
    pub fn of(ch: char) -> Self {
        Self {
            ch,
            codepoint: format!("U+{:04X}", ch as u32),
            name: unicode_names2::name(ch)
                .map(|name| name.to_string())
                .unwrap_or_else(|| UNKNOWN_NAME.to_string()),
            category: category_code(ch),
            combining_class: canonical_combining_class(ch),
        }
    }
}

/// One record per character of `text`, in order.
pub fn unicode_info(text: &str) -> Vec<UnicodeCharInfo> {
    text.chars().map(UnicodeCharInfo::of).collect()
}

/// The two-letter general category abbreviation for `c`.
#[allow(unreachable_patterns)]
pub fn category_code(c: char) -> &'static str {
    use GeneralCategory as G;
    match get_general_category(c) {
        G::UppercaseLetter => "Lu",
        G::LowercaseLetter => "Ll",
        G::TitlecaseLetter => "Lt",
        G::ModifierLetter => "Lm",
        G::OtherLetter => "Lo",
        G::NonspacingMark => "Mn",
        G::SpacingMark => "Mc",
        G::EnclosingMark => "Me",
        G::DecimalNumber => "Nd",
        G::LetterNumber => "Nl",
        G::OtherNumber => "No",
        G::ConnectorPunctuation => "Pc",
        G::DashPunctuation => "Pd",
        G::OpenPunctuation => "Ps",
        G::ClosePunctuation => "Pe",
        G::InitialPunctuation => "Pi",
        G::FinalPunctuation => "Pf",
        G::OtherPunctuation => "Po",
        G::MathSymbol => "Sm",
        G::CurrencySymbol => "Sc",
        G::ModifierSymbol => "Sk",
        G::OtherSymbol => "So",
        G::SpaceSeparator => "Zs",
        G::LineSeparator => "Zl",
        G::ParagraphSeparator => "Zp",
        G::Control => "Cc",
        G::Format => "Cf",
        G::Surrogate => "Cs",
        G::PrivateUse => "Co",
        G::Unassigned => "Cn",
        _ => "Cn",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter() {
        let info = UnicodeCharInfo::of('ক');
        assert_eq!(info.ch, 'ক');
        assert_eq!(info.codepoint, "U+0995");
        assert_eq!(info.name, "BENGALI LETTER KA");
        assert_eq!(info.category, "Lo");
        assert_eq!(info.combining_class, 0);
    }

    #[test]
    fn test_marks() {
        let virama = UnicodeCharInfo::of('\u{09CD}');
        assert_eq!(virama.name, "BENGALI SIGN VIRAMA");
        assert_eq!(virama.category, "Mn");
        assert_eq!(virama.combining_class, 9);

        let nukta = UnicodeCharInfo::of('\u{09BC}');
        assert_eq!(nukta.category, "Mn");
        assert_eq!(nukta.combining_class, 7);

        let aa = UnicodeCharInfo::of('\u{09BE}');
        assert_eq!(aa.name, "BENGALI VOWEL SIGN AA");
        assert_eq!(aa.category, "Mc");
    }

    #[test]
    fn test_other_categories() {
        assert_eq!(category_code('১'), "Nd");
        assert_eq!(category_code('।'), "Po");
        assert_eq!(category_code(' '), "Zs");
        assert_eq!(category_code('\u{200D}'), "Cf");
        assert_eq!(category_code('\n'), "Cc");
        assert_eq!(category_code('A'), "Lu");
    }

    #[test]
    fn test_unnamed_characters() {
        assert_eq!(UnicodeCharInfo::of('\n').name, UNKNOWN_NAME);
        let unassigned = UnicodeCharInfo::of('\u{0984}');
        assert_eq!(unassigned.name, UNKNOWN_NAME);
        assert_eq!(unassigned.category, "Cn");
    }

    #[test]
    fn test_unicode_info_preserves_order() {
        let info = unicode_info("আমার\u{200D}নাম");
        let chars: Vec<char> = info.iter().map(|i| i.ch).collect();
        assert_eq!(chars, "আমার\u{200D}নাম".chars().collect::<Vec<_>>());
        assert_eq!(info[4].name, "ZERO WIDTH JOINER");
        assert!(unicode_info("").is_empty());
    }

    #[test]
    fn test_codepoint_beyond_bmp() {
        assert_eq!(UnicodeCharInfo::of('\u{1F600}').codepoint, "U+1F600");
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(UnicodeCharInfo::of('া')).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "char": "া",
                "codepointHex": "U+09BE",
                "name": "BENGALI VOWEL SIGN AA",
                "category": "Mc",
                "combiningClass": 0
            })
        );
    }
}
