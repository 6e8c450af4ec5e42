use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::debug;

use crate::escape::unescape;
use crate::normalize::nfc_normalize;
use crate::tables::INVISIBLE_CHARS;
use crate::RulesError;

#[derive(Debug, Deserialize)]
struct VariantRecord {
    variant: String,
    canonical: String,
}

/// One character-variant rule: occurrences of `variant` are rewritten to
/// `canonical`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantRule {
    pub variant: String,
    pub canonical: String,
}

impl VariantRule {
    pub fn new(variant: impl Into<String>, canonical: impl Into<String>) -> Self {
        Self {
            variant: variant.into(),
            canonical: canonical.into(),
        }
    }
}

impl From<VariantRule> for (String, String) {
    fn from(rule: VariantRule) -> Self {
        (rule.variant, rule.canonical)
    }
}

/// Parse character-variant rules from CSV data.
///
/// The data must have the header `variant,canonical`. Cells are trimmed,
/// `\uXXXX` escapes are decoded, and both sides are brought to NFC so they
/// line up with text that has been through the first pipeline stage. Lines
/// starting with `#` are comments. A variant containing a joiner, BOM or
/// no-break space is rejected, since those are removed before variants apply.
pub fn parse_variant_rules(data: &str) -> Result<Vec<VariantRule>, RulesError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .comment(Some(b'#'))
        .from_reader(data.as_bytes());

    let mut rules = Vec::new();
    for result in reader.deserialize() {
        let record: VariantRecord = result?;
        let variant = nfc_normalize(&unescape(&record.variant)?);
        let canonical = nfc_normalize(&unescape(&record.canonical)?);
        if variant.is_empty() {
            return Err(RulesError::EmptyKey("character variants"));
        }
        if INVISIBLE_CHARS.iter().any(|(invisible, _)| variant.contains(invisible)) {
            return Err(RulesError::InvisibleInKey(variant));
        }
        rules.push(VariantRule { variant, canonical });
    }
    debug!(count = rules.len(), "parsed character-variant rules");
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variant_rules() {
        let data = "variant,canonical\nঅা,আ\nএে,ঐ\n";
        let rules = parse_variant_rules(data).expect("Failed to parse variant rules in test");
        assert_eq!(
            rules,
            vec![
                VariantRule::new("\u{0985}\u{09BE}", "\u{0986}"),
                VariantRule::new("\u{098F}\u{09C7}", "\u{0990}"),
            ]
        );
    }

    #[test]
    fn test_parse_variant_rules_rejects_invisible_variant() {
        let data = "variant,canonical\nক\u{09CD}\u{200D}ষ,ক্ষ\n";
        match parse_variant_rules(data) {
            Err(RulesError::InvisibleInKey(key)) => assert_eq!(key, "ক\u{09CD}\u{200D}ষ"),
            other => panic!("expected InvisibleInKey, got {other:?}"),
        }
        let escaped = "variant,canonical\nক\\u00A0খ,কখ\n";
        assert!(matches!(
            parse_variant_rules(escaped),
            Err(RulesError::InvisibleInKey(_))
        ));
    }

    #[test]
    fn test_parse_variant_rules_with_uni_esc() {
        let data = "variant,canonical\n\\u09AF\\u09BC, \\u09DF\n";
        let rules = parse_variant_rules(data)
            .expect("Failed to parse variant rules with unicode escapes in test");
        // U+09DF is not NFC, so the canonical side becomes YA + nukta
        assert_eq!(rules, vec![VariantRule::new("য\u{09BC}", "য\u{09BC}")]);
    }

    #[test]
    fn test_parse_variant_rules_skips_comments() {
        let data = "variant,canonical\n# deprecated spelling\nঅা,আ\n";
        let rules = parse_variant_rules(data).unwrap();
        assert_eq!(rules, vec![VariantRule::new("অা", "আ")]);
    }

    #[test]
    fn test_parse_variant_rules_rejects_empty_variant() {
        let data = "variant,canonical\n,আ\n";
        assert!(matches!(
            parse_variant_rules(data),
            Err(RulesError::EmptyKey(_))
        ));
    }

    #[test]
    fn test_parse_variant_rules_rejects_bad_header() {
        let data = "orth,phon\na,b\n";
        assert!(matches!(parse_variant_rules(data), Err(RulesError::Csv(_))));
    }

    #[test]
    fn test_variant_rule_into_pair() {
        let pair: (String, String) = VariantRule::new("a", "b").into();
        assert_eq!(pair, ("a".to_string(), "b".to_string()));
    }
}
