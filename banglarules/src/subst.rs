//! Ordered substitution tables
//!
//! A [`SubstitutionTable`] maps literal keys to replacement strings. All keys
//! are compiled into one alternation, in table order, so a table is applied
//! in a single left-to-right pass: replaced text is never rescanned, and when
//! two keys match at the same position the one listed first wins.

use std::borrow::Cow;
use std::collections::HashMap;

use itertools::Itertools;
use regex::{Captures, Regex};

use crate::RulesError;

/// A literal substitution table compiled into a single matcher.
#[derive(Debug, Clone)]
pub struct SubstitutionTable {
    name: &'static str,
    entries: Vec<(String, String)>,
    replacements: HashMap<String, String>,
    matcher: Option<Regex>,
    shrinking: bool,
}

impl SubstitutionTable {
    /// Build a table from `(key, replacement)` pairs, keeping their order.
    ///
    /// Fails if a key is empty or appears twice, or if the alternation
    /// cannot be compiled.
    pub fn new<I, K, V>(name: &'static str, entries: I) -> Result<Self, RulesError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries: Vec<(String, String)> = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        if entries.iter().any(|(k, _)| k.is_empty()) {
            return Err(RulesError::EmptyKey(name));
        }
        if let Some(key) = entries.iter().map(|(k, _)| k).duplicates().next() {
            return Err(RulesError::DuplicateKey {
                table: name,
                key: key.clone(),
            });
        }

        let matcher = if entries.is_empty() {
            None
        } else {
            let pattern = entries.iter().map(|(k, _)| regex::escape(k)).join("|");
            let re = Regex::new(&pattern)
                .map_err(|source| RulesError::Pattern { table: name, source })?;
            Some(re)
        };
        let shrinking = entries.iter().all(|(k, v)| v.len() < k.len());
        let replacements = entries.iter().cloned().collect();

        Ok(Self {
            name,
            entries,
            replacements,
            matcher,
            shrinking,
        })
    }

    /// Build a table from one of the static slices in [`crate::tables`].
    pub fn from_static(name: &'static str, entries: &[(&str, &str)]) -> Result<Self, RulesError> {
        Self::new(name, entries.iter().copied())
    }

    /// Replace every key occurrence in one pass.
    ///
    /// Returns the input unchanged (borrowed) when nothing matched.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let Some(matcher) = &self.matcher else {
            return Cow::Borrowed(text);
        };
        matcher.replace_all(text, |caps: &Captures| {
            self.replacements
                .get(&caps[0])
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
    }

    /// Apply the table repeatedly until no key matches.
    ///
    /// Only tables whose every replacement is shorter than its key are
    /// repeated, since each productive pass then shortens the text. Other
    /// tables are applied once.
    pub fn apply_until_stable(&self, text: &str) -> String {
        let mut current = self.apply(text).into_owned();
        if !self.shrinking {
            return current;
        }
        loop {
            let next = self.apply(&current).into_owned();
            if next == current {
                return current;
            }
            current = next;
        }
    }

    /// Table name used in errors and log events.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Entries in table order.
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{INVISIBLE_CHARS, OCR_CORRECTIONS, PUNCTUATION};

    #[test]
    fn test_apply_single_pass() {
        let table = SubstitutionTable::from_static("invisible", INVISIBLE_CHARS).unwrap();
        assert_eq!(table.apply("আমার\u{200D}নাম"), "আমারনাম");
        assert_eq!(table.apply("কিছু\u{00A0}টেক্সট"), "কিছু টেক্সট");
        assert_eq!(table.apply("\u{FEFF}\u{2060}ক\u{061C}\u{200C}"), "ক");
    }

    #[test]
    fn test_apply_borrows_when_unchanged() {
        let table = SubstitutionTable::from_static("invisible", INVISIBLE_CHARS).unwrap();
        assert!(matches!(table.apply("বাংলা"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_replacements_are_not_rescanned() {
        // "a" -> "b" must not feed into "b" -> "c" within one pass
        let table = SubstitutionTable::new("chain", [("a", "b"), ("b", "c")]).unwrap();
        assert_eq!(table.apply("ab"), "bc");
    }

    #[test]
    fn test_earlier_key_wins_at_same_position() {
        let first = SubstitutionTable::new("order", [("ab", "X"), ("a", "Y")]).unwrap();
        assert_eq!(first.apply("abc"), "Xc");
        let second = SubstitutionTable::new("order", [("a", "Y"), ("ab", "X")]).unwrap();
        assert_eq!(second.apply("abc"), "Ybc");
    }

    #[test]
    fn test_punctuation_double_danda() {
        let table = SubstitutionTable::from_static("punctuation", PUNCTUATION).unwrap();
        assert_eq!(table.apply("হেলো\u{0965}"), "হেলো\u{0964}");
        assert_eq!(table.apply("হেলো।।।"), "হেলো।।");
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let table = SubstitutionTable::new("meta", [("?!", "?"), (".", "")]).unwrap();
        assert_eq!(table.apply("কী?! হ্যাঁ."), "কী? হ্যাঁ");
    }

    #[test]
    fn test_empty_key_is_rejected() {
        let err = SubstitutionTable::new("bad", [("", "x")]).unwrap_err();
        assert!(matches!(err, RulesError::EmptyKey("bad")));
    }

    #[test]
    fn test_duplicate_key_is_rejected() {
        let err = SubstitutionTable::new("bad", [("ক", "খ"), ("ক", "গ")]).unwrap_err();
        match err {
            RulesError::DuplicateKey { table, key } => {
                assert_eq!(table, "bad");
                assert_eq!(key, "ক");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_table_is_identity() {
        let table = SubstitutionTable::new("empty", Vec::<(String, String)>::new()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.apply("বাংলা"), "বাংলা");
        assert_eq!(table.apply_until_stable("বাংলা"), "বাংলা");
    }

    #[test]
    fn test_apply_until_stable_on_shrinking_table() {
        let table = SubstitutionTable::from_static("ocr", OCR_CORRECTIONS).unwrap();
        // BA followed by two nuktas needs two passes
        assert_eq!(table.apply("ব\u{09BC}\u{09BC}"), "ব\u{09BC}");
        assert_eq!(table.apply_until_stable("ব\u{09BC}\u{09BC}"), "ব");
        assert_eq!(table.apply_until_stable("জ\u{09BC}ল"), "জল");
    }

    #[test]
    fn test_apply_until_stable_applies_growing_table_once() {
        let table = SubstitutionTable::new("grow", [("a", "aa")]).unwrap();
        assert_eq!(table.apply_until_stable("a"), "aa");
    }
}
