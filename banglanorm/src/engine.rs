//! Bangla normalization engine
//!
//! [`BanglaNormalizer`] holds the substitution tables and compiled patterns
//! and runs the nine-stage pipeline over an input string:
//!
//! 1. Unicode form normalization
//! 2. invisible-character removal
//! 3. whitespace normalization
//! 4. punctuation normalization
//! 5. vowel-sign and diacritic normalization
//! 6. digit normalization
//! 7. character-variant standardization
//! 8. hasanta normalization (optional, on by default)
//! 9. OCR-error correction (optional, off by default)
//!
//! Stages 1-5 are the *settling* stages. When any of stages 6-9 changes the
//! text, the settling stages run again on its output, so deleting a digit or
//! a virama never leaves behind a double space, a punctuation run or an
//! uncomposed vowel sign. This is what makes `normalize` idempotent.

use std::collections::HashSet;

use banglarules::normalize::nfc_normalize;
use banglarules::tables::{
    BANGLA_DIGITS, CHARACTER_VARIANTS, INVISIBLE_CHARS, OCR_CORRECTIONS, PUNCTUATION,
    VOWEL_COMPOSITIONS,
};
use banglarules::{CompiledPatterns, SubstitutionTable, VariantRule};
use tracing::{debug, trace};

use crate::config::{NormalizeOptions, UnicodeForm};
use crate::unicode_info::{unicode_info, UnicodeCharInfo};
use crate::NormalizeError;

/// Stateless Bangla text normalizer.
///
/// All tables and patterns are built by the constructor and never change
/// afterwards, so one instance can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct BanglaNormalizer {
    invisible_chars: SubstitutionTable,
    punctuation: SubstitutionTable,
    vowel_compositions: SubstitutionTable,
    bangla_digits: SubstitutionTable,
    character_variants: SubstitutionTable,
    ocr_corrections: SubstitutionTable,
    patterns: CompiledPatterns,
}

impl BanglaNormalizer {
    /// Build a normalizer with the built-in tables.
    ///
    /// Fails only if a table or pattern fails validation, which is a defect
    /// in the tables rather than a runtime condition.
    pub fn new() -> Result<Self, NormalizeError> {
        Self::with_variant_rules(Vec::new())
    }

    /// Build a normalizer whose character-variant stage also applies `rules`.
    ///
    /// Both sides of each rule are brought to NFC. The rules follow the
    /// built-in variants in the order given. A rule whose variant equals a
    /// built-in key replaces that built-in entry; two rules with the same
    /// variant are an error.
    pub fn with_variant_rules<I>(rules: I) -> Result<Self, NormalizeError>
    where
        I: IntoIterator<Item = VariantRule>,
    {
        let rules: Vec<(String, String)> = rules
            .into_iter()
            .map(|rule| (nfc_normalize(&rule.variant), nfc_normalize(&rule.canonical)))
            .collect();
        let user_keys: HashSet<&str> = rules.iter().map(|(key, _)| key.as_str()).collect();
        let mut variants: Vec<(String, String)> = CHARACTER_VARIANTS
            .iter()
            .filter(|(key, _)| !user_keys.contains(key))
            .map(|&(key, value)| (key.to_string(), value.to_string()))
            .collect();
        variants.extend(rules);

        let normalizer = Self {
            invisible_chars: SubstitutionTable::from_static("invisible characters", INVISIBLE_CHARS)?,
            punctuation: SubstitutionTable::from_static("punctuation", PUNCTUATION)?,
            vowel_compositions: SubstitutionTable::from_static(
                "vowel compositions",
                VOWEL_COMPOSITIONS,
            )?,
            bangla_digits: SubstitutionTable::from_static("bangla digits", BANGLA_DIGITS)?,
            character_variants: SubstitutionTable::new("character variants", variants)?,
            ocr_corrections: SubstitutionTable::from_static("ocr corrections", OCR_CORRECTIONS)?,
            patterns: CompiledPatterns::compile()?,
        };

        for table in normalizer.tables() {
            debug!(table = table.name(), entries = table.len(), "compiled substitution table");
        }
        for collapser in [
            normalizer.patterns.repeated_punctuation(),
            normalizer.patterns.duplicate_diacritics(),
        ] {
            debug!(pattern = collapser.name(), "compiled repeat collapser");
        }
        debug!("built Bangla normalizer");
        Ok(normalizer)
    }

    /// Run the full pipeline over `text`.
    ///
    /// Never fails; the empty string normalizes to the empty string.
    ///
    /// # Example
    /// ```
    /// use banglanorm::{BanglaNormalizer, NormalizeOptions};
    ///
    /// let normalizer = BanglaNormalizer::new().unwrap();
    /// let options = NormalizeOptions::default().with_digits_to_ascii(true);
    /// assert_eq!(normalizer.normalize("বাংলা১২৩text", &options), "বাংলা123text");
    /// ```
    pub fn normalize(&self, text: &str, options: &NormalizeOptions) -> String {
        let form = options.unicode_form;

        let mut text = self.settle(text, form);
        text = self.run_stage("digits", text, form, |t| self.normalize_digits(t, options));
        text = self.run_stage("character variants", text, form, |t| {
            self.apply_character_variants(t)
        });
        if options.normalize_hasanta {
            text = self.run_stage("hasanta", text, form, |t| self.normalize_hasanta(t));
        }
        if options.apply_ocr_fixes {
            text = self.run_stage("ocr corrections", text, form, |t| {
                self.apply_ocr_corrections(t)
            });
        }
        text
    }

    fn tables(&self) -> [&SubstitutionTable; 6] {
        [
            &self.invisible_chars,
            &self.punctuation,
            &self.vowel_compositions,
            &self.bangla_digits,
            &self.character_variants,
            &self.ocr_corrections,
        ]
    }

    /// Stages 1-5.
    fn settle(&self, text: &str, form: UnicodeForm) -> String {
        let text = self.normalize_unicode(text, form);
        let text = self.strip_invisible(&text, form);
        let text = self.normalize_whitespace(&text);
        let text = self.normalize_punctuation(&text);
        self.normalize_vowels(&text)
    }

    /// Run one of stages 6-9, settling its output if it changed anything.
    fn run_stage<F>(&self, stage: &'static str, text: String, form: UnicodeForm, f: F) -> String
    where
        F: FnOnce(&str) -> String,
    {
        let out = f(&text);
        if out == text {
            return text;
        }
        trace!(stage, before = %text, after = %out, "stage changed text");
        self.settle(&out, form)
    }

    /// Stage 2 as run inside the pipeline. Joiners block canonical
    /// composition and reordering, so the form is re-applied once any are
    /// removed.
    fn strip_invisible(&self, text: &str, form: UnicodeForm) -> String {
        let stripped = self.remove_invisible_chars(text);
        if stripped == text {
            stripped
        } else {
            form.apply(&stripped)
        }
    }

    /// Stage 1: apply the Unicode normalization form.
    pub fn normalize_unicode(&self, text: &str, form: UnicodeForm) -> String {
        form.apply(text)
    }

    /// Stage 2: delete zero-width joiners, the BOM, the word joiner and the
    /// Arabic letter mark, and turn no-break spaces into spaces.
    pub fn remove_invisible_chars(&self, text: &str) -> String {
        self.invisible_chars.apply(text).into_owned()
    }

    /// Stage 3: collapse whitespace runs to one space and trim.
    pub fn normalize_whitespace(&self, text: &str) -> String {
        self.patterns.collapse_whitespace(text)
    }

    /// Stage 4.
    pub fn normalize_punctuation(&self, text: &str) -> String {
        let text = self.punctuation.apply(text);
        self.patterns
            .repeated_punctuation()
            .collapse(&text)
            .into_owned()
    }

    /// Stage 5: compose two-part vowel signs, then collapse repeated marks.
    pub fn normalize_vowels(&self, text: &str) -> String {
        let text = self.vowel_compositions.apply(text);
        self.patterns
            .duplicate_diacritics()
            .collapse(&text)
            .into_owned()
    }

    /// Stage 6. Removal wins over conversion when both are requested.
    pub fn normalize_digits(&self, text: &str, options: &NormalizeOptions) -> String {
        if options.remove_digits {
            self.patterns.strip_digits(text).into_owned()
        } else if options.digits_to_ascii {
            self.bangla_digits.apply(text).into_owned()
        } else {
            text.to_string()
        }
    }

    /// Stage 7.
    pub fn apply_character_variants(&self, text: &str) -> String {
        self.character_variants.apply(text).into_owned()
    }

    /// Stage 8: delete viramas that do not start a conjunct.
    pub fn normalize_hasanta(&self, text: &str) -> String {
        self.patterns.strip_trailing_hasanta(text).into_owned()
    }

    /// Stage 9. Use with caution; these corrections are not always errors.
    pub fn apply_ocr_corrections(&self, text: &str) -> String {
        self.ocr_corrections.apply_until_stable(text)
    }

    /// Per-character Unicode metadata, for debugging normalization results.
    /// Independent of the pipeline.
    pub fn unicode_info(&self, text: &str) -> Vec<UnicodeCharInfo> {
        unicode_info(text)
    }

    /// Character-variant rules in the order they are tried.
    pub fn variant_rules(&self) -> &[(String, String)] {
        self.character_variants.entries()
    }
}
