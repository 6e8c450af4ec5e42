//! Per-call normalization options
//!
//! [`NormalizeOptions`] is a closed record: every recognised option is a named
//! field, and the JSON form rejects unknown keys instead of ignoring them.

use std::fmt;
use std::str::FromStr;

use banglarules::normalize::{nfc_normalize, nfd_normalize, nfkc_normalize, nfkd_normalize};
use serde::{Deserialize, Serialize};

use crate::NormalizeError;

/// One of the four canonical Unicode normalization forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum UnicodeForm {
    #[default]
    Nfc,
    Nfd,
    Nfkc,
    Nfkd,
}

impl UnicodeForm {
    pub const ALL: [UnicodeForm; 4] = [Self::Nfc, Self::Nfd, Self::Nfkc, Self::Nfkd];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nfc => "NFC",
            Self::Nfd => "NFD",
            Self::Nfkc => "NFKC",
            Self::Nfkd => "NFKD",
        }
    }

    /// Normalize `text` to this form.
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Nfc => nfc_normalize(text),
            Self::Nfd => nfd_normalize(text),
            Self::Nfkc => nfkc_normalize(text),
            Self::Nfkd => nfkd_normalize(text),
        }
    }
}

impl fmt::Display for UnicodeForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnicodeForm {
    type Err = NormalizeError;

    /// Accepts the form names case-insensitively. Anything else is an error,
    /// never a silent fallback to NFC.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|form| form.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| NormalizeError::InvalidUnicodeForm(s.to_string()))
    }
}

impl TryFrom<String> for UnicodeForm {
    type Error = NormalizeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<UnicodeForm> for String {
    fn from(form: UnicodeForm) -> Self {
        form.as_str().to_string()
    }
}

/// Options for a single [`crate::BanglaNormalizer::normalize`] call.
///
/// Serialized with the camelCase keys `unicodeForm`, `removeDigits`,
/// `digitsToAscii`, `applyOcrFixes` and `normalizeHasanta`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct NormalizeOptions {
    /// Form applied by the first stage. Default: NFC.
    pub unicode_form: UnicodeForm,
    /// Delete all ASCII and Bangla digits. Takes precedence over
    /// `digits_to_ascii`. Default: false.
    pub remove_digits: bool,
    /// Convert Bangla digits to ASCII digits. Default: false.
    pub digits_to_ascii: bool,
    /// Apply the OCR-correction table. Default: false.
    pub apply_ocr_fixes: bool,
    /// Delete viramas followed by whitespace or end of text. Default: true.
    pub normalize_hasanta: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            unicode_form: UnicodeForm::Nfc,
            remove_digits: false,
            digits_to_ascii: false,
            apply_ocr_fixes: false,
            normalize_hasanta: true,
        }
    }
}

impl NormalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON object. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, NormalizeError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_unicode_form(mut self, form: UnicodeForm) -> Self {
        self.unicode_form = form;
        self
    }

    pub fn with_remove_digits(mut self, remove: bool) -> Self {
        self.remove_digits = remove;
        self
    }

    pub fn with_digits_to_ascii(mut self, to_ascii: bool) -> Self {
        self.digits_to_ascii = to_ascii;
        self
    }

    pub fn with_ocr_fixes(mut self, apply: bool) -> Self {
        self.apply_ocr_fixes = apply;
        self
    }

    pub fn with_hasanta(mut self, normalize: bool) -> Self {
        self.normalize_hasanta = normalize;
        self
    }
}
