//! banglanorm - canonical normalization of Bangla (Bengali script) text
//!
//! This crate resolves the Unicode ambiguities that make equal-looking Bangla
//! strings compare unequal: composed vs. decomposed vowel signs, invisible
//! joiners, duplicated diacritics, mixed digit systems and inconsistent
//! punctuation. The tables and patterns live in the `banglarules` crate.
//!
//! # Example
//! ```
//! use banglanorm::{normalize_bangla_text, NormalizeOptions};
//!
//! let text = normalize_bangla_text("হেলো।।।", &NormalizeOptions::default()).unwrap();
//! assert_eq!(text, "হেলো।");
//! ```

pub mod config;
pub mod engine;
pub mod unicode_info;

pub use banglarules::{RulesError, VariantRule};
pub use config::{NormalizeOptions, UnicodeForm};
pub use engine::BanglaNormalizer;
pub use unicode_info::{unicode_info, UnicodeCharInfo};

/// Error type for building a normalizer and validating its options.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("failed to build normalizer: {0}")]
    Rules(#[from] RulesError),
    #[error("unknown Unicode normalization form {0:?} (expected NFC, NFD, NFKC or NFKD)")]
    InvalidUnicodeForm(String),
    #[error("invalid normalization options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

/// Normalize `text` with a freshly built [`BanglaNormalizer`].
///
/// For repeated calls, build one normalizer and reuse it instead.
pub fn normalize_bangla_text(
    text: &str,
    options: &NormalizeOptions,
) -> Result<String, NormalizeError> {
    let normalizer = BanglaNormalizer::new()?;
    Ok(normalizer.normalize(text, options))
}
