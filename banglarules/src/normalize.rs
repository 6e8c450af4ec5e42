//! Unicode normalization utilities for Bangla text
//!
//! Wrappers over the four canonical normalization forms. Every built-in table
//! in [`crate::tables`] is written in NFC, and rules loaded from files are
//! brought into NFC with [`nfc_normalize`] before they are compiled.

use unicode_normalization::UnicodeNormalization;

/// Normalize text using NFC (Canonical Decomposition followed by Canonical
/// Composition)
///
/// Bangla two-part vowel signs are composed (`ে` + `া` becomes `ো`). The
/// nukta letters `ড়`, `ঢ়` and `য়` are composition exclusions and stay as
/// consonant + nukta.
pub fn nfc_normalize(text: &str) -> String {
    text.nfc().collect()
}

/// Normalize text using NFD (Canonical Decomposition)
pub fn nfd_normalize(text: &str) -> String {
    text.nfd().collect()
}

/// Normalize text using NFKC (Compatibility Decomposition followed by
/// Canonical Composition)
///
/// Besides everything NFC does, compatibility characters such as full-width
/// or circled digits are folded into their plain forms.
pub fn nfkc_normalize(text: &str) -> String {
    text.nfkc().collect()
}

/// Normalize text using NFKD (Compatibility Decomposition)
pub fn nfkd_normalize(text: &str) -> String {
    text.nfkd().collect()
}
