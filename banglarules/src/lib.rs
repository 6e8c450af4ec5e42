//! Substitution tables and compiled patterns for Bangla text normalization
//!
//! This crate holds the leaf layer of the normalizer: the hand-curated
//! character tables, the ordered substitution tables built from them, and the
//! regular expressions used by the pipeline stages in `banglanorm`.
//!
//! - [`tables`] -- static character and sequence tables (all written in NFC)
//! - [`subst`] -- ordered substitution tables applied in a single pass
//! - [`patterns`] -- whitespace, repeat-collapse, digit and hasanta patterns
//! - [`normalize`] -- the four Unicode normalization forms
//! - [`escape`] -- `\uXXXX` escape decoding for rule files
//! - [`mapparse`] -- CSV loading of additional character-variant rules

pub mod escape;
pub mod mapparse;
pub mod normalize;
pub mod patterns;
pub mod subst;
pub mod tables;

pub use mapparse::{parse_variant_rules, VariantRule};
pub use patterns::{CompiledPatterns, RepeatCollapser};
pub use subst::SubstitutionTable;

/// Error type for building tables and patterns.
///
/// Any of these is a construction-time failure: a normalizer cannot be built
/// from tables or patterns that fail validation.
#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("failed to compile pattern for {table}: {source}")]
    Pattern {
        table: &'static str,
        #[source]
        source: regex::Error,
    },
    #[error("empty key in substitution table {0}")]
    EmptyKey(&'static str),
    #[error("duplicate key {key:?} in substitution table {table}")]
    DuplicateKey { table: &'static str, key: String },
    #[error("variant {0:?} contains a character that is removed before variants apply")]
    InvisibleInKey(String),
    #[error("invalid rule file: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid escape sequence: {0}")]
    Escape(String),
}
