//! Compiled regular expressions used by the normalization stages
//!
//! The `regex` crate supports neither backreferences nor lookahead, so the
//! two rules that would normally use them are written without:
//!
//! - `([marks])\1+` becomes an alternation of `m{2,}` per mark
//!   ([`RepeatCollapser`]);
//! - `VIRAMA(?=\s|$)` captures the following whitespace (or the empty match
//!   at end of text) and writes it back.

use std::borrow::Cow;

use itertools::Itertools;
use regex::{Captures, Regex};

use crate::tables::{DIACRITIC_MARKS, REPEATABLE_PUNCTUATION, VIRAMA};
use crate::RulesError;

/// Whitespace class: Unicode `White_Space` plus the information separators
/// U+001C..U+001F, which Rust's `\s` and `str::trim` leave alone.
const WHITESPACE: &str = r"[\s\x1C-\x1F]";

/// Collapses runs of two or more identical marks from a fixed set into a
/// single occurrence. Runs of *different* marks are left alone.
#[derive(Debug, Clone)]
pub struct RepeatCollapser {
    name: &'static str,
    pattern: Regex,
}

impl RepeatCollapser {
    pub fn new(name: &'static str, marks: &[char]) -> Result<Self, RulesError> {
        if marks.is_empty() {
            return Err(RulesError::EmptyKey(name));
        }
        let pattern = marks
            .iter()
            .map(|c| format!("{}{{2,}}", regex::escape(&c.to_string())))
            .join("|");
        let pattern = compile(name, &pattern)?;
        Ok(Self { name, pattern })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn collapse<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, |caps: &Captures| {
            caps[0].chars().next().map(String::from).unwrap_or_default()
        })
    }
}

/// Every pattern the pipeline needs, compiled once.
#[derive(Debug, Clone)]
pub struct CompiledPatterns {
    whitespace: Regex,
    digits: Regex,
    trailing_hasanta: Regex,
    repeated_punctuation: RepeatCollapser,
    duplicate_diacritics: RepeatCollapser,
}

impl CompiledPatterns {
    pub fn compile() -> Result<Self, RulesError> {
        let hasanta = format!(r"{}+({}|$)", regex::escape(&VIRAMA.to_string()), WHITESPACE);
        Ok(Self {
            whitespace: compile("whitespace", &format!("{}+", WHITESPACE))?,
            digits: compile("digits", r"[0-9\x{09E6}-\x{09EF}]")?,
            trailing_hasanta: compile("trailing hasanta", &hasanta)?,
            repeated_punctuation: RepeatCollapser::new(
                "repeated punctuation",
                REPEATABLE_PUNCTUATION,
            )?,
            duplicate_diacritics: RepeatCollapser::new("duplicate diacritics", DIACRITIC_MARKS)?,
        })
    }

    /// Replace each whitespace run with one space and trim both ends.
    pub fn collapse_whitespace(&self, text: &str) -> String {
        self.whitespace.replace_all(text, " ").trim().to_string()
    }

    /// Delete every ASCII and Bangla digit.
    pub fn strip_digits<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.digits.replace_all(text, "")
    }

    /// Delete viramas that are followed by whitespace or end of text.
    pub fn strip_trailing_hasanta<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.trailing_hasanta.replace_all(text, "${1}")
    }

    pub fn repeated_punctuation(&self) -> &RepeatCollapser {
        &self.repeated_punctuation
    }

    pub fn duplicate_diacritics(&self) -> &RepeatCollapser {
        &self.duplicate_diacritics
    }
}

fn compile(table: &'static str, pattern: &str) -> Result<Regex, RulesError> {
    Regex::new(pattern).map_err(|source| RulesError::Pattern { table, source })
}
