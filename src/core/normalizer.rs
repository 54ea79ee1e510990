//! Input normalizer: soft advisory check plus the authoritative clean
//!
//! Two deliberately separate policies:
//! - soft check: letters and whitespace only, advisory, never blocks a run
//! - strict clean: uppercase and strip everything outside A-Z, authoritative

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::{FlamesError, NameField, NameToken};

lazy_static! {
    // Advisory input-field pattern: letters and whitespace only
    static ref RE_SOFT: Regex = Regex::new(r"^[a-zA-Z\s]*$").unwrap();
}

/// Advisory check used at the input prompt
///
/// Returns false when the raw input carries digits or punctuation. The run
/// still proceeds; the strict clean below decides what actually counts.
pub fn soft_check(raw: &str) -> bool {
    RE_SOFT.is_match(raw)
}

/// Uppercase and strip every character outside A-Z
fn clean(raw: &str) -> String {
    raw.to_uppercase().chars().filter(|c| c.is_ascii_uppercase()).collect()
}

/// Input normalizer
#[derive(Debug, Default)]
pub struct Normalizer;

impl Normalizer {
    /// Create new normalizer
    pub fn new() -> Self {
        Self
    }

    /// Clean both raw names into tokens
    ///
    /// Fails when either name is empty after stripping; downstream stages
    /// perform no further input validation.
    pub fn normalize(&self, raw1: &str, raw2: &str) -> Result<(NameToken, NameToken), FlamesError> {
        let raw1 = raw1.trim();
        let raw2 = raw2.trim();

        let cleaned1 = clean(raw1);
        if cleaned1.is_empty() {
            return Err(FlamesError::InvalidInput {
                which: NameField::First,
            });
        }

        let cleaned2 = clean(raw2);
        if cleaned2.is_empty() {
            return Err(FlamesError::InvalidInput {
                which: NameField::Second,
            });
        }

        Ok((NameToken::new(raw1, &cleaned1), NameToken::new(raw2, &cleaned2)))
    }
}

// =============================================================================
// TESTS
// =============================================================================
