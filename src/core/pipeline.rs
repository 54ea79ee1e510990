//! Full pipeline: normalize → cancel → eliminate → map
//!
//! The engine is stateless and synchronous; the presentation driver replays
//! the returned outcome with pacing but never influences it. Identical
//! inputs always produce identical outcomes, pairing included.

use chrono::Utc;

use crate::core::{cancel_common, eliminate, map_letter, Normalizer};
use crate::types::{FlamesError, FlamesOutcome};

/// Stateless FLAMES engine
#[derive(Debug, Default)]
pub struct FlamesEngine {
    normalizer: Normalizer,
}

impl FlamesEngine {
    /// Create new engine
    pub fn new() -> Self {
        Self {
            normalizer: Normalizer::new(),
        }
    }

    /// Run one complete calculation
    pub fn run(&self, raw1: &str, raw2: &str) -> Result<FlamesOutcome, FlamesError> {
        let (mut name_a, mut name_b) = self.normalizer.normalize(raw1, raw2)?;

        let cancellation = cancel_common(&mut name_a, &mut name_b);
        if cancellation.survivor_count == 0 {
            return Err(FlamesError::NoSurvivors);
        }

        let elimination = eliminate(cancellation.survivor_count)?;
        let relationship = map_letter(elimination.survivor)?;

        Ok(FlamesOutcome {
            timestamp: Utc::now(),
            name_a,
            name_b,
            pairs: cancellation.pairs,
            survivor_count: cancellation.survivor_count,
            rounds: elimination.rounds,
            relationship,
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NameField, Relationship};

    #[test]
    fn test_steve_sevi_is_enemies() {
        let outcome = FlamesEngine::new().run("Steve", "Sevi").unwrap();
        assert_eq!(outcome.survivor_count, 2);
        assert_eq!(outcome.relationship, Relationship::Enemies);
    }

    #[test]
    fn test_messy_input_cleans_before_running() {
        let engine = FlamesEngine::new();
        let clean = engine.run("John", "Mary").unwrap();
        let messy = engine.run("Jo3hn!", "ma ry ").unwrap();
        assert_eq!(clean.relationship, messy.relationship);
        assert_eq!(clean.pairs, messy.pairs);
    }

    #[test]
    fn test_identical_names_fail_with_no_survivors() {
        let err = FlamesEngine::new().run("Anna", "Anna").unwrap_err();
        assert_eq!(err, FlamesError::NoSurvivors);
    }

    #[test]
    fn test_empty_after_clean_fails() {
        let err = FlamesEngine::new().run("!!!", "Mary").unwrap_err();
        assert_eq!(
            err,
            FlamesError::InvalidInput {
                which: NameField::First
            }
        );
    }

    #[test]
    fn test_idempotent_outcomes() {
        let engine = FlamesEngine::new();
        let first = engine.run("Alice", "Bob").unwrap();
        let second = engine.run("Alice", "Bob").unwrap();
        assert_eq!(first.relationship, second.relationship);
        assert_eq!(first.pairs, second.pairs);
        assert_eq!(first.rounds, second.rounds);
    }
}
