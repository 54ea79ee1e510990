//! The complete result of one FLAMES run
//!
//! The outcome carries everything the presentation driver needs to replay
//! the run step by step: the cancelled pairs in match order and the five
//! elimination rounds in counting order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{NameToken, Relationship};

/// One cross-cancellation between the two names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelledPair {
    /// The matched letter
    pub letter: char,
    /// Slot index in the first name
    pub a_index: usize,
    /// Slot index in the second name
    pub b_index: usize,
}

/// One round of the counting-elimination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EliminationRound {
    /// Round number, 1 through 5
    pub round: u8,
    /// Index counted to in the working set before removal
    pub index: usize,
    /// The letter removed this round
    pub eliminated: char,
    /// Working set after removal
    pub remaining: Vec<char>,
}

/// Full result of one run, computed before any rendering happens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlamesOutcome {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// First name with final cancellation flags
    pub name_a: NameToken,
    /// Second name with final cancellation flags
    pub name_b: NameToken,
    /// Cancelled pairs in the order the canceller found them
    pub pairs: Vec<CancelledPair>,
    /// Letters left after cancellation, the elimination step size
    pub survivor_count: u32,
    /// The five elimination rounds in order
    pub rounds: Vec<EliminationRound>,
    /// Final relationship
    pub relationship: Relationship,
}

impl FlamesOutcome {
    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let color = self.relationship.color_code();
        let reset = Relationship::color_reset();
        let emoji = self.relationship.emoji();

        format!(
            "{}{} {} & {} → {} | survivors={} | letter={}{}",
            color,
            emoji,
            self.name_a.raw,
            self.name_b.raw,
            self.relationship,
            self.survivor_count,
            self.relationship.letter(),
            reset
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "names={}+{} | survivors={} | letter={} | relationship={}",
            self.name_a.cleaned(),
            self.name_b.cleaned(),
            self.survivor_count,
            self.relationship.letter(),
            self.relationship
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_outcome() -> FlamesOutcome {
        FlamesOutcome {
            timestamp: Utc::now(),
            name_a: NameToken::new("Steve", "STEVE"),
            name_b: NameToken::new("Sevi", "SEVI"),
            pairs: vec![CancelledPair {
                letter: 'S',
                a_index: 0,
                b_index: 0,
            }],
            survivor_count: 2,
            rounds: vec![EliminationRound {
                round: 1,
                index: 1,
                eliminated: 'L',
                remaining: vec!['F', 'A', 'M', 'E', 'S'],
            }],
            relationship: Relationship::Enemies,
        }
    }

    #[test]
    fn test_parseable_string_fields() {
        let formatted = sample_outcome().to_parseable_string();
        assert!(formatted.contains("names=STEVE+SEVI"));
        assert!(formatted.contains("survivors=2"));
        assert!(formatted.contains("letter=E"));
        assert!(formatted.contains("relationship=Enemies"));
    }

    #[test]
    fn test_json_roundtrip() {
        let outcome = sample_outcome();
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"survivor_count\":2"));
        assert!(json.contains("\"relationship\""));

        let restored: FlamesOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, outcome);
    }
}
