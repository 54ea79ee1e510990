//! Letter canceller: greedy pairwise cancellation between the two names
//!
//! For each letter of A in original order, the first not-yet-cancelled
//! matching letter of B is taken. Ties break by first-available order,
//! matching the paper-and-pencil method; this is not an optimal matching.

use crate::types::{CancelledPair, NameToken};

/// Result of the cancellation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelOutcome {
    /// Cancelled pairs in match order
    pub pairs: Vec<CancelledPair>,
    /// Un-cancelled slots across both names
    pub survivor_count: u32,
}

/// Cross out common letters between the two names
///
/// Mutates the cancellation flags on both tokens; each slot is cancelled at
/// most once. Never fails: zero matches just means survivor_count equals the
/// combined length.
pub fn cancel_common(a: &mut NameToken, b: &mut NameToken) -> CancelOutcome {
    let mut pairs = Vec::new();

    for i in 0..a.slots.len() {
        if a.slots[i].cancelled {
            continue;
        }
        for j in 0..b.slots.len() {
            if b.slots[j].cancelled || b.slots[j].ch != a.slots[i].ch {
                continue;
            }
            a.slots[i].cancelled = true;
            b.slots[j].cancelled = true;
            pairs.push(CancelledPair {
                letter: a.slots[i].ch,
                a_index: i,
                b_index: j,
            });
            break;
        }
    }

    let survivor_count = (a.survivors() + b.survivors()) as u32;

    CancelOutcome {
        pairs,
        survivor_count,
    }
}

// =============================================================================
// TESTS
// =============================================================================
