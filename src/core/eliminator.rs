//! Counting-elimination over the FLAMES letters
//!
//! Josephus-style counting-out: step the cursor survivor_count positions
//! around the shrinking set, remove the landed-on letter, keep counting from
//! the same position. The step size is fixed for the whole run.

use crate::types::{EliminationRound, FlamesError};
use crate::{ELIMINATION_ROUNDS, FLAMES_LETTERS};

/// Full elimination trace plus the surviving letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Elimination {
    /// The five rounds in counting order
    pub rounds: Vec<EliminationRound>,
    /// The single letter left standing
    pub survivor: char,
}

/// Run the counting-elimination with the given step size
///
/// count == 0 means every letter was cancelled; there is nothing to count
/// with and the run fails. count == 1 needs no special case: the first
/// removal lands on index 0 through the same arithmetic.
pub fn eliminate(count: u32) -> Result<Elimination, FlamesError> {
    if count == 0 {
        return Err(FlamesError::NoSurvivors);
    }

    let mut letters: Vec<char> = FLAMES_LETTERS.to_vec();
    let mut rounds = Vec::with_capacity(ELIMINATION_ROUNDS);
    let mut index: usize = 0;

    while letters.len() > 1 {
        index = (index + count as usize - 1) % letters.len();
        let eliminated = letters.remove(index);
        // Cursor stays put: the next letter shifts into the removed slot
        rounds.push(EliminationRound {
            round: (rounds.len() + 1) as u8,
            index,
            eliminated,
            remaining: letters.clone(),
        });
    }

    Ok(Elimination {
        rounds,
        survivor: letters[0],
    })
}

// =============================================================================
// TESTS
// =============================================================================
