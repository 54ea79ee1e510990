//! Result mapper: surviving letter → relationship

use crate::types::{FlamesError, Relationship};

/// Map the surviving FLAMES letter to its relationship
///
/// A letter outside F-L-A-M-E-S means the eliminator itself is broken;
/// callers surface that as a generic failure, never as a guessed result.
pub fn map_letter(letter: char) -> Result<Relationship, FlamesError> {
    Relationship::from_letter(letter).ok_or(FlamesError::UnknownLetter { letter })
}

// =============================================================================
// TESTS
// =============================================================================
