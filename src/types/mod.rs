//! Core types for the FLAMES game

mod error;
mod name;
mod outcome;
mod relationship;

pub use error::{FlamesError, NameField};
pub use name::{LetterSlot, NameToken};
pub use outcome::{CancelledPair, EliminationRound, FlamesOutcome};
pub use relationship::Relationship;
