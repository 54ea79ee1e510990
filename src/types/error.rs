//! Error taxonomy for a FLAMES run
//!
//! Every failure aborts the run where it is detected; nothing is retried
//! and no partial result is shown.

use serde::{Deserialize, Serialize};

/// Which of the two name inputs failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameField {
    First,
    Second,
}

impl std::fmt::Display for NameField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameField::First => write!(f, "first name"),
            NameField::Second => write!(f, "second name"),
        }
    }
}

/// All the ways a run can fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "error", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlamesError {
    /// A name is empty after stripping non-letters (user-correctable)
    InvalidInput { which: NameField },
    /// Every letter cancelled, nothing left to count with (user-correctable)
    NoSurvivors,
    /// Eliminator produced a letter outside F-L-A-M-E-S (internal defect)
    UnknownLetter { letter: char },
}

impl FlamesError {
    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "E101_INVALID_INPUT",
            Self::NoSurvivors => "E201_NO_SURVIVORS",
            Self::UnknownLetter { .. } => "E301_UNKNOWN_LETTER",
        }
    }

    /// True for errors the user can fix by changing the input
    pub fn is_user_correctable(&self) -> bool {
        !matches!(self, Self::UnknownLetter { .. })
    }
}

impl std::fmt::Display for FlamesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { which } => {
                write!(f, "{}: the {} must contain at least one letter", self.code(), which)
            }
            Self::NoSurvivors => {
                write!(f, "{}: no remaining letters to perform the FLAMES count", self.code())
            }
            Self::UnknownLetter { letter } => {
                write!(f, "{}: internal error, '{}' is not a FLAMES letter", self.code(), letter)
            }
        }
    }
}

impl std::error::Error for FlamesError {}

// =============================================================================
// TESTS
// =============================================================================
