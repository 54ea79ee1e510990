//! Name tokens and their letter slots

use serde::{Deserialize, Serialize};

/// One letter of a cleaned name, plus its cancellation flag
///
/// A slot is cancelled at most once and never un-cancels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterSlot {
    /// Uppercase letter in A-Z
    pub ch: char,
    /// Set by the canceller when matched against the other name
    pub cancelled: bool,
}

impl LetterSlot {
    /// Create a fresh, un-cancelled slot
    pub fn new(ch: char) -> Self {
        Self {
            ch,
            cancelled: false,
        }
    }
}

/// A cleaned, letters-only name
///
/// Invariant: every slot is in A-Z and there is at least one slot.
/// The normalizer is the only constructor that enforces this; `raw`
/// keeps the user's original input for display and share output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameToken {
    /// Original user input, trimmed (for display only)
    pub raw: String,
    /// Ordered letter slots of the cleaned name
    pub slots: Vec<LetterSlot>,
}

impl NameToken {
    /// Build a token from a cleaned (uppercase A-Z only) string
    pub fn new(raw: impl Into<String>, cleaned: &str) -> Self {
        Self {
            raw: raw.into(),
            slots: cleaned.chars().map(LetterSlot::new).collect(),
        }
    }

    /// Number of letter slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when the token has no slots (rejected by the normalizer)
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The cleaned name as a string
    pub fn cleaned(&self) -> String {
        self.slots.iter().map(|s| s.ch).collect()
    }

    /// Slots that survived cancellation
    pub fn survivors(&self) -> usize {
        self.slots.iter().filter(|s| !s.cancelled).count()
    }
}

impl std::fmt::Display for NameToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.cleaned())
    }
}

// =============================================================================
// TESTS
// =============================================================================
