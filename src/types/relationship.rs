//! Relationship labels, one per FLAMES letter

use serde::{Deserialize, Serialize};

/// The six possible outcomes of a FLAMES run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Relationship {
    Friends,
    Love,
    Affection,
    Marriage,
    Enemies,
    Siblings,
}

impl Relationship {
    /// Map a surviving FLAMES letter to its relationship
    pub fn from_letter(ch: char) -> Option<Self> {
        match ch {
            'F' => Some(Relationship::Friends),
            'L' => Some(Relationship::Love),
            'A' => Some(Relationship::Affection),
            'M' => Some(Relationship::Marriage),
            'E' => Some(Relationship::Enemies),
            'S' => Some(Relationship::Siblings),
            _ => None,
        }
    }

    /// The FLAMES letter this relationship corresponds to
    pub fn letter(&self) -> char {
        match self {
            Relationship::Friends => 'F',
            Relationship::Love => 'L',
            Relationship::Affection => 'A',
            Relationship::Marriage => 'M',
            Relationship::Enemies => 'E',
            Relationship::Siblings => 'S',
        }
    }

    /// Get ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            Relationship::Friends => "\x1b[36m",   // Cyan
            Relationship::Love => "\x1b[35m",      // Magenta
            Relationship::Affection => "\x1b[33m", // Yellow
            Relationship::Marriage => "\x1b[34m",  // Blue
            Relationship::Enemies => "\x1b[31m",   // Red
            Relationship::Siblings => "\x1b[32m",  // Green
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }

    /// Get emoji for the relationship
    pub fn emoji(&self) -> &'static str {
        match self {
            Relationship::Friends => "🤝",
            Relationship::Love => "❤️",
            Relationship::Affection => "💖",
            Relationship::Marriage => "💍",
            Relationship::Enemies => "😠",
            Relationship::Siblings => "👫",
        }
    }

    /// Accent color used on the share card
    pub fn accent_hex(&self) -> &'static str {
        match self {
            Relationship::Friends => "#00cec9",
            Relationship::Love => "#e84393",
            Relationship::Affection => "#fdcb6e",
            Relationship::Marriage => "#6c5ce7",
            Relationship::Enemies => "#d63031",
            Relationship::Siblings => "#0984e3",
        }
    }
}

impl std::fmt::Display for Relationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Relationship::Friends => "Friends",
            Relationship::Love => "Love",
            Relationship::Affection => "Affection",
            Relationship::Marriage => "Marriage",
            Relationship::Enemies => "Enemies",
            Relationship::Siblings => "Siblings",
        };
        write!(f, "{}", name)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_mapping_is_total_over_flames() {
        for ch in crate::FLAMES_LETTERS {
            let rel = Relationship::from_letter(ch).unwrap();
            assert_eq!(rel.letter(), ch);
        }
    }

    #[test]
    fn test_non_flames_letter_has_no_mapping() {
        assert_eq!(Relationship::from_letter('X'), None);
        assert_eq!(Relationship::from_letter('f'), None);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Relationship::Enemies.to_string(), "Enemies");
        assert_eq!(Relationship::Love.to_string(), "Love");
    }
}
