//! FLAMES: name-compatibility game
//!
//! Pipeline: normalize → cancel common letters → counting-elimination → relationship

pub mod core;
pub mod present;
pub mod types;

// =============================================================================
// GAME CONSTANTS
// =============================================================================

/// The working set the elimination starts from, in canonical order
pub const FLAMES_LETTERS: [char; 6] = ['F', 'L', 'A', 'M', 'E', 'S'];

/// Elimination always runs len(FLAMES_LETTERS) - 1 rounds
pub const ELIMINATION_ROUNDS: usize = 5;

// =============================================================================
// PRESENTATION PACING (milliseconds) - core results never depend on these
// =============================================================================

/// Pause after showing an explanation line
pub const EXPLAIN_PAUSE_MS: u64 = 500;

/// Pause while a matching letter pair is highlighted
pub const MATCH_HIGHLIGHT_MS: u64 = 1000;

/// Pause after a pair is struck through
pub const MATCH_SETTLE_MS: u64 = 500;

/// Pause while the counted-to FLAMES letter is highlighted
pub const ROUND_HIGHLIGHT_MS: u64 = 1500;

/// Pause between elimination rounds
pub const ROUND_SETTLE_MS: u64 = 500;

/// Pause before revealing the final relationship
pub const RESULT_REVEAL_MS: u64 = 1000;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
