//! Presentation driver: replays a computed outcome with paced visual steps
//!
//! The outcome is complete before the first frame prints, so pacing only
//! affects how the run looks, never what it computes. Tests and --fast run
//! with zero delay.

use std::collections::HashSet;
use std::thread::sleep;
use std::time::Duration;

use colored::Colorize;

use crate::types::{FlamesOutcome, LetterSlot, Relationship};
use crate::{
    EXPLAIN_PAUSE_MS, MATCH_HIGHLIGHT_MS, MATCH_SETTLE_MS, RESULT_REVEAL_MS, ROUND_HIGHLIGHT_MS,
    ROUND_SETTLE_MS,
};

/// How the replay should behave
#[derive(Debug, Clone, Copy, Default)]
pub struct PresentOptions {
    /// Skip all pacing delays
    pub fast: bool,
}

/// Replays outcomes on the terminal
#[derive(Debug, Default)]
pub struct Presenter {
    opts: PresentOptions,
}

impl Presenter {
    /// Create new presenter
    pub fn new(opts: PresentOptions) -> Self {
        Self { opts }
    }

    fn pause(&self, ms: u64) {
        if !self.opts.fast {
            sleep(Duration::from_millis(ms));
        }
    }

    fn explain(&self, text: &str) {
        println!("{}", text.italic().dimmed());
        self.pause(EXPLAIN_PAUSE_MS);
    }

    /// Progress indicator, step 1..=3 (enter names, calculate, result)
    pub fn progress(&self, step: u8) {
        let labels = ["Enter names", "Calculating", "Result"];
        let line: Vec<String> = labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                if i as u8 == step - 1 {
                    format!("[{}]", label).bold().to_string()
                } else {
                    format!(" {} ", label).dimmed().to_string()
                }
            })
            .collect();
        println!("{}", line.join(" → "));
        println!();
    }

    /// Replay the whole run
    pub fn present(&self, outcome: &FlamesOutcome) {
        self.progress(2);
        self.explain("Comparing letters in both names...");

        // Replay cancellation pair by pair
        let mut crossed_a: HashSet<usize> = HashSet::new();
        let mut crossed_b: HashSet<usize> = HashSet::new();

        self.print_names(outcome, &crossed_a, &crossed_b, None);
        self.pause(MATCH_SETTLE_MS);

        for pair in &outcome.pairs {
            self.print_names(outcome, &crossed_a, &crossed_b, Some(pair.a_index));
            self.explain(&format!(
                "Matching letters found: {}. Crossing them out...",
                pair.letter
            ));
            self.pause(MATCH_HIGHLIGHT_MS);

            crossed_a.insert(pair.a_index);
            crossed_b.insert(pair.b_index);
            self.print_names(outcome, &crossed_a, &crossed_b, None);
            self.pause(MATCH_SETTLE_MS);
        }

        println!(
            "Remaining Letters Count: {}",
            outcome.survivor_count.to_string().bold()
        );
        println!();
        self.explain("Eliminating letters in FLAMES based on the remaining letters count...");

        // Replay the counting rounds
        let mut working: Vec<char> = crate::FLAMES_LETTERS.to_vec();
        for round in &outcome.rounds {
            self.print_flames(&working, Some(round.index));
            self.explain(&format!(
                "Counting to {}. Eliminating \"{}\" from FLAMES.",
                outcome.survivor_count, round.eliminated
            ));
            self.pause(ROUND_HIGHLIGHT_MS);

            working.remove(round.index);
            self.print_flames(&working, None);
            self.pause(ROUND_SETTLE_MS);
        }

        self.explain(&format!(
            "The final remaining letter is \"{}\", which means...",
            outcome.relationship.letter()
        ));
        self.pause(RESULT_REVEAL_MS);

        self.print_result(outcome);
        self.progress(3);
    }

    /// Print an inline error, same placement as a result
    pub fn present_error(&self, message: &str) {
        println!();
        println!("{}", format!("✗ {}", message).red().bold());
        self.progress(1);
    }

    fn print_names(
        &self,
        outcome: &FlamesOutcome,
        crossed_a: &HashSet<usize>,
        crossed_b: &HashSet<usize>,
        highlight_a: Option<usize>,
    ) {
        // Highlight in B follows the pair being matched for the A index
        let highlight_b = highlight_a.and_then(|ai| {
            outcome
                .pairs
                .iter()
                .find(|p| p.a_index == ai)
                .map(|p| p.b_index)
        });

        println!(
            "  {}",
            render_letters(&outcome.name_a.slots, crossed_a, highlight_a)
        );
        println!(
            "  {}",
            render_letters(&outcome.name_b.slots, crossed_b, highlight_b)
        );
        println!();
    }

    fn print_flames(&self, working: &[char], highlight: Option<usize>) {
        let rendered: Vec<String> = working
            .iter()
            .enumerate()
            .map(|(i, ch)| {
                if Some(i) == highlight {
                    ch.to_string().black().on_yellow().bold().to_string()
                } else {
                    ch.to_string().bold().to_string()
                }
            })
            .collect();
        println!("  {}", rendered.join(" "));
    }

    fn print_result(&self, outcome: &FlamesOutcome) {
        let rel = outcome.relationship;
        println!();
        println!(
            "🔥 Relationship: {} {} {} 🔥",
            rel.emoji(),
            paint(rel, &rel.to_string()),
            rel.emoji()
        );
        println!();
    }
}

/// Color a label with the relationship's terminal color
fn paint(rel: Relationship, text: &str) -> String {
    match rel {
        Relationship::Friends => text.cyan().bold().to_string(),
        Relationship::Love => text.magenta().bold().to_string(),
        Relationship::Affection => text.yellow().bold().to_string(),
        Relationship::Marriage => text.blue().bold().to_string(),
        Relationship::Enemies => text.red().bold().to_string(),
        Relationship::Siblings => text.green().bold().to_string(),
    }
}

fn render_letters(
    slots: &[LetterSlot],
    crossed: &HashSet<usize>,
    highlight: Option<usize>,
) -> String {
    slots
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            if Some(i) == highlight {
                slot.ch.to_string().black().on_yellow().bold().to_string()
            } else if crossed.contains(&i) {
                slot.ch.to_string().strikethrough().dimmed().to_string()
            } else {
                slot.ch.to_string().bold().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// =============================================================================
// TESTS
// =============================================================================
