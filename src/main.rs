//! FLAMES CLI
//!
//! Usage:
//!   flames Steve Sevi                        # Single animated run
//!   flames --fast Steve Sevi                 # Same, no pacing delays
//!   flames --interactive                     # Prompt for name pairs in a loop
//!   flames --json Steve Sevi                 # JSON outcome, no animation
//!   flames --share Steve Sevi                # Also write an SVG share card

use clap::Parser;
use std::io::{self, BufRead, Write};

use flames::core::{save_share_card, soft_check, FlamesEngine};
use flames::present::{PresentOptions, Presenter};
use flames::types::FlamesOutcome;
use flames::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "flames",
    version = VERSION,
    about = "FLAMES - the name-compatibility counting game",
    long_about = "FLAMES takes two names, crosses out their common letters, then counts\n\
                  around the letters F-L-A-M-E-S with the number of surviving letters,\n\
                  removing one letter per round until one remains.\n\n\
                  Letters: F=Friends L=Love A=Affection M=Marriage E=Enemies S=Siblings\n\n\
                  Modes:\n  \
                  NAME1 NAME2    Single animated run\n  \
                  --interactive  Prompt for name pairs in a loop\n  \
                  --json         Print the full outcome as JSON, skip animation"
)]
struct Args {
    /// First name
    name1: Option<String>,

    /// Second name
    name2: Option<String>,

    /// Interactive mode - prompt for name pairs until 'quit'
    #[arg(short, long)]
    interactive: bool,

    /// Output the outcome as JSON (skips animation)
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Skip pacing delays
    #[arg(short, long)]
    fast: bool,

    /// Show the full cancellation and elimination trace
    #[arg(long)]
    verbose: bool,

    /// Write an SVG share card after a successful run
    #[arg(short, long)]
    share: bool,

    /// Directory for share cards (default: ./shares)
    #[arg(long, default_value = "./shares")]
    share_dir: String,
}

fn main() {
    let args = Args::parse();

    if args.no_color || args.json {
        colored::control::set_override(false);
    }

    if args.interactive {
        run_interactive(&args);
    } else if let (Some(name1), Some(name2)) = (&args.name1, &args.name2) {
        if !run_single(name1, name2, &args) {
            std::process::exit(1);
        }
    } else {
        // Default to interactive when no names given
        run_interactive(&args);
    }
}

/// Run one calculation; returns false when the run failed
fn run_single(name1: &str, name2: &str, args: &Args) -> bool {
    let engine = FlamesEngine::new();
    let presenter = Presenter::new(PresentOptions {
        fast: args.fast || args.json,
    });

    warn_soft_check(name1, name2, args);

    let outcome = match engine.run(name1, name2) {
        Ok(outcome) => outcome,
        Err(err) => {
            if args.json {
                println!("{}", serde_json::to_string(&err).unwrap_or_default());
            } else if err.is_user_correctable() {
                presenter.present_error(&err.to_string());
            } else {
                presenter.present_error("Something went wrong computing the result.");
                eprintln!("{}", err);
            }
            return false;
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome).unwrap());
    } else {
        presenter.present(&outcome);
        if args.no_color {
            println!("{}", outcome.to_parseable_string());
        } else {
            println!("{}", outcome.to_terminal_string());
        }
        if args.verbose {
            print_trace(&outcome);
        }
    }

    if args.share {
        match save_share_card(&outcome, &args.share_dir) {
            Ok(path) => {
                if !args.json {
                    println!("Share card saved: {}", path);
                }
            }
            Err(e) => eprintln!("Share card save failed: {}", e),
        }
    }

    true
}

/// Interactive mode: prompt for a pair of names per round
fn run_interactive(args: &Args) {
    let presenter = Presenter::new(PresentOptions {
        fast: args.fast || args.json,
    });

    print_header(args.no_color);
    println!("Enter two names per round. Type 'quit' to exit.");
    println!();

    let stdin = io::stdin();
    let mut runs = 0u64;

    loop {
        presenter.progress(1);

        let name1 = match prompt_name(&stdin, "First name") {
            Some(name) => name,
            None => break,
        };
        let name2 = match prompt_name(&stdin, "Second name") {
            Some(name) => name,
            None => break,
        };

        // A failed run leaves nothing behind; just prompt again
        run_single(&name1, &name2, args);
        runs += 1;
        println!();
    }

    println!("\nSession ended. Runs: {}", runs);
}

/// Read one name from stdin; None means quit/EOF
fn prompt_name(stdin: &io::Stdin, label: &str) -> Option<String> {
    loop {
        print!("{}: ", label);
        io::stdout().flush().ok();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return None,
            Ok(_) => {}
            Err(_) => return None,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            return None;
        }
        if line.is_empty() {
            continue;
        }
        return Some(line.to_string());
    }
}

/// Advisory warning when raw input carries digits or punctuation
fn warn_soft_check(name1: &str, name2: &str, args: &Args) {
    if args.json {
        return;
    }
    for (label, raw) in [("first", name1), ("second", name2)] {
        if !soft_check(raw) {
            println!(
                "⚠ The {} name contains characters besides letters; they will be ignored.",
                label
            );
        }
    }
}

/// Print header
fn print_header(no_color: bool) {
    if no_color {
        println!("========================================");
        println!("  FLAMES v{}", VERSION);
        println!("========================================");
    } else {
        println!("\x1b[1m╔══════════════════════════════════════╗\x1b[0m");
        println!("\x1b[1m║         🔥 FLAMES v{} 🔥          ║\x1b[0m", VERSION);
        println!("\x1b[1m╚══════════════════════════════════════╝\x1b[0m");
    }
    println!();
}

/// Print the full trace of one run
fn print_trace(outcome: &FlamesOutcome) {
    println!("┌─────────────────────────────────────────┐");
    println!(
        "│ Names: {} + {}",
        outcome.name_a.cleaned(),
        outcome.name_b.cleaned()
    );
    println!("├─────────────────────────────────────────┤");
    println!("│ Cancelled pairs:");
    for pair in &outcome.pairs {
        println!(
            "│   {} (a[{}] ↔ b[{}])",
            pair.letter, pair.a_index, pair.b_index
        );
    }
    println!("│ Survivors: {}", outcome.survivor_count);
    println!("├─────────────────────────────────────────┤");
    println!("│ Elimination:");
    for round in &outcome.rounds {
        let remaining: String = round.remaining.iter().collect();
        println!(
            "│   round {} → index {} removes {} (left: {})",
            round.round, round.index, round.eliminated, remaining
        );
    }
    println!("├─────────────────────────────────────────┤");
    println!(
        "│ Result: {} ({})",
        outcome.relationship,
        outcome.relationship.letter()
    );
    println!("└─────────────────────────────────────────┘");
}
