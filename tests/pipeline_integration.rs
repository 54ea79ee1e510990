//! Integration tests for the full pipeline
//!
//! Tests the path: raw names → normalizer → canceller → eliminator → mapper

use pretty_assertions::assert_eq;

use flames::core::{cancel_common, eliminate, map_letter, FlamesEngine, Normalizer};
use flames::types::{FlamesError, NameField, Relationship};
use flames::{ELIMINATION_ROUNDS, FLAMES_LETTERS};

/// The worked STEVE/SEVI example, end to end
#[test]
fn test_steve_sevi_full_path() {
    let outcome = FlamesEngine::new().run("STEVE", "SEVI").unwrap();

    // S, E, V cancel pairwise; survivors are E (in STEVE) and I (in SEVI)
    let cancelled: Vec<char> = outcome.pairs.iter().map(|p| p.letter).collect();
    assert_eq!(cancelled, vec!['S', 'E', 'V']);
    assert_eq!(outcome.survivor_count, 2);

    // Count 2: remove L, M, S, A, F, leaving E
    let removed: Vec<char> = outcome.rounds.iter().map(|r| r.eliminated).collect();
    assert_eq!(removed, vec!['L', 'M', 'S', 'A', 'F']);
    assert_eq!(outcome.relationship, Relationship::Enemies);
}

/// Survivor count is never negative and the pairing accounting always balances
#[test]
fn test_cancellation_accounting_invariant() {
    let normalizer = Normalizer::new();
    let cases = [
        ("Steve", "Sevi"),
        ("Alice", "Bob"),
        ("Anna", "Hannah"),
        ("Zigzag", "Gazpacho"),
        ("Q", "Q"),
        ("Aaaa", "aa"),
    ];

    for (n1, n2) in cases {
        let (mut a, mut b) = normalizer.normalize(n1, n2).unwrap();
        let total = (a.len() + b.len()) as u32;
        let outcome = cancel_common(&mut a, &mut b);

        assert_eq!(
            outcome.survivor_count + 2 * outcome.pairs.len() as u32,
            total,
            "accounting broke for {}/{}",
            n1,
            n2
        );
    }
}

/// Elimination terminates in exactly 5 rounds even for huge counts
#[test]
fn test_elimination_always_five_rounds() {
    for count in [1u32, 2, 5, 6, 7, 12, 13, 600, 1_000_003] {
        let result = eliminate(count).unwrap();
        assert_eq!(result.rounds.len(), ELIMINATION_ROUNDS, "count={}", count);
        assert!(FLAMES_LETTERS.contains(&result.survivor));
    }
}

/// Same survivor count always yields the same relationship
#[test]
fn test_elimination_determinism() {
    for count in 1..100 {
        let first = eliminate(count).unwrap();
        let second = eliminate(count).unwrap();
        assert_eq!(first.survivor, second.survivor, "count={}", count);
        assert_eq!(first.rounds, second.rounds, "count={}", count);
    }
}

/// Count 1 is plain pass-through arithmetic, removing the front each round
#[test]
fn test_count_one_trace_is_stable() {
    let expected: Vec<char> = vec!['F', 'L', 'A', 'M', 'E'];
    for _ in 0..10 {
        let result = eliminate(1).unwrap();
        let removed: Vec<char> = result.rounds.iter().map(|r| r.eliminated).collect();
        assert_eq!(removed, expected);
        assert_eq!(result.survivor, 'S');
    }
}

/// Digits and symbols are stripped before any validation happens
#[test]
fn test_messy_input_normalizes_first() {
    let (a, _) = Normalizer::new().normalize("Jo3hn!", "Mary").unwrap();
    assert_eq!(a.cleaned(), "JOHN");

    let err = Normalizer::new().normalize("123!?", "Mary").unwrap_err();
    assert_eq!(
        err,
        FlamesError::InvalidInput {
            which: NameField::First
        }
    );
}

/// Two identical runs agree on relationship, pairing, and rounds
#[test]
fn test_pipeline_idempotence() {
    let engine = FlamesEngine::new();
    let first = engine.run("Romeo", "Juliet").unwrap();
    let second = engine.run("Romeo", "Juliet").unwrap();

    assert_eq!(first.relationship, second.relationship);
    assert_eq!(first.pairs, second.pairs);
    assert_eq!(first.rounds, second.rounds);
    assert_eq!(first.survivor_count, second.survivor_count);
}

/// Full cancellation is a user-facing failure, not a crash
#[test]
fn test_identical_names_yield_no_survivors() {
    let err = FlamesEngine::new().run("Maria", "maria").unwrap_err();
    assert_eq!(err, FlamesError::NoSurvivors);
    assert!(err.is_user_correctable());
}

/// Mapper rejects letters the eliminator can never legally produce
#[test]
fn test_mapper_guards_the_invariant() {
    for ch in FLAMES_LETTERS {
        assert!(map_letter(ch).is_ok());
    }
    let err = map_letter('Z').unwrap_err();
    assert_eq!(err, FlamesError::UnknownLetter { letter: 'Z' });
    assert!(!err.is_user_correctable());
}

/// JSON output is valid and round-trips
#[test]
fn test_outcome_json_valid() {
    let outcome = FlamesEngine::new().run("Alice", "Bob").unwrap();

    let json = serde_json::to_string(&outcome).unwrap();
    assert!(json.contains("\"relationship\""));
    assert!(json.contains("\"survivor_count\""));
    assert!(json.contains("\"rounds\""));

    let restored: flames::types::FlamesOutcome = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, outcome);
}

/// Every letter F-L-A-M-E-S is reachable as a result for some count
#[test]
fn test_all_relationships_reachable() {
    let mut seen = std::collections::HashSet::new();
    for count in 1..=30 {
        seen.insert(eliminate(count).unwrap().survivor);
    }
    for ch in FLAMES_LETTERS {
        assert!(seen.contains(&ch), "letter {} never survives", ch);
    }
}
