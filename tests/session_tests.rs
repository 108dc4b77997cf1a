//! Scripted end-to-end session tests.
//!
//! Each test drives a full session through an in-memory reader/writer pair,
//! then inspects both the transcript and the final formation state.

use bandhour::config::DisplayConfig;
use bandhour::{Formation, Prompter, Session, Slot, Weight};

/// Run a session over a fresh formation, returning the final formation and
/// the full transcript. The script must end with an exit command.
fn run_session(counts: &[usize], script: &'static str) -> (Formation, String) {
    let formation = Formation::new(counts).unwrap();
    let mut out = Vec::new();
    let prompter = Prompter::new(script.as_bytes(), &mut out);
    let mut session = Session::new(formation, prompter, DisplayConfig::default());
    session.run().expect("session should run to exit");
    let formation = session.into_formation();
    (formation, String::from_utf8(out).unwrap())
}

/// Run a session expected to die before exiting (exhausted input).
fn run_session_to_eof(counts: &[usize], script: &'static str) -> anyhow::Error {
    let formation = Formation::new(counts).unwrap();
    let mut out = Vec::new();
    let prompter = Prompter::new(script.as_bytes(), &mut out);
    let mut session = Session::new(formation, prompter, DisplayConfig::default());
    session.run().expect_err("session should fail on exhausted input")
}

// =============================================================================
// Basic command flow
// =============================================================================

#[test]
fn test_add_print_exit() {
    let (formation, transcript) = run_session(&[2], "A A 1 100.0 P X\n");

    assert!(transcript.contains("Musician added."));
    assert!(transcript.contains("A: 100.0    0.0"));
    assert!(transcript.contains("[ 100.0,   50.0]"));
    assert!(transcript.trim_end().ends_with("Exit"));
    assert_eq!(
        formation.slot(0, 0).unwrap(),
        Slot::Occupied(Weight::from_tenths(1_000))
    );
}

#[test]
fn test_add_remove_leaves_empty_formation() {
    let (formation, transcript) = run_session(&[3], "A A 2 68.39 R A 2 X\n");

    assert!(transcript.contains("Musician added."));
    assert!(transcript.contains("Musician removed."));
    assert_eq!(formation.slot(0, 1).unwrap(), Slot::Vacant);
    assert_eq!(formation.row_total(0).unwrap(), Weight::ZERO);
}

#[test]
fn test_one_token_per_line_is_equivalent() {
    let (compact, _) = run_session(&[2, 3], "A B 3 99.9 X\n");
    let (spread, _) = run_session(&[2, 3], "A\nB\n3\n99.9\nX\n");
    assert_eq!(compact, spread);
}

#[test]
fn test_invalid_menu_option_reprompts() {
    let (_, transcript) = run_session(&[1], "quit X\n");
    assert!(transcript.contains("Invalid option, try again"));
    assert!(transcript.trim_end().ends_with("Exit"));
}

// =============================================================================
// Retry-in-place for range and format errors
// =============================================================================

#[test]
fn test_bad_row_letter_retries() {
    let (formation, transcript) = run_session(&[2, 2], "A Z b 1 100.0 X\n");

    assert!(transcript.contains("Out of range, try again"));
    assert!(transcript.contains("Musician added."));
    assert!(formation.slot(1, 0).unwrap().is_occupied());
}

#[test]
fn test_bad_position_number_retries() {
    let (formation, transcript) = run_session(&[2], "A A 9 zero 2 150.0 X\n");

    assert!(transcript.contains("Out of range, try again"));
    assert!(transcript.contains("Invalid input, try again"));
    assert!(formation.slot(0, 1).unwrap().is_occupied());
}

#[test]
fn test_bad_weight_retries_until_in_range() {
    let (formation, transcript) = run_session(&[1], "A A 1 30 250.0 heavy 88.5 X\n");

    assert!(transcript.contains("Out of range, try again"));
    assert!(transcript.contains("Invalid input, try again"));
    assert!(transcript.contains("Musician added."));
    assert_eq!(
        formation.slot(0, 0).unwrap(),
        Slot::Occupied(Weight::from_tenths(885))
    );
}

// =============================================================================
// Rule violations abandon the operation
// =============================================================================

#[test]
fn test_occupied_slot_cancels_add_before_weight_prompt() {
    let (formation, transcript) = run_session(&[2], "A A 1 100.0 A A 1 X\n");

    assert!(transcript.contains("There is already a musician there"));
    // The abandoned add never asked for a weight.
    assert_eq!(transcript.matches("Please enter weight").count(), 1);
    assert_eq!(formation.row_total(0).unwrap(), Weight::from_tenths(1_000));
}

#[test]
fn test_capacity_violation_cancels_add() {
    let (formation, transcript) =
        run_session(&[2], "A A 1 100.0 A A 2 150.0 A A 2 90.0 X\n");

    assert!(transcript.contains("That would exceed the average weight limit"));
    assert_eq!(transcript.matches("Musician added.").count(), 2);
    assert_eq!(formation.row_total(0).unwrap(), Weight::from_tenths(1_900));
}

#[test]
fn test_vacant_slot_cancels_remove() {
    let (formation, transcript) = run_session(&[2], "R A 2 X\n");

    assert!(transcript.contains("That position is vacant"));
    assert_eq!(formation.row_total(0).unwrap(), Weight::ZERO);
}

// =============================================================================
// Print rendering
// =============================================================================

#[test]
fn test_print_renders_every_row_with_padding() {
    let (_, transcript) = run_session(&[2, 3], "A B 2 90.5 P X\n");

    let lines: Vec<&str> = transcript
        .lines()
        .filter(|l| l.starts_with("A:") || l.starts_with("B:"))
        .collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("A:   0.0    0.0"));
    assert!(lines[0].ends_with("[   0.0,    0.0]"));
    assert!(lines[1].starts_with("B:   0.0   90.5    0.0"));
    assert!(lines[1].ends_with("[  90.5,   30.2]"));
    // Unused display columns pad both rows to the same width.
    assert_eq!(lines[0].len(), lines[1].len());
}

// =============================================================================
// Input exhaustion is fatal
// =============================================================================

#[test]
fn test_eof_mid_operation_is_fatal() {
    let err = run_session_to_eof(&[2], "A A 1\n");
    assert!(err.to_string().contains("input stream exhausted"));
}

#[test]
fn test_eof_at_menu_is_fatal() {
    let err = run_session_to_eof(&[2], "P\n");
    assert!(err.to_string().contains("input stream exhausted"));
}
