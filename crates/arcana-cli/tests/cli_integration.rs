//! CLI Integration Tests
//!
//! End-to-end checks of the wiring between the CLI and arcana-core.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a CLI command with a temporary data directory
fn cli_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("arcana").expect("Failed to find arcana binary");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

/// Extract an ID from CLI output (format: "  ID: <value>")
fn extract_id(output: &str) -> Option<String> {
    for line in output.lines() {
        if let Some(id_part) = line.strip_prefix("  ID: ") {
            return Some(id_part.trim().to_string());
        }
    }
    None
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to run arcana");
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8_lossy(&output.stdout).to_string()
}

// ============================================================================
// Daily & Draw
// ============================================================================

#[test]
fn test_daily_is_stable_across_invocations() {
    let data_dir = TempDir::new().unwrap();

    let first = stdout_of(cli_cmd(&data_dir).arg("daily"));
    let second = stdout_of(cli_cmd(&data_dir).arg("daily"));

    assert!(first.contains("Card of the day"));
    assert_eq!(first, second);
}

#[test]
fn test_draw_prints_a_card() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("draw")
        .assert()
        .success()
        .stdout(predicate::str::contains("  ID: "))
        .stdout(predicate::str::contains("upright").or(predicate::str::contains("reversed")));
}

// ============================================================================
// Cards
// ============================================================================

#[test]
fn test_cards_list_all() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["cards", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cards (78):"));
}

#[test]
fn test_cards_list_major() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["cards", "list", "--major"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cards (22):"))
        .stdout(predicate::str::contains("The Fool"));
}

#[test]
fn test_cards_list_by_suit_and_query() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["cards", "list", "--suit", "cups", "--query", "ace"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ace of Cups"))
        .stdout(predicate::str::contains("Ace of Wands").not());
}

#[test]
fn test_cards_list_unknown_suit_fails() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["cards", "list", "--suit", "coins"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown suit"));
}

#[test]
fn test_cards_show() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["cards", "show", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Card: The Fool"))
        .stdout(predicate::str::contains("Upright:"))
        .stdout(predicate::str::contains("Reversed:"));
}

#[test]
fn test_cards_show_out_of_range() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["cards", "show", "78"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Card not found"));
}

// ============================================================================
// Spreads
// ============================================================================

#[test]
fn test_spreads_list() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["spreads", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Three Card Spread"))
        .stdout(predicate::str::contains("Celtic Cross"));
}

#[test]
fn test_spreads_show_unknown() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["spreads", "show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Spread not found"));
}

// ============================================================================
// Readings
// ============================================================================

#[test]
fn test_reading_lifecycle() {
    let data_dir = TempDir::new().unwrap();

    let created = stdout_of(cli_cmd(&data_dir).args([
        "reading",
        "create",
        "1",
        "What should I focus on?",
    ]));
    assert!(created.contains("Created reading: Three Card Spread"));
    let id = extract_id(&created).expect("reading ID in output");

    cli_cmd(&data_dir)
        .args(["reading", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(&id));

    cli_cmd(&data_dir)
        .args(["reading", "notes", &id, "The middle card rang true"])
        .assert()
        .success();

    cli_cmd(&data_dir)
        .args(["reading", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("What should I focus on?"))
        .stdout(predicate::str::contains("Notes: The middle card rang true"));

    cli_cmd(&data_dir)
        .args(["reading", "delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted reading"));

    cli_cmd(&data_dir)
        .args(["reading", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No readings found."));
}

#[test]
fn test_reading_show_invalid_id() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["reading", "show", "not-a-ulid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid reading ID"));
}

// ============================================================================
// Journal
// ============================================================================

#[test]
fn test_journal_add_and_list() {
    let data_dir = TempDir::new().unwrap();

    let added = stdout_of(cli_cmd(&data_dir).args([
        "journal",
        "add",
        "The Tower again.",
        "--title",
        "Upheaval",
        "--card",
        "16",
    ]));
    assert!(extract_id(&added).is_some());

    cli_cmd(&data_dir)
        .args(["journal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Upheaval"))
        .stdout(predicate::str::contains("The Tower again."))
        .stdout(predicate::str::contains("- The Tower"));
}

#[test]
fn test_journal_rejects_empty_entry() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["journal", "add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}

// ============================================================================
// Affirmations
// ============================================================================

#[test]
fn test_affirmations_list_filters() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["affirmations", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Affirmations (83):"));

    cli_cmd(&data_dir)
        .args(["affirmations", "list", "--daily"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Affirmations (5):"))
        .stdout(predicate::str::contains("The Fool").not());

    cli_cmd(&data_dir)
        .args(["affirmations", "list", "--cards"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Affirmations (78):"));

    cli_cmd(&data_dir)
        .args(["affirmations", "list", "--daily", "--cards"])
        .assert()
        .failure();
}

#[test]
fn test_affirmations_for_card_and_today() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["affirmations", "card", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("I have the power to create my reality."))
        .stdout(predicate::str::contains("(The Magician)"));

    cli_cmd(&data_dir)
        .args(["affirmations", "card", "78"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Card not found"));

    cli_cmd(&data_dir)
        .args(["affirmations", "today"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Today's affirmation:"));
}

#[test]
fn test_cards_show_includes_affirmation() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["cards", "show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Affirmation: I trust my intuition and inner knowing.",
        ));
}
