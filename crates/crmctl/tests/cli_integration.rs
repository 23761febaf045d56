//! CLI integration tests for crmctl.
//!
//! These verify help output, argument parsing, and the selection lifecycle
//! paths that work without a backend. Nothing here needs a running server.

use assert_cmd::Command;
use predicates::prelude::*;

/// Get a command for the crmctl binary.
fn crmctl() -> Command {
    Command::cargo_bin("crmctl").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Help and Version Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_help_displays() {
    crmctl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Admin CLI for the CRM backend"));
}

#[test]
fn test_version_displays() {
    crmctl()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("crmctl"));
}

#[test]
fn test_help_lists_subcommands() {
    crmctl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("user"))
        .stdout(predicate::str::contains("contact"))
        .stdout(predicate::str::contains("note"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Subcommand Help Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_user_help() {
    crmctl()
        .args(["user", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("select"))
        .stdout(predicate::str::contains("exit"));
}

#[test]
fn test_contact_help() {
    crmctl()
        .args(["contact", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_note_help() {
    crmctl()
        .args(["note", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("update"))
        .stdout(predicate::str::contains("delete"));
}

#[test]
fn test_note_create_help_names_contact_ids() {
    crmctl()
        .args(["note", "create", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--contact-ids"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Invalid Input Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_unknown_subcommand_fails() {
    crmctl()
        .arg("unknown-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_invalid_flag_fails() {
    crmctl()
        .arg("--invalid-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_user_create_requires_credentials() {
    crmctl()
        .args(["user", "create"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_note_create_requires_contact_ids() {
    crmctl()
        .args(["note", "create", "Meeting Notes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--contact-ids"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Selection Lifecycle (offline paths)
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_user_exit_without_selection_is_a_friendly_noop() {
    let dir = tempfile::tempdir().unwrap();
    crmctl()
        .current_dir(dir.path())
        .args(["user", "exit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No user is currently selected"));
}

#[test]
fn test_user_exit_clears_an_existing_selection() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join(".crm-context.json");
    std::fs::write(&file, r#"{"user_id":"42","username":"joe"}"#).unwrap();

    crmctl()
        .current_dir(dir.path())
        .args(["user", "exit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("joe"));

    assert!(!file.exists());
}

#[test]
fn test_user_info_without_selection_hints_at_select() {
    let dir = tempfile::tempdir().unwrap();
    crmctl()
        .current_dir(dir.path())
        .args(["user", "info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No user currently selected"));
}

#[test]
fn test_contact_list_without_any_target_fails_with_both_remedies() {
    let dir = tempfile::tempdir().unwrap();
    crmctl()
        .current_dir(dir.path())
        .args(["contact", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--user-id"))
        .stderr(predicate::str::contains("user select"));
}
