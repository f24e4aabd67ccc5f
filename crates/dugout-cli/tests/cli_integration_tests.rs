//! Black-box tests for the dugout binary, run against a throwaway
//! database selected via the DUGOUT_* environment.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct CliHarness {
    _temp_dir: TempDir,
    db_path: String,
}

impl CliHarness {
    fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir
            .path()
            .join("cli-test.db")
            .to_string_lossy()
            .to_string();
        Self {
            _temp_dir: temp_dir,
            db_path,
        }
    }

    fn cmd(&self, args: &[&str]) -> Command {
        let mut cmd = Command::cargo_bin("dugout").expect("binary builds");
        cmd.env("DUGOUT_DATABASE", &self.db_path)
            .env("DUGOUT_TEAM", "Ducks")
            .args(args);
        cmd
    }
}

#[test]
fn test_help_and_version() {
    let harness = CliHarness::new();

    harness
        .cmd(&["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("checklist"));

    harness
        .cmd(&["--version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dugout"));

    harness.cmd(&["not-a-command"]).assert().failure();
}

#[test]
fn test_task_add_and_list() {
    let harness = CliHarness::new();

    harness
        .cmd(&[
            "task", "add", "Wash uniforms", "--category", "laundry", "--on", "2026-02-10", "--at",
            "2:30 PM",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created task"));

    harness
        .cmd(&["task", "list", "--on", "2026-02-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wash uniforms"))
        .stdout(predicate::str::contains("2:30 PM"));

    // other days list nothing
    harness
        .cmd(&["task", "list", "--on", "2026-02-11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks found"));
}

#[test]
fn test_task_add_rejects_malformed_time() {
    let harness = CliHarness::new();

    harness
        .cmd(&[
            "task", "add", "Broken", "--category", "laundry", "--on", "2026-02-10", "--at",
            "half past nine",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("time of day"));
}

#[test]
fn test_series_drives_game_day_checklist() {
    let harness = CliHarness::new();

    harness
        .cmd(&[
            "series", "add", "Ducks", "Hens", "--start", "2026-02-10", "--games", "3", "--at",
            "7:05 PM",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scheduled"));

    harness
        .cmd(&[
            "recurring", "add", "Towel wash", "--category", "sanitation", "--day", "game-day",
            "--at", "9:00 AM",
        ])
        .assert()
        .success();

    // 2026-02-10 is a home game day: the recurring task shows up bucketed
    harness
        .cmd(&["today", "--on", "2026-02-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("game day"))
        .stdout(predicate::str::contains("Towel wash"))
        .stdout(predicate::str::contains("Morning"));

    // the off day right after the series shows none of it
    harness
        .cmd(&["today", "--on", "2026-02-13"])
        .assert()
        .success()
        .stdout(predicate::str::contains("off day"));
}

#[test]
fn test_series_rejects_bad_length() {
    let harness = CliHarness::new();

    harness
        .cmd(&["series", "add", "Ducks", "Hens", "--start", "2026-02-10", "--games", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("3 or 6"));
}
