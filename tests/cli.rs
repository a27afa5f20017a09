use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn analyze_reads_stdin_and_prints_json() {
    Command::cargo_bin("unslop")
        .unwrap()
        .arg("analyze")
        .write_stdin("This is a plain sentence for the analyzer to read and score today.")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ai_score\""))
        .stdout(predicate::str::contains("\"flagged_phrases\""));
}

#[test]
fn stats_reads_stdin_and_prints_json() {
    Command::cargo_bin("unslop")
        .unwrap()
        .arg("stats")
        .write_stdin("Hello world.")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"chars\": 12"))
        .stdout(predicate::str::contains("\"words\": 2"))
        .stdout(predicate::str::contains("\"sentences\": 1"));
}

#[test]
fn humanize_with_seed_is_reproducible() {
    let run = || {
        Command::cargo_bin("unslop")
            .unwrap()
            .args(["humanize", "--level", "heavy", "--mode", "general", "--seed", "7"])
            .write_stdin("We should utilize the optimal approach. Additionally, it is working.")
            .output()
            .unwrap()
    };
    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn humanize_general_folds_contractions() {
    Command::cargo_bin("unslop")
        .unwrap()
        .args(["humanize", "--level", "light", "--mode", "general"])
        .write_stdin("We cannot stop now")
        .assert()
        .success()
        .stdout(predicate::str::contains("can't"));
}

#[test]
fn unreadable_file_exits_with_an_error() {
    Command::cargo_bin("unslop")
        .unwrap()
        .args(["analyze", "no-such-file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error reading no-such-file.txt"));
}

#[test]
fn invalid_level_is_rejected_by_the_cli() {
    Command::cargo_bin("unslop")
        .unwrap()
        .args(["humanize", "--level", "extreme"])
        .write_stdin("anything")
        .assert()
        .failure();
}
