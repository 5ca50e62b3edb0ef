//! Runs the move oracle binary end to end
use std::process::{Command, Output};

fn oracle(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_noughts"))
        .args(args)
        .output()
        .expect("failed to run the noughts binary")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).trim().to_string()
}

#[test]
fn prints_row_and_column() {
    let out = oracle(&["--mark", "A", "--strategy", "optimal", "_,_,_,_,_,_,_,_,_"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "0 0");
}

#[test]
fn cells_can_be_separate_arguments() {
    let args = ["-m", "B", "-s", "medium", "A", "A", "_", "_", "B", "_", "_", "_", "_"];
    let out = oracle(&args);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "0 2");
}

#[test]
fn pruned_search_agrees() {
    let out = oracle(&["-m", "B", "--prune", "A__ _B_ __A"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "0 1");
}

#[test]
fn wrong_number_of_cells_fails() {
    let out = oracle(&["-m", "A", "A,_,B"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("expected 9 cells, got 3"));
}

#[test]
fn unknown_strategy_fails() {
    let out = oracle(&["-m", "A", "-s", "grandmaster", "_________"]);
    assert!(!out.status.success());
}

#[test]
fn unknown_marker_fails() {
    let out = oracle(&["-m", "Z", "_________"]);
    assert!(!out.status.success());
}

#[test]
fn finished_board_fails() {
    let out = oracle(&["-m", "B", "AAA,BB_,___"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("already over"));
}
