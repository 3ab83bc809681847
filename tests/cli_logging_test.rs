//! Runs the binary to check stderr logging for the scripted commands.

use std::process::{Command, Output};

fn noughts(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_noughts"))
        .args(args)
        .env("RUST_LOG", "info")
        .env("NO_COLOR", "1")
        .output()
        .unwrap()
}

#[test]
fn test_simulate_logs_inside_command_span() {
    let output = noughts(&["simulate", "--games", "2", "--seed", "1"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("X wins: 0"));
    assert!(stdout.contains("draws: 2"));

    // The summary event carries the command span as context.
    let stderr = String::from_utf8(output.stderr).unwrap();
    let line = stderr
        .lines()
        .find(|line| line.contains("Simulation finished"))
        .unwrap();
    assert!(line.contains("run_simulate"), "{line}");
}

#[test]
fn test_suggest_prints_move_with_logging_enabled() {
    let output = noughts(&["suggest", "XX.OO...X"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("O plays"));
}
