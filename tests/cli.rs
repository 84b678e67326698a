use std::io::Write;
use std::process::{Command, Stdio};

// Runs the varcalc binary with `args`, feeding `input` on stdin
fn run_varcalc(args: &[&str], input: &str) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_varcalc"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute varcalc binary");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for varcalc")
}

#[test]
fn test_expression_argument() {
    let output = run_varcalc(&["2+x*3"], "2\n");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "Enter the value for variable x: 8\n");
}

#[test]
fn test_interactive_flag_wins_over_expression() {
    let output = run_varcalc(&["-i", "1+1"], "3*3\nexit\n");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Type 'exit'"));
    assert!(stdout.contains("> 9\n"));
    assert!(stdout.contains("Goodbye!"));
    assert!(!stdout.contains("\n2\n"));
}

#[test]
fn test_invalid_expression_prints_nan() {
    let output = run_varcalc(&["(2+x*3"], "");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stdout, "NaN\n");
    assert!(stderr.contains("Error: Invalid expression!"));
}

#[test]
fn test_division_by_zero_exits_with_failure() {
    let output = run_varcalc(&["2/0"], "");
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Division by zero!"));
}
