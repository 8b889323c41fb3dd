use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_binary(input: impl AsRef<[u8]>, envs: &[(&str, &str)]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_weekday-names"))
        .env_remove("WEEKDAY_ON_ERROR")
        .env_remove("RUST_LOG")
        .envs(envs.iter().copied())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // the binary may exit before reading everything
    let _ = child.stdin.take().unwrap().write_all(input.as_ref());
    child.wait_with_output().unwrap()
}

#[test]
fn test_prints_weekdays_in_order() {
    let output = run_binary("2\nJanuary 1, 2023\nJuly 4, 1776\n", &[]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Sunday\nThursday\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn test_bad_count_exits_non_zero() {
    let output = run_binary("many\nJanuary 1, 2023\n", &[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid date count"));
}

#[test]
fn test_bad_date_names_the_line() {
    let output = run_binary("2\nJanuary 1, 2023\nnot-a-date\n", &[]);
    assert!(!output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Sunday\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Line 3"), "{stderr}");
    assert!(stderr.contains("not-a-date"), "{stderr}");
}

#[test]
fn test_skip_policy_from_environment() {
    let output = run_binary(
        "3\nnot-a-date\nFebruary 29, 2020\n2023-01-01\n",
        &[("WEEKDAY_ON_ERROR", "skip")],
    );
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Saturday\nSunday\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("skipping unparseable date"));
}

#[test]
fn test_unknown_policy_is_rejected() {
    let output = run_binary("0\n", &[("WEEKDAY_ON_ERROR", "retry")]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("WEEKDAY_ON_ERROR"));
}

#[test]
fn test_non_utf8_date_is_reported_with_its_line() {
    let output = run_binary(&b"2\n2023-01-01\n\xff\xfe\n"[..], &[]);
    assert!(!output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Sunday\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Line 3"), "{stderr}");
    assert!(stderr.contains("not valid UTF-8"), "{stderr}");
}
