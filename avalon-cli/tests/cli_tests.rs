//! End-to-end tests for the `avalon` binary

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Fresh working directory holding an empty `avalon.json`, so results never
/// depend on files left in the shared temp dir
fn workdir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("avalon-cli-{}-{name}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create workdir");
    std::fs::write(dir.join("avalon.json"), "{}").expect("write config");
    dir
}

fn spawn_in(dir: &Path, args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_avalon"))
        .args(args)
        .arg("--log-level")
        .arg("silent")
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn avalon");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin)
        .expect("write stdin");
    child.wait_with_output().expect("wait avalon")
}

fn run_with_bytes(name: &str, args: &[&str], stdin: &[u8]) -> Output {
    let dir = workdir(name);
    let config = dir.join("avalon.json");
    let config = config.to_str().expect("utf-8 temp path");
    let mut full_args = vec!["--config", config];
    full_args.extend_from_slice(args);
    let output = spawn_in(&dir, &full_args, stdin);
    std::fs::remove_dir_all(&dir).ok();
    output
}

fn run_with_stdin(name: &str, args: &[&str], stdin: &str) -> Output {
    run_with_bytes(name, args, stdin.as_bytes())
}

#[test]
fn test_stdin_listing() {
    let output = run_with_stdin("listing", &[], "let five = 5;");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Let: let\nIdentifier: five\nAssign: =\nIntegerLiteral: 5\nSemicolon: ;\nEndOfInput: \n"
    );
}

#[test]
fn test_illegal_character_is_listed() {
    let output = run_with_stdin("illegal", &["-"], "tag: x");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Illegal: :"));
}

#[test]
fn test_strict_mode_exits_with_failure() {
    let output = run_with_stdin("strict", &["--strict"], "note a\n  @");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("illegal character '@' at 2:3"), "{stderr}");
}

#[test]
fn test_json_format() {
    let output = run_with_stdin("json", &["--format", "json"], "x");
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid json output");
    assert_eq!(value[0]["kind"], "Identifier");
    assert_eq!(value[1]["kind"], "EndOfInput");
}

#[test]
fn test_missing_input_file() {
    let output = run_with_stdin("missing", &["definitely/not/here.av"], "");
    assert!(!output.status.success());
}

#[test]
fn test_invalid_utf8_scans_as_illegal() {
    let output = run_with_bytes("bytes", &[], b"let x = \xff;");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Let: let\nIdentifier: x\nAssign: =\nIllegal: \u{FFFD}\nSemicolon: ;\nEndOfInput: \n"
    );
}

#[test]
fn test_config_file_picked_up_from_working_dir() {
    let dir = workdir("auto-config");
    std::fs::write(dir.join("avalon.json"), r#"{ "output": { "format": "json" } }"#)
        .expect("write config");
    let output = spawn_in(&dir, &[], b"x");
    std::fs::remove_dir_all(&dir).ok();
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid json output");
    assert_eq!(value[0]["text"], "x");
}
