//! CLI integration tests: spawn the built binary with piped stdio and
//! check the report, the formatter and the exit status.

use std::io::Write;
use std::process::{Command, Stdio};

fn jauge_path() -> std::path::PathBuf {
    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_default();

    // Integration tests live in deps; the binary sits one level up.
    if path.ends_with("deps") {
        path.pop();
    }

    if cfg!(windows) {
        path.join("jauge.exe")
    } else {
        path.join("jauge")
    }
}

fn run(args: &[&str], input: &str) -> (i32, String, String) {
    let binary = jauge_path();
    let mut child = Command::new(&binary)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|e| panic!("failed to spawn {:?}: {}", binary, e));

    child
        .stdin
        .as_mut()
        .expect("stdin handle")
        .write_all(input.as_bytes())
        .expect("write stdin");

    let output = child.wait_with_output().expect("wait for jauge");
    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

#[test]
fn valid_payload_prints_the_report_and_exits_zero() {
    let (code, stdout, _) = run(&[], "{\"a\":1}");
    assert_eq!(code, 0);
    assert!(stdout.contains("bytes       7 (utf-8)"), "{stdout}");
    assert!(stdout.contains("characters  7"), "{stdout}");
    assert!(stdout.contains("lines       1"), "{stdout}");
    assert!(stdout.contains("words       1"), "{stdout}");
    assert!(stdout.contains("payload is valid json"), "{stdout}");
}

#[test]
fn invalid_payload_still_measures_but_exits_nonzero() {
    let (code, stdout, stderr) = run(&[], "{\"a\":1,}");
    assert_ne!(code, 0);
    assert!(stdout.contains("bytes       8 (utf-8)"), "{stdout}");
    assert!(stderr.contains("trailing comma"), "{stderr}");
}

#[test]
fn format_flag_pretty_prints_valid_payloads() {
    let (code, stdout, _) = run(&["--format"], "{\"a\":1,\"b\":[1,2]}");
    assert_eq!(code, 0);
    assert_eq!(stdout, "{\n  \"a\": 1,\n  \"b\": [\n    1,\n    2\n  ]\n}\n");
}

#[test]
fn format_flag_echoes_invalid_payloads_unchanged() {
    let (code, stdout, _) = run(&["--format"], "{\"a\":1,}");
    assert_eq!(code, 0);
    assert_eq!(stdout, "{\"a\":1,}\n");
}

#[test]
fn quiet_mode_answers_with_the_exit_status_only() {
    let (code, stdout, _) = run(&["--quiet"], "{}");
    assert_eq!(code, 0);
    assert!(stdout.is_empty());

    let (code, stdout, _) = run(&["--quiet"], "{");
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
}
