//! End-to-end tests of the strix binary.
//!
//! Every run passes `--config` with a missing file so the user's own
//! configuration never leaks in, and `--color=never` for stable output.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Config path that never exists, so defaults apply
fn no_config() -> PathBuf {
    std::env::temp_dir().join("strix-cli-tests-no-config.json")
}

/// Run strix with given args and optional stdin
fn run_strix(args: &[&str], stdin: Option<&str>) -> (String, String, bool) {
    let config = no_config();
    let mut child = Command::new(env!("CARGO_BIN_EXE_strix"))
        .args(args)
        .arg("--color=never")
        .arg("--config")
        .arg(&config)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to run strix");

    {
        let mut pipe = child.stdin.take().expect("stdin is piped");
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).expect("Failed to write stdin");
        }
    }

    let output = child.wait_with_output().expect("Failed to wait for strix");
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

fn stdout_of(args: &[&str]) -> String {
    let (stdout, stderr, ok) = run_strix(args, None);
    assert!(ok, "strix {:?} failed: {}", args, stderr);
    stdout
}

#[test]
fn test_search() {
    assert_eq!(stdout_of(&["search", "aa", "aabaa"]), "matches: 0 3\n");
    assert_eq!(stdout_of(&["search", "zz", "aabaa"]), "matches: \n");
}

#[test]
fn test_search_rejects_separator_in_input() {
    let (_, stderr, ok) = run_strix(&["search", "a", "a#a"], None);
    assert!(!ok);
    assert!(stderr.contains("separator"), "stderr: {}", stderr);
}

#[test]
fn test_z_array() {
    assert_eq!(stdout_of(&["z", "aabaa"]), "z: 0 1 0 2 1\n");
}

#[test]
fn test_suffix_array_and_lcp() {
    assert_eq!(
        stdout_of(&["sa", "banana"]),
        "sa: 5 3 1 0 4 2\nlcp: 1 3 0 0 2\n"
    );
}

#[test]
fn test_text_from_stdin() {
    let (stdout, _, ok) = run_strix(&["distinct"], Some("banana\n"));
    assert!(ok);
    assert_eq!(stdout, "distinct: 15\n");
}

#[test]
fn test_text_from_file() {
    let path = std::env::temp_dir().join(format!("strix-cli-{}.txt", std::process::id()));
    fs::write(&path, "abcbc\n").unwrap();
    let stdout = stdout_of(&["sam", "--file", path.to_str().unwrap()]);
    fs::remove_file(&path).unwrap();

    assert_eq!(stdout, "counts: 1 3 6 9 12\n");
}

#[test]
fn test_common() {
    assert_eq!(stdout_of(&["common", "2", "abab", "bab"]), "common: ab\n");
    assert_eq!(stdout_of(&["common", "9", "abab", "bab"]), "common: -\n");
}

#[test]
fn test_repeats() {
    assert_eq!(stdout_of(&["repeats", "aaaa"]), "repeats: 2\n");
}

#[test]
fn test_tree() {
    assert_eq!(
        stdout_of(&["tree", "a$", "a#"]),
        "nodes: 6\nedges: \n0 1 1 2\n0 0 1 2\n0 0 0 1\n3 1 1 2\n3 0 1 2\n"
    );
}

#[test]
fn test_argument_only_commands_reject_file() {
    for args in [
        &["common", "1", "ab", "b", "--file", "input.txt"][..],
        &["tree", "a$", "a#", "--file", "input.txt"],
        &["merge", "ab", "bc", "--file", "input.txt"],
    ] {
        let (stdout, stderr, ok) = run_strix(args, None);
        assert!(!ok, "strix {:?} accepted --file", args);
        assert!(stdout.is_empty());
        assert!(stderr.contains("does not accept --file"), "stderr: {}", stderr);
    }
}

#[test]
fn test_mask() {
    assert_eq!(stdout_of(&["mask", "ab??aba", "ababacaba"]), "matches: 2\n");
}

#[test]
fn test_mask_rejects_symbols_outside_alphabet() {
    let (_, stderr, ok) = run_strix(&["mask", "aB?", "abc"], None);
    assert!(!ok);
    assert!(stderr.contains("Invalid mask"), "stderr: {}", stderr);
}

#[test]
fn test_safe() {
    assert_eq!(stdout_of(&["safe", "-a", "binary", "00", "11"]), "safe: yes\n");

    let (stdout, _, ok) = run_strix(&["safe", "--alphabet", "binary"], Some("0 1\n"));
    assert!(ok);
    assert_eq!(stdout, "safe: no\n");
}

#[test]
fn test_merge_and_split() {
    assert_eq!(
        stdout_of(&["merge", "sample", "please", "ease", "in", "out"]),
        "merged: sampleaseinout\n"
    );
    assert_eq!(stdout_of(&["split", "abc", "ababc"]), "pieces: 2 3\n");
    assert_eq!(stdout_of(&["split", "abc", "abd"]), "possible: no\n");
}

#[test]
fn test_restore() {
    assert_eq!(stdout_of(&["restore", "0", "0", "1", "0"]), "string: abac\n");
}

#[test]
fn test_json_output() {
    let stdout = stdout_of(&["sa", "banana", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["sa"], serde_json::json!([5, 3, 1, 0, 4, 2]));
    assert_eq!(value["lcp"], serde_json::json!([1, 3, 0, 0, 2]));
}

#[test]
fn test_config_file_is_honoured() {
    let path = std::env::temp_dir().join(format!("strix-cli-config-{}.json", std::process::id()));
    fs::write(&path, r#"{"separator": "|"}"#).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_strix"))
        .args(["search", "a", "a#a", "--color=never", "--config"])
        .arg(&path)
        .output()
        .expect("Failed to run strix");
    fs::remove_file(&path).unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "matches: 0 2\n");
}

#[test]
fn test_config_command() {
    let stdout = stdout_of(&["config", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["config"]["alphabet"], "lowercase");
    assert_eq!(value["config"]["wildcard"], "?");
}
