// Chunk: docs/chunks/headless_host - Command-line host driving a session from key scripts
//!
//! Smoke tests for the `gap-edit` binary.
//!
//! These run the real executable against files in a temp directory and check
//! what ends up on disk and on stdout.

use std::fs;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn gap_edit(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gap-edit"))
        .args(args)
        .env_remove("GAP_EDIT_LOG")
        .output()
        .expect("failed to run gap-edit")
}

#[test]
fn test_keys_edit_and_save_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("hello.txt");
    fs::write(&path, "world").unwrap();

    let output = gap_edit(&[path.to_str().unwrap(), "--keys", "hello<Space><C-s>"]);

    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&path).unwrap(), "hello world");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Saved "), "stderr was: {stderr}");
}

#[test]
fn test_print_without_saving() {
    let output = gap_edit(&["--keys", "ab<Enter>cd<C-z>", "--print"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "ab\nc");
}

#[test]
fn test_quit_stops_the_script() {
    let output = gap_edit(&["--keys", "ab<Esc>cd", "--print"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "ab");
}

#[test]
fn test_keys_file_and_new_file() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("script.keys");
    let target = temp.path().join("created.txt");
    fs::write(&script, "line one<Enter>\nline two<C-s>\n").unwrap();

    let output = gap_edit(&[
        target.to_str().unwrap(),
        "--keys-file",
        script.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&target).unwrap(), "line one\nline two");
}

#[test]
fn test_config_soft_tabs() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.json");
    fs::write(&config, r#"{"soft_tab_width": 3}"#).unwrap();

    let output = gap_edit(&[
        "--config",
        config.to_str().unwrap(),
        "--keys",
        "<Tab>x",
        "--print",
    ]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "   x");
}

#[test]
fn test_bad_key_script_fails() {
    let output = gap_edit(&["--keys", "<Bogus>"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid key script"), "stderr was: {stderr}");
}

#[test]
fn test_malformed_explicit_config_fails() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.json");
    fs::write(&config, "not json").unwrap();

    let output = gap_edit(&["--config", config.to_str().unwrap()]);
    assert!(!output.status.success());
}
