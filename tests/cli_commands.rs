//! End-to-end tests for the `todo` binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn todo(app_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_todo"))
        .args(args)
        .env("TODO_TRACKER_DIR", app_dir)
        .env_remove("TODO_TRACKER_FILE")
        .output()
        .expect("Failed to run todo")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_add_list_toggle_delete() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    let out = todo(dir, &["add", "Buy milk"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert!(stdout(&out).contains("Added: Buy milk"));
    assert_eq!(
        fs::read_to_string(dir.join("tasks.txt")).unwrap(),
        "Buy milk,pending\n"
    );

    let out = todo(dir, &["toggle", "Buy milk"]);
    assert!(stdout(&out).contains("Resolved: Buy milk"));
    assert!(stdout(&out).contains("Pending Tasks (0) | Resolved Tasks (1)"));

    let out = todo(dir, &["list"]);
    assert!(stdout(&out).contains("  [x] Buy milk"));

    let out = todo(dir, &["delete", "Buy milk"]);
    assert!(stdout(&out).contains("Deleted: Buy milk"));
    assert_eq!(fs::read_to_string(dir.join("tasks.txt")).unwrap(), "");
}

#[test]
fn test_add_blank_fails_with_localized_message() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    let out = todo(dir, &["lang", "es"]);
    assert!(out.status.success(), "{}", stderr(&out));

    let out = todo(dir, &["add", "   "]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("Debes ingresar una tarea."));
}

#[test]
fn test_list_json() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    fs::write(dir.join("tasks.txt"), "a,pending\nb,completed\n").unwrap();

    let out = todo(dir, &["list", "--pending", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(value["pending"][0], "a");
    assert!(value.get("completed").is_none());
}

#[test]
fn test_file_flag_overrides_config() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    let other = dir.join("other.txt");

    let out = todo(dir, &["--file", other.to_str().unwrap(), "add", "elsewhere"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(fs::read_to_string(&other).unwrap(), "elsewhere,pending\n");
    assert!(!dir.join("tasks.txt").exists());
}

#[test]
fn test_unknown_language_is_rejected() {
    let temp = TempDir::new().unwrap();
    let out = todo(temp.path(), &["lang", "pt"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("en, fr, es, it, de"));
}

#[test]
fn test_lookup_text_is_trimmed_like_add() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    todo(dir, &["add", " x "]);
    let out = todo(dir, &["toggle", " x "]);
    assert!(stdout(&out).contains("Resolved: x"), "{}", stdout(&out));

    let out = todo(dir, &["edit", " x ", "y"]);
    assert!(stdout(&out).contains("Edited: x -> y"), "{}", stdout(&out));

    let out = todo(dir, &["delete", "  y"]);
    assert!(stdout(&out).contains("Deleted: y"), "{}", stdout(&out));
    assert_eq!(fs::read_to_string(dir.join("tasks.txt")).unwrap(), "");
}

#[test]
fn test_file_flag_ignores_broken_config() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    fs::write(dir.join("config.toml"), "language = [").unwrap();
    let tasks = dir.join("mine.txt");
    fs::write(&tasks, "a,pending\n").unwrap();

    let out = todo(dir, &["--file", tasks.to_str().unwrap(), "list"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert!(stdout(&out).contains("[ ] a"));

    // Without --file the config decides where tasks live, so it must parse
    let out = todo(dir, &["list"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("config.toml"));
}
