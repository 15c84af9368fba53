//! Integration tests for the task file
//!
//! These go through the public store API and check what actually lands on
//! disk, including files written by hand.

use std::fs;
use tempfile::TempDir;
use todo_tracker::task::{format, TaskLists, TaskStatus, TaskStore};

fn setup() -> (TempDir, std::path::PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tasks.txt");
    (temp, path)
}

#[test]
fn test_buy_milk_walkthrough() {
    let (_temp, path) = setup();
    let mut store = TaskStore::open(&path).unwrap();

    store.add("Buy milk").unwrap();
    store.add("Write report").unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Write report,pending\nBuy milk,pending\n"
    );

    assert_eq!(
        store.toggle("Buy milk").unwrap(),
        Some(TaskStatus::Completed)
    );
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Write report,pending\nBuy milk,completed\n"
    );

    assert!(store.edit("Buy milk", "Buy oat milk").unwrap());
    assert!(store.delete("Write report").unwrap());
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Buy oat milk,completed\n"
    );
}

#[test]
fn test_state_survives_reopen() {
    let (_temp, path) = setup();
    {
        let mut store = TaskStore::open(&path).unwrap();
        store.add("one").unwrap();
        store.add("two").unwrap();
        store.toggle("one").unwrap();
    }

    let store = TaskStore::open(&path).unwrap();
    assert_eq!(store.pending(), ["two"]);
    assert_eq!(store.completed(), ["one"]);
}

#[test]
fn test_hand_written_file_is_normalized_on_save() {
    let (_temp, path) = setup();
    fs::write(
        &path,
        "  done first,completed\n\
         no comma here\n\
         \n\
         Call Alice, Bob,pending\n\
         odd status,archived\n",
    )
    .unwrap();

    let mut store = TaskStore::open(&path).unwrap();
    assert_eq!(store.pending(), ["Call Alice, Bob", "odd status"]);
    assert_eq!(store.completed(), ["done first"]);

    store.save().unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Call Alice, Bob,pending\nodd status,pending\ndone first,completed\n"
    );
}

#[test]
fn test_duplicate_text_acts_on_first_match() {
    let (_temp, path) = setup();
    fs::write(&path, "dup,pending\ndup,pending\ndup,completed\n").unwrap();

    let mut store = TaskStore::open(&path).unwrap();
    store.toggle("dup").unwrap();
    assert_eq!(store.pending(), ["dup"]);
    assert_eq!(store.completed(), ["dup", "dup"]);

    store.delete("dup").unwrap();
    assert!(store.pending().is_empty());
    assert_eq!(store.completed(), ["dup", "dup"]);
}

#[test]
fn test_open_creates_nested_directories() {
    let (temp, _) = setup();
    let path = temp.path().join("a").join("b").join("tasks.txt");

    let store = TaskStore::open(&path).unwrap();
    assert!(path.exists());
    assert!(store.lists().is_empty());
}

#[test]
fn test_no_temp_files_left_behind() {
    let (temp, path) = setup();
    let mut store = TaskStore::open(&path).unwrap();
    for i in 0..5 {
        store.add(&format!("task {}", i)).unwrap();
    }

    let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_render_matches_store_output() {
    let lists = TaskLists {
        pending: vec!["a".to_string()],
        completed: vec!["b".to_string()],
    };
    let (_temp, path) = setup();
    TaskStore::with_lists(&path, lists.clone()).save().unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), format::render(&lists));
}
