// Chunk: docs/chunks/persistence - Whole-file load and save
//!
//! Integration tests for opening and saving documents.
//!
//! These tests verify end-to-end load/edit/save behaviour against real files
//! in a temp directory.

use std::fs;
use tempfile::TempDir;

use gap_edit::input::parse_key_sequence;
use gap_edit::{EditorSession, PersistenceError};
use pretty_assertions::assert_eq;

fn run(session: &mut EditorSession, keys: &str) {
    for event in parse_key_sequence(keys).unwrap() {
        session.handle_key(event);
    }
}

#[test]
fn test_open_edit_save_roundtrip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("notes.txt");
    fs::write(&path, "first\nsecond").unwrap();

    let mut session = EditorSession::default();
    session.open(&path).unwrap();
    run(&mut session, "<Down><End>!<C-s>");

    assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond!");
    assert!(!session.is_dirty());
    assert!(session.status().starts_with("Saved "));

    // Reopening gives back exactly what was written.
    let mut reopened = EditorSession::default();
    reopened.open(&path).unwrap();
    assert_eq!(reopened.content(), "first\nsecond!");
}

#[test]
fn test_new_file_is_created_on_first_save() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("new.txt");

    let mut session = EditorSession::default();
    session.open(&path).unwrap();
    assert!(!path.exists());

    run(&mut session, "hi<C-s>");
    assert_eq!(fs::read_to_string(&path).unwrap(), "hi");
}

#[test]
fn test_dirty_flag_follows_edits_and_saves() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("dirty.txt");

    let mut session = EditorSession::default();
    session.open(&path).unwrap();
    assert!(!session.is_dirty());

    run(&mut session, "a");
    assert!(session.is_dirty());
    assert!(session.status_line(40).contains("dirty.txt*"));

    run(&mut session, "<C-s>");
    assert!(!session.is_dirty());

    // Undo after a save makes the document dirty again.
    run(&mut session, "<C-z>");
    assert!(session.is_dirty());
    assert_eq!(session.content(), "");
}

#[test]
fn test_save_prompt_flow_for_unnamed_document() {
    let temp = TempDir::new().unwrap();

    let mut session = EditorSession::default().with_working_dir(temp.path());
    run(&mut session, "draft<C-s>named.txt<Enter>");

    let path = temp.path().join("named.txt");
    assert_eq!(fs::read_to_string(&path).unwrap(), "draft");
    assert_eq!(session.file_path(), Some(path.as_path()));
    assert!(!session.is_dirty());

    // Later saves go straight to the named file.
    run(&mut session, "!<C-s>");
    assert_eq!(fs::read_to_string(&path).unwrap(), "draft!");
}

#[test]
fn test_open_unreadable_path_keeps_session() {
    let temp = TempDir::new().unwrap();

    let mut session = EditorSession::default();
    run(&mut session, "keep");
    let err = session.open(temp.path()).unwrap_err();

    assert!(matches!(err, PersistenceError::Read { .. }));
    assert_eq!(session.content(), "keep");
    assert!(session.file_path().is_none());
}
