use std::fs;

use observatory_core::patch::batch;
use pretty_assertions::assert_eq;
use serde_json::json;

fn write_instructions(dir: &std::path::Path, body: serde_json::Value) -> std::path::PathBuf {
    let path = dir.join("edits.json");
    fs::write(&path, body.to_string()).unwrap();
    path
}

#[test]
fn single_edit_reports_one_of_one() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("README.md");
    fs::write(&target, "# Title\nold line\n").unwrap();
    let instr = write_instructions(
        dir.path(),
        json!({"file": target, "edits": [{"old": "old line", "new": "new line"}]}),
    );

    let lines = batch(&instr, false).unwrap();
    assert_eq!(lines, vec![format!("OK: 1/1 edits applied to {}", target.display())]);
    assert_eq!(fs::read_to_string(&target).unwrap(), "# Title\nnew line\n");
}

#[test]
fn missing_edit_is_warned_and_counted() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("notes.md");
    fs::write(&target, "alpha\nbeta\n").unwrap();
    let instr = write_instructions(
        dir.path(),
        json!({"file": target, "edits": [
            {"old": "missing", "new": "x"},
            {"old": "beta", "new": "gamma"}
        ]}),
    );

    let lines = batch(&instr, false).unwrap();
    assert_eq!(
        lines,
        vec![
            "WARN: edit #0 old_string not found, skipped".to_string(),
            format!("OK: 1/2 edits applied to {} (1 skipped)", target.display()),
        ]
    );
    assert_eq!(fs::read_to_string(&target).unwrap(), "alpha\ngamma\n");
}

#[test]
fn required_edit_aborts_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("notes.md");
    fs::write(&target, "alpha\n").unwrap();
    let instr = write_instructions(
        dir.path(),
        json!({"file": target, "edits": [
            {"old": "alpha", "new": "omega"},
            {"old": "missing", "new": "x", "required": true}
        ]}),
    );

    let err = batch(&instr, false).unwrap_err();
    assert!(err.to_string().contains("required edit #1"));
    assert_eq!(fs::read_to_string(&target).unwrap(), "alpha\n");
}
