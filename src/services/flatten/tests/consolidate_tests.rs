use super::*;
use crate::services::source::types::{EntryPayload, SourceEntry};
use std::fs;
use tempfile::TempDir;

/// Materialize `files` on disk and return them as disk-backed entries.
fn disk_entries(dir: &TempDir, files: &[(&str, &str)]) -> Vec<SourceEntry> {
    let mut entries = Vec::new();
    for (rel, content) in files {
        let path = dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        entries.push(SourceEntry {
            segments: rel.split('/').map(str::to_string).collect(),
            size_bytes: content.len() as u64,
            payload: EntryPayload::Disk(path),
        });
    }
    entries
}

#[test]
fn test_merge_order_and_separators() {
    let dir = TempDir::new().unwrap();
    let entries = disk_entries(
        &dir,
        &[
            ("logs/db.log", "D"),
            ("logs/app.log", "A"),
            ("logs/app.previous.log", "P"),
        ],
    );

    let (result, merged) = consolidate(entries, 2).unwrap();
    assert_eq!(merged, 3);
    assert_eq!(result.len(), 1);

    let synthetic = &result[0];
    assert_eq!(synthetic.relative_path(), "logs/CONSOLIDATED_LOGS.log");

    let expected = "--- logs/app.previous.log ---\nP\
                    --- logs/app.log ---\nA\
                    --- logs/db.log ---\nD";
    match &synthetic.payload {
        EntryPayload::Synthesized(bytes) => {
            assert_eq!(std::str::from_utf8(bytes).unwrap(), expected)
        }
        other => panic!("expected synthesized payload, got {other:?}"),
    }
    assert_eq!(synthetic.size_bytes, expected.len() as u64);
}

#[test]
fn test_groups_below_threshold_are_untouched() {
    let dir = TempDir::new().unwrap();
    let entries = disk_entries(&dir, &[("logs/app.log", "A"), ("other/db.log", "D")]);

    // Each group holds a single log file; neither reaches the threshold.
    let (result, merged) = consolidate(entries, 2).unwrap();
    assert_eq!(merged, 0);
    assert_eq!(result.len(), 2);
    assert!(result.iter().all(|e| e.file_name() != CONSOLIDATED_LOG_NAME));
}

#[test]
fn test_threshold_is_configurable() {
    let dir = TempDir::new().unwrap();
    let files = [("app.log", "A"), ("db.log", "D")];

    let (result, merged) = consolidate(disk_entries(&dir, &files), 3).unwrap();
    assert_eq!(merged, 0);
    assert_eq!(result.len(), 2);

    let dir = TempDir::new().unwrap();
    let (result, merged) = consolidate(disk_entries(&dir, &files), 2).unwrap();
    assert_eq!(merged, 2);
    assert_eq!(result.len(), 1);
}

#[test]
fn test_root_group_synthesizes_root_entry() {
    let dir = TempDir::new().unwrap();
    let entries = disk_entries(&dir, &[("app.log", "A"), ("db.log", "D")]);

    let (result, _) = consolidate(entries, 2).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].segments, vec![CONSOLIDATED_LOG_NAME.to_string()]);
    assert_eq!(result[0].parent_path(), "");
}

#[test]
fn test_non_log_entries_pass_through() {
    let dir = TempDir::new().unwrap();
    let entries = disk_entries(
        &dir,
        &[
            ("logs/app.log", "A"),
            ("logs/db.log", "D"),
            ("logs/readme.txt", "R"),
        ],
    );

    let (result, merged) = consolidate(entries, 2).unwrap();
    assert_eq!(merged, 2);
    assert_eq!(result.len(), 2);
    assert!(result.iter().any(|e| e.file_name() == "readme.txt"));
    assert!(result.iter().any(|e| e.file_name() == CONSOLIDATED_LOG_NAME));
}

#[test]
fn test_log_suffix_match_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    let entries = disk_entries(&dir, &[("APP.LOG", "A"), ("db.log", "D")]);

    let (result, merged) = consolidate(entries, 2).unwrap();
    assert_eq!(merged, 2);
    assert_eq!(result.len(), 1);
}

#[test]
fn test_groups_consolidate_independently() {
    let dir = TempDir::new().unwrap();
    let entries = disk_entries(
        &dir,
        &[
            ("alpha/a.log", "1"),
            ("alpha/b.log", "2"),
            ("beta/a.log", "3"),
            ("beta/b.log", "4"),
        ],
    );

    let (result, merged) = consolidate(entries, 2).unwrap();
    assert_eq!(merged, 4);
    assert_eq!(result.len(), 2);

    let parents: Vec<String> = result.iter().map(|e| e.parent_path()).collect();
    assert!(parents.contains(&"alpha".to_string()));
    assert!(parents.contains(&"beta".to_string()));
}
