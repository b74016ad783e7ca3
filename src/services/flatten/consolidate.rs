//! Per-directory log consolidation.
//!
//! Runs after filtering and before naming: each directory group's log files
//! are replaced with one synthesized entry, which then flows through the
//! naming engine like any other member of that group.

use std::collections::BTreeMap;
use std::fs;

use crate::services::source::types::{EntryPayload, SourceEntry};
use crate::types::errors::{FlattenError, FlattenResult};

/// Base file name of a synthesized consolidated-log entry.
pub const CONSOLIDATED_LOG_NAME: &str = "CONSOLIDATED_LOGS.log";

const PREVIOUS_LOG_SUFFIX: &str = ".previous.log";
const LOG_SUFFIX: &str = ".log";

/// Replace each directory group's log files with one synthesized entry when
/// the group holds at least `min_files` of them; smaller groups are left
/// untouched. Returns the reworked listing and the number of source files
/// merged.
pub fn consolidate(
    entries: Vec<SourceEntry>,
    min_files: usize,
) -> FlattenResult<(Vec<SourceEntry>, usize)> {
    let mut passthrough = Vec::new();
    let mut log_groups: BTreeMap<String, Vec<SourceEntry>> = BTreeMap::new();

    for entry in entries {
        if is_log_file(entry.file_name()) {
            log_groups
                .entry(entry.parent_path())
                .or_default()
                .push(entry);
        } else {
            passthrough.push(entry);
        }
    }

    let threshold = min_files.max(1);
    let mut merged_total = 0usize;

    for (group, mut logs) in log_groups {
        if logs.len() < threshold {
            passthrough.extend(logs);
            continue;
        }

        logs.sort_by(|a, b| merge_key(a.file_name()).cmp(&merge_key(b.file_name())));

        let mut content = Vec::new();
        for log_entry in &logs {
            content.extend_from_slice(format!("--- {} ---\n", log_entry.relative_path()).as_bytes());
            match &log_entry.payload {
                EntryPayload::Disk(path) => {
                    let bytes = fs::read(path).map_err(|e| FlattenError::source_read(path, e))?;
                    content.extend_from_slice(&bytes);
                }
                EntryPayload::Synthesized(bytes) => content.extend_from_slice(bytes),
            }
        }

        log::info!(
            "Consolidated {} log files under {}",
            logs.len(),
            if group.is_empty() { "the root directory" } else { group.as_str() }
        );
        merged_total += logs.len();

        let mut segments: Vec<String> = if group.is_empty() {
            Vec::new()
        } else {
            group.split('/').map(str::to_string).collect()
        };
        segments.push(CONSOLIDATED_LOG_NAME.to_string());

        passthrough.push(SourceEntry {
            segments,
            size_bytes: content.len() as u64,
            payload: EntryPayload::Synthesized(content),
        });
    }

    Ok((passthrough, merged_total))
}

/// True for files that participate in consolidation.
fn is_log_file(name: &str) -> bool {
    has_suffix_ignore_ascii_case(name, LOG_SUFFIX)
}

/// Merge order: alphabetical by stem, with a same-stem `.previous.log`
/// placed immediately before its `.log` counterpart.
fn merge_key(name: &str) -> (String, u8) {
    if has_suffix_ignore_ascii_case(name, PREVIOUS_LOG_SUFFIX) {
        (name[..name.len() - PREVIOUS_LOG_SUFFIX.len()].to_string(), 0)
    } else if has_suffix_ignore_ascii_case(name, LOG_SUFFIX) {
        (name[..name.len() - LOG_SUFFIX.len()].to_string(), 1)
    } else {
        (name.to_string(), 2)
    }
}

fn has_suffix_ignore_ascii_case(name: &str, suffix: &str) -> bool {
    name.len() >= suffix.len()
        && name
            .get(name.len() - suffix.len()..)
            .is_some_and(|tail| tail.eq_ignore_ascii_case(suffix))
}

#[cfg(test)]
#[path = "tests/consolidate_tests.rs"]
mod tests;
