//! Entry filter: keep/skip classification ahead of naming.
//!
//! Filtering is pure: the decision depends only on the blocklist, the path
//! segments, and the entry size. Skips are reported, never raised as errors.

use crate::services::source::types::SourceEntry;

/// Why an entry was excluded from the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    EmptyFile,
    MetadataFile,
}

/// OS bookkeeping names skipped wherever they appear in a path.
const METADATA_NAMES: &[&str] = &[
    ".DS_Store",
    ".Trashes",
    ".fseventsd",
    ".Spotlight-V100",
    ".TemporaryItems",
    "Thumbs.db",
    "desktop.ini",
    ".directory",
];

/// Directory names whose whole subtree is metadata.
const METADATA_DIRS: &[&str] = &["__MACOSX", "$RECYCLE.BIN"];

/// Classify one entry; `None` means keep.
pub fn classify(entry: &SourceEntry) -> Option<SkipReason> {
    if entry.size_bytes == 0 {
        return Some(SkipReason::EmptyFile);
    }
    if is_metadata_path(&entry.segments) {
        return Some(SkipReason::MetadataFile);
    }
    None
}

/// True when any path segment matches the metadata blocklist.
pub fn is_metadata_path(segments: &[String]) -> bool {
    segments.iter().any(|part| {
        part.starts_with("._")
            || METADATA_DIRS.contains(&part.as_str())
            || METADATA_NAMES.contains(&part.as_str())
    })
}

/// Partition of a listing into kept entries and per-reason skip counts.
#[derive(Debug, Default)]
pub struct FilterOutcome {
    pub kept: Vec<SourceEntry>,
    pub skipped_empty: usize,
    pub skipped_metadata: usize,
}

/// Apply [`classify`] to a whole listing, logging each skip.
pub fn apply(entries: Vec<SourceEntry>) -> FilterOutcome {
    let mut outcome = FilterOutcome::default();

    for entry in entries {
        match classify(&entry) {
            Some(SkipReason::EmptyFile) => {
                log::debug!("Skipping empty file: {}", entry.relative_path());
                outcome.skipped_empty += 1;
            }
            Some(SkipReason::MetadataFile) => {
                log::debug!("Skipping metadata file: {}", entry.relative_path());
                outcome.skipped_metadata += 1;
            }
            None => outcome.kept.push(entry),
        }
    }

    outcome
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
