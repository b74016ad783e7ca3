//! Directory traversal: every regular file under a root becomes a
//! [`SourceEntry`] carrying only path and size metadata.

use std::path::Path;

use walkdir::WalkDir;

use super::types::{EntryPayload, SourceEntry};
use crate::types::errors::{FlattenError, FlattenResult};

/// Walk `root` recursively and list every regular file.
///
/// Directory entries are not yielded. Traversal is sorted by file name so
/// the listing order is stable across runs; symlinks are not followed.
pub fn collect_entries(root: &Path) -> FlattenResult<Vec<SourceEntry>> {
    let mut entries = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf());
            FlattenError::source_read(path, e.into())
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let rel = match entry.path().strip_prefix(root) {
            Ok(rel) => rel,
            Err(_) => continue,
        };

        let segments: Vec<String> = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy().to_string())
            .collect();
        if segments.is_empty() {
            continue;
        }

        let size_bytes = entry
            .metadata()
            .map_err(|e| FlattenError::source_read(entry.path(), e.into()))?
            .len();

        entries.push(SourceEntry {
            segments,
            size_bytes,
            payload: EntryPayload::Disk(entry.path().to_path_buf()),
        });
    }

    Ok(entries)
}

#[cfg(test)]
#[path = "tests/walker_tests.rs"]
mod tests;
