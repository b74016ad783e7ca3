//! Naming engine: provenance tokens, extension transform, and global
//! output-name deduplication.
//!
//! All naming state is run-scoped and owned by one [`NamingEngine`] value;
//! nothing here is global, so runs and tests stay isolated.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use super::types::DEFAULT_TXT_EXTENSIONS;
use crate::services::source::types::SourceEntry;

/// Label used for the root group in the mapping document.
pub const ROOT_GROUP_LABEL: &str = "(root directory)";

/// An entry with its final output filename assigned.
#[derive(Debug)]
pub struct NamedEntry {
    pub output_name: String,
    /// Original source-relative path, kept for diagnostics.
    pub original_path: String,
    pub entry: SourceEntry,
}

/// The finished plan for one run: uniquely named entries in group-then-name
/// order plus the token table for the mapping document.
#[derive(Debug, Default)]
pub struct NamingPlan {
    pub entries: Vec<NamedEntry>,
    /// `(token, group path)` pairs, one per contributing directory group.
    pub mappings: Vec<(String, String)>,
}

/// Run-scoped naming state.
#[derive(Debug)]
pub struct NamingEngine {
    assigned: HashSet<String>,
    txt_extensions: Vec<String>,
}

impl Default for NamingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl NamingEngine {
    pub fn new() -> Self {
        Self::with_txt_extensions(
            DEFAULT_TXT_EXTENSIONS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        )
    }

    /// Engine with a caller-supplied extension-transform set.
    pub fn with_txt_extensions(txt_extensions: Vec<String>) -> Self {
        Self {
            assigned: HashSet::new(),
            txt_extensions,
        }
    }

    /// Assign every entry a unique output name.
    ///
    /// Groups enumerate root-first, then lexicographically by full path;
    /// entries within a group go alphabetically by file name (byte order),
    /// so disambiguator suffixes land deterministically. Only groups that
    /// contribute at least one entry consume a token.
    pub fn assign(mut self, entries: Vec<SourceEntry>) -> NamingPlan {
        let mut groups: BTreeMap<String, Vec<SourceEntry>> = BTreeMap::new();
        for entry in entries {
            groups.entry(entry.parent_path()).or_default().push(entry);
        }
        // The root group's key is the empty string, which sorts first.
        let width = token_width(groups.len());

        let mut plan = NamingPlan::default();
        for (index, (group, mut members)) in groups.into_iter().enumerate() {
            let token = format!("{index:0width$}");
            let label = if group.is_empty() {
                ROOT_GROUP_LABEL.to_string()
            } else {
                group
            };
            plan.mappings.push((token.clone(), label));

            members.sort_by(|a, b| a.file_name().cmp(b.file_name()));
            for entry in members {
                let base = transform_base_name(entry.file_name(), &self.txt_extensions);
                let output_name = self.reserve(format!("{token}_{base}"));
                plan.entries.push(NamedEntry {
                    original_path: entry.relative_path(),
                    output_name,
                    entry,
                });
            }
        }
        plan
    }

    /// Claim `candidate`, inserting `_NNN` before the extension until free.
    fn reserve(&mut self, candidate: String) -> String {
        if self.assigned.insert(candidate.clone()) {
            return candidate;
        }
        let mut counter = 1usize;
        loop {
            let disambiguated = insert_counter(&candidate, counter);
            if self.assigned.insert(disambiguated.clone()) {
                return disambiguated;
            }
            counter += 1;
        }
    }
}

/// Zero-pad width for ordinal tokens: enough digits for the highest index,
/// never fewer than two.
fn token_width(group_count: usize) -> usize {
    let highest = group_count.saturating_sub(1);
    highest.to_string().len().max(2)
}

/// Append `.txt` when the extension is in the transform set (compared
/// case-insensitively).
///
/// Extension means what [`Path::extension`] says it means: a name like
/// `.yaml` is a dotfile with no extension, not a file with extension `yaml`.
pub fn transform_base_name(name: &str, txt_extensions: &[String]) -> String {
    match Path::new(name).extension().and_then(|e| e.to_str()) {
        Some(ext) if txt_extensions.iter().any(|t| t.eq_ignore_ascii_case(ext)) => {
            format!("{name}.txt")
        }
        _ => name.to_string(),
    }
}

/// `stem.ext` -> `stem_NNN.ext`; extensionless names get the counter
/// appended directly.
fn insert_counter(name: &str, counter: usize) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) => format!("{stem}_{counter:03}.{ext}"),
        None => format!("{name}_{counter:03}"),
    }
}

#[cfg(test)]
#[path = "tests/naming_tests.rs"]
mod tests;
