use std::path::PathBuf;

/// Extensions (lowercase, no dot) whose files get `.txt` appended to the
/// output name.
pub const DEFAULT_TXT_EXTENSIONS: &[&str] =
    &["yaml", "yml", "list", "log", "descr", "status", "labels"];

/// Knobs for one flattening run.
#[derive(Debug, Clone)]
pub struct FlattenOptions {
    /// Source directory or archive file.
    pub source: PathBuf,
    /// Output directory; must be empty (or absent) before the run.
    pub output: PathBuf,
    /// Merge each directory's log files into one synthetic entry.
    pub consolidate: bool,
    /// Smallest per-directory log-file count that triggers a merge.
    pub consolidate_min_files: usize,
    /// Extensions that get `.txt` appended, compared case-insensitively.
    pub txt_extensions: Vec<String>,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            source: PathBuf::new(),
            output: PathBuf::new(),
            consolidate: false,
            consolidate_min_files: 2,
            txt_extensions: DEFAULT_TXT_EXTENSIONS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

impl FlattenOptions {
    pub fn new(source: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output: output.into(),
            ..Self::default()
        }
    }
}

/// Counts reported at the end of a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub files_written: usize,
    pub skipped_empty: usize,
    pub skipped_metadata: usize,
    /// Number of source log files merged into synthetic entries.
    pub logs_consolidated: usize,
    /// Directory groups recorded in the mapping document.
    pub groups_mapped: usize,
}

impl RunSummary {
    pub fn skipped_total(&self) -> usize {
        self.skipped_empty + self.skipped_metadata
    }
}
