use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fatal error kinds for a flattening run.
///
/// Every variant aborts the run; skipped files (empty, OS metadata) are
/// reported outcomes, not errors, and never appear here.
#[derive(Debug, Error)]
pub enum FlattenError {
    #[error("Unsupported source format: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("{format} support is not available: rebuild with the `{feature}` feature enabled")]
    MissingCodec {
        format: &'static str,
        feature: &'static str,
    },

    #[error("Failed to read source: {path}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output directory is not empty: {0}")]
    OutputNotEmpty(PathBuf),

    #[error("Failed to write: {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FlattenError {
    pub fn source_read(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::SourceRead {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn write(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Process exit code for this error kind.
    /// Callers map kinds to distinct codes without matching on variants.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnsupportedFormat(_) => 2,
            Self::MissingCodec { .. } => 3,
            Self::SourceRead { .. } => 4,
            Self::OutputNotEmpty(_) => 5,
            Self::Write { .. } => 6,
        }
    }
}

pub type FlattenResult<T> = Result<T, FlattenError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;
