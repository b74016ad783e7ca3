//! Source adapters: present a directory tree or a supported archive as a
//! flat sequence of [`types::SourceEntry`] values.

pub mod extract;
pub mod types;
pub mod walker;

use std::io;
use std::path::{Path, PathBuf};

use crate::types::errors::{FlattenError, FlattenResult};
use types::{SourceEntry, SourceFormat};

/// An opened source.
///
/// Directory sources walk the tree in place. Archive sources are expanded
/// into a scratch directory that lives as long as this value, so entry
/// content can be opened lazily after listing.
pub struct Source {
    root: PathBuf,
    _scratch: Option<tempfile::TempDir>,
}

impl Source {
    /// Open `locator` as a directory or as a recognized archive.
    pub fn open(locator: &Path) -> FlattenResult<Self> {
        if locator.is_dir() {
            log::info!("Processing directory: {}", locator.display());
            return Ok(Self {
                root: locator.to_path_buf(),
                _scratch: None,
            });
        }

        if !locator.exists() {
            return Err(FlattenError::source_read(
                locator,
                io::Error::new(io::ErrorKind::NotFound, "source path does not exist"),
            ));
        }

        let format = SourceFormat::from_path(locator)
            .ok_or_else(|| FlattenError::UnsupportedFormat(locator.to_path_buf()))?;

        let scratch = tempfile::tempdir().map_err(|e| FlattenError::source_read(locator, e))?;
        log::info!("Extracting {}...", locator.display());
        let extracted = extract::extract_archive(locator, scratch.path(), format)?;
        log::debug!("Extracted {extracted} files from archive");

        Ok(Self {
            root: scratch.path().to_path_buf(),
            _scratch: Some(scratch),
        })
    }

    /// List every regular file in the source.
    ///
    /// The listing carries path and size metadata only; each entry's content
    /// is opened lazily when its bytes are first needed.
    pub fn entries(&self) -> FlattenResult<Vec<SourceEntry>> {
        walker::collect_entries(&self.root)
    }
}
