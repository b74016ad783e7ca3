use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Supported archive format, detected from the locator's file name.
///
/// Compound suffixes (`.tar.gz`, `.tar.bz2`, `.tar.xz`) are matched before
/// the trailing single suffix, so `bundle.tar.gz` is never treated as a
/// standalone gzip stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Zip,
    Tar,
    TarGz,
    TarBz2,
    TarXz,
    Gzip,
    SevenZ,
    Rar,
}

impl SourceFormat {
    /// Detect format from a file name, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_lowercase();

        if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
            return Some(Self::TarGz);
        }
        if name.ends_with(".tar.bz2") || name.ends_with(".tbz2") {
            return Some(Self::TarBz2);
        }
        if name.ends_with(".tar.xz") || name.ends_with(".txz") {
            return Some(Self::TarXz);
        }
        if name.ends_with(".tar") {
            return Some(Self::Tar);
        }
        if name.ends_with(".zip") {
            return Some(Self::Zip);
        }
        if name.ends_with(".gz") {
            return Some(Self::Gzip);
        }
        if name.ends_with(".7z") {
            return Some(Self::SevenZ);
        }
        if name.ends_with(".rar") {
            return Some(Self::Rar);
        }
        None
    }
}

/// One regular file yielded by a source.
///
/// `segments` is the source-relative path split into forward-slash
/// components; the last segment is the file name. Content is opened lazily
/// via [`SourceEntry::open`] and read exactly once.
#[derive(Debug, Clone)]
pub struct SourceEntry {
    pub segments: Vec<String>,
    pub size_bytes: u64,
    pub payload: EntryPayload,
}

/// Where an entry's bytes live.
#[derive(Debug, Clone)]
pub enum EntryPayload {
    /// Regular file on disk (the source tree or the scratch extraction dir).
    Disk(PathBuf),
    /// Bytes synthesized during the run (consolidated logs).
    Synthesized(Vec<u8>),
}

impl SourceEntry {
    /// File name (final path segment).
    pub fn file_name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or("")
    }

    /// Parent directory as a slash-joined path; empty string for the root.
    pub fn parent_path(&self) -> String {
        match self.segments.len() {
            0 | 1 => String::new(),
            n => self.segments[..n - 1].join("/"),
        }
    }

    /// Full source-relative path, slash-joined.
    pub fn relative_path(&self) -> String {
        self.segments.join("/")
    }

    /// Open the entry's content for a single sequential read.
    pub fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        match &self.payload {
            EntryPayload::Disk(path) => Ok(Box::new(File::open(path)?)),
            EntryPayload::Synthesized(bytes) => Ok(Box::new(io::Cursor::new(bytes.as_slice()))),
        }
    }
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
