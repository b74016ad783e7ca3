//! Per-format archive extraction into a run-scoped scratch directory.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use super::types::SourceFormat;
use crate::types::errors::{FlattenError, FlattenResult};

/// Extract the archive at `archive_path` into `dest`.
///
/// Format dispatch happens here, once; callers never branch on format.
/// Returns the number of regular files placed in the scratch directory.
pub fn extract_archive(
    archive_path: &Path,
    dest: &Path,
    format: SourceFormat,
) -> FlattenResult<usize> {
    match format {
        SourceFormat::Zip => extract_zip(archive_path, dest),
        SourceFormat::Tar => extract_tar(archive_path, dest, TarCompression::Plain),
        SourceFormat::TarGz => extract_tar(archive_path, dest, TarCompression::Gzip),
        SourceFormat::TarBz2 => extract_tar(archive_path, dest, TarCompression::Bzip2),
        SourceFormat::TarXz => extract_tar(archive_path, dest, TarCompression::Xz),
        SourceFormat::Gzip => extract_gzip(archive_path, dest),
        SourceFormat::SevenZ => extract_7z(archive_path, dest),
        SourceFormat::Rar => extract_rar(archive_path, dest),
    }
}

fn extract_zip(archive_path: &Path, dest: &Path) -> FlattenResult<usize> {
    let file =
        fs::File::open(archive_path).map_err(|e| FlattenError::source_read(archive_path, e))?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| FlattenError::source_read(archive_path, io::Error::other(e)))?;

    let mut count = 0usize;
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| FlattenError::source_read(archive_path, io::Error::other(e)))?;

        let entry_path = match entry.enclosed_name() {
            Some(p) => p,
            None => continue, // Skip unsafe paths
        };
        let output_path = dest.join(entry_path);

        if entry.is_dir() {
            fs::create_dir_all(&output_path)
                .map_err(|e| FlattenError::source_read(archive_path, e))?;
        } else {
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| FlattenError::source_read(archive_path, e))?;
            }
            let mut outfile = fs::File::create(&output_path)
                .map_err(|e| FlattenError::source_read(archive_path, e))?;
            io::copy(&mut entry, &mut outfile)
                .map_err(|e| FlattenError::source_read(archive_path, e))?;
            count += 1;
        }
    }
    Ok(count)
}

enum TarCompression {
    Plain,
    Gzip,
    Bzip2,
    Xz,
}

fn extract_tar(
    archive_path: &Path,
    dest: &Path,
    compression: TarCompression,
) -> FlattenResult<usize> {
    let file =
        fs::File::open(archive_path).map_err(|e| FlattenError::source_read(archive_path, e))?;

    let reader: Box<dyn Read> = match compression {
        TarCompression::Plain => Box::new(file),
        TarCompression::Gzip => Box::new(flate2::read::GzDecoder::new(file)),
        TarCompression::Bzip2 => Box::new(bzip2::read::BzDecoder::new(file)),
        TarCompression::Xz => Box::new(xz2::read::XzDecoder::new(file)),
    };

    let mut archive = tar::Archive::new(reader);
    archive
        .unpack(dest)
        .map_err(|e| FlattenError::source_read(archive_path, e))?;

    Ok(count_files(dest))
}

/// Standalone gzip stream: one decompressed file named by stripping `.gz`.
/// The decompressed payload is written as-is; nested archives are not
/// expanded.
fn extract_gzip(archive_path: &Path, dest: &Path) -> FlattenResult<usize> {
    let file =
        fs::File::open(archive_path).map_err(|e| FlattenError::source_read(archive_path, e))?;
    let mut decoder = flate2::read::GzDecoder::new(file);

    let decompressed_name = archive_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "decompressed".to_string());
    let output_path = dest.join(decompressed_name);

    let mut outfile =
        fs::File::create(&output_path).map_err(|e| FlattenError::source_read(archive_path, e))?;
    io::copy(&mut decoder, &mut outfile)
        .map_err(|e| FlattenError::source_read(archive_path, e))?;

    Ok(1)
}

#[cfg(feature = "sevenz")]
fn extract_7z(archive_path: &Path, dest: &Path) -> FlattenResult<usize> {
    sevenz_rust::decompress_file(archive_path, dest)
        .map_err(|e| FlattenError::source_read(archive_path, io::Error::other(e.to_string())))?;
    Ok(count_files(dest))
}

#[cfg(not(feature = "sevenz"))]
fn extract_7z(_archive_path: &Path, _dest: &Path) -> FlattenResult<usize> {
    Err(FlattenError::MissingCodec {
        format: "7-Zip",
        feature: "sevenz",
    })
}

#[cfg(feature = "rar")]
fn extract_rar(archive_path: &Path, dest: &Path) -> FlattenResult<usize> {
    let path_str = archive_path.to_str().ok_or_else(|| {
        FlattenError::source_read(
            archive_path,
            io::Error::new(io::ErrorKind::InvalidData, "RAR path contains invalid UTF-8"),
        )
    })?;
    let dest_str = dest.to_str().ok_or_else(|| {
        FlattenError::source_read(
            archive_path,
            io::Error::new(io::ErrorKind::InvalidData, "scratch path contains invalid UTF-8"),
        )
    })?;

    rar::Archive::extract_all(path_str, dest_str, "")
        .map_err(|e| FlattenError::source_read(archive_path, io::Error::other(format!("{e:?}"))))?;

    Ok(count_files(dest))
}

#[cfg(not(feature = "rar"))]
fn extract_rar(_archive_path: &Path, _dest: &Path) -> FlattenResult<usize> {
    Err(FlattenError::MissingCodec {
        format: "RAR",
        feature: "rar",
    })
}

fn count_files(dest: &Path) -> usize {
    walkdir::WalkDir::new(dest)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .count()
}

#[cfg(test)]
#[path = "tests/extract_tests.rs"]
mod tests;
