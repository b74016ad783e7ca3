//! Output directory writer and mapping-document emission.

use std::fs;
use std::io;
use std::path::Path;

use super::naming::NamingPlan;
use crate::types::errors::{FlattenError, FlattenResult};

/// Name of the provenance mapping document inside the output directory.
pub const MAPPING_FILE_NAME: &str = ".path_mappings.txt";

/// Create the output directory if missing; refuse to reuse a non-empty one.
///
/// This is the run precondition: it must pass before any write happens.
pub fn ensure_output_ready(output_dir: &Path) -> FlattenResult<()> {
    if output_dir.exists() {
        let mut entries =
            fs::read_dir(output_dir).map_err(|e| FlattenError::write(output_dir, e))?;
        if entries.next().is_some() {
            return Err(FlattenError::OutputNotEmpty(output_dir.to_path_buf()));
        }
    } else {
        fs::create_dir_all(output_dir).map_err(|e| FlattenError::write(output_dir, e))?;
    }
    Ok(())
}

/// Copy every planned entry into `output_dir`, streaming each one.
///
/// Fails fast on the first write error; partial output is left in place.
pub fn write_entries(output_dir: &Path, plan: &NamingPlan) -> FlattenResult<usize> {
    let mut written = 0usize;

    for named in &plan.entries {
        let dest = output_dir.join(&named.output_name);

        let mut reader = named
            .entry
            .open()
            .map_err(|e| FlattenError::source_read(&named.original_path, e))?;
        let mut outfile = fs::File::create(&dest).map_err(|e| FlattenError::write(&dest, e))?;
        io::copy(&mut reader, &mut outfile).map_err(|e| FlattenError::write(&dest, e))?;

        log::debug!("Processed: {} -> {}", named.original_path, named.output_name);
        written += 1;
    }

    Ok(written)
}

/// Emit the mapping document: one `token -> path` line per directory group,
/// in token order.
pub fn write_mapping_doc(output_dir: &Path, mappings: &[(String, String)]) -> FlattenResult<()> {
    let path = output_dir.join(MAPPING_FILE_NAME);

    let mut doc = String::from("# PREFIX -> SOURCE_PATH\n\n");
    for (token, group) in mappings {
        doc.push_str(token);
        doc.push_str(" -> ");
        doc.push_str(group);
        doc.push('\n');
    }

    fs::write(&path, doc).map_err(|e| FlattenError::write(&path, e))?;
    log::info!(
        "Path mapping written to {} ({} entries)",
        path.display(),
        mappings.len()
    );
    Ok(())
}

#[cfg(test)]
#[path = "tests/writer_tests.rs"]
mod tests;
