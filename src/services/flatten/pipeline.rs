//! End-to-end run orchestration.

use super::types::{FlattenOptions, RunSummary};
use super::{consolidate, filter, naming::NamingEngine, writer};
use crate::services::source::Source;
use crate::types::errors::FlattenResult;

/// Flatten `options.source` into `options.output`.
///
/// Stages run strictly in sequence: precondition check, source listing,
/// filtering, optional log consolidation, naming, file writes, mapping
/// document. Single-threaded by design; the only run-scoped mutable state
/// is owned by the naming engine.
pub fn run(options: &FlattenOptions) -> FlattenResult<RunSummary> {
    writer::ensure_output_ready(&options.output)?;

    let source = Source::open(&options.source)?;
    let entries = source.entries()?;
    log::info!("Found {} files in source", entries.len());

    let outcome = filter::apply(entries);
    let mut summary = RunSummary {
        skipped_empty: outcome.skipped_empty,
        skipped_metadata: outcome.skipped_metadata,
        ..RunSummary::default()
    };

    let kept = if options.consolidate {
        let (kept, merged) =
            consolidate::consolidate(outcome.kept, options.consolidate_min_files)?;
        summary.logs_consolidated = merged;
        kept
    } else {
        outcome.kept
    };

    let plan = NamingEngine::with_txt_extensions(options.txt_extensions.clone()).assign(kept);
    summary.groups_mapped = plan.mappings.len();

    summary.files_written = writer::write_entries(&options.output, &plan)?;
    writer::write_mapping_doc(&options.output, &plan.mappings)?;

    Ok(summary)
}

#[cfg(test)]
#[path = "tests/pipeline_tests.rs"]
mod tests;
