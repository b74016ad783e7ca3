//! Flatten an archive or directory tree into a single flat directory with
//! provenance-encoded, globally unique file names.

pub mod services;
pub mod types;

pub use services::flatten::pipeline::run;
pub use services::flatten::types::{FlattenOptions, RunSummary};
pub use types::errors::{FlattenError, FlattenResult};
