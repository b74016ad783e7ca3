pub mod consolidate;
pub mod filter;
pub mod naming;
pub mod pipeline;
pub mod types;
pub mod writer;
