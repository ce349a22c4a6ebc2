//! CPU benchmark lookup.
//!
//! - [`normalize`] - Reduce a raw CPU brand string to its model key
//! - [`table`] - The benchmark score table and its match rules

pub mod normalize;
pub mod table;

pub use normalize::{normalize, BRAND_PREFIXES, CPU_MARKER};
pub use table::{BenchmarkEntry, BenchmarkTable, MatchMode};
