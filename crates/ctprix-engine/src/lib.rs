//! ctprix Engine - aggregation, filtering, search, and statistics
//!
//! Everything in this crate is a pure, synchronous, in-memory computation
//! over data already resident: the raw feed is folded into centres exactly
//! once per load, then every view derives from the immutable collection.
//! Re-derivation is idempotent and safe to repeat without synchronization.

pub mod aggregate;
pub mod conflict;
pub mod query;
pub mod search;
pub mod stats;

pub use aggregate::{aggregate_centres, build_dataset, extract_metadata};
pub use query::QueryEngine;
pub use search::SearchIndex;
pub use stats::compute_stats;
