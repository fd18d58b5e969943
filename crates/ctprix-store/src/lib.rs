//! ctprix Store - on-disk artifacts
//!
//! Two documents live on disk: the aggregated dataset (written by `fetch`,
//! read at every load) and the user's last filter state. Everything else is
//! in-memory only.

pub mod artifact;
pub mod filters;

pub use artifact::{load_dataset, save_dataset};
pub use filters::{load_filters, save_filters};
