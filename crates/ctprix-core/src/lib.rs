//! ctprix Core - Domain models, configuration, and French collation
//!
//! This crate contains the domain types shared by every other ctprix crate:
//! the raw open-data feed schema, the aggregated centre entity, filter state,
//! statistics types, and the layered configuration.

pub mod collate;
pub mod config;
pub mod error;
pub mod models;

pub use error::{CtprixError, Result};
