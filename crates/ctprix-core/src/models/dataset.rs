//! The aggregated dataset artifact.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::centre::Centre;

/// Facet values observed across the whole dataset, for filter controls.
///
/// Each list holds the distinct values sorted with French collation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetMetadata {
    pub total_centres: usize,
    pub regions: Vec<String>,
    pub departements: Vec<String>,
    pub vehicules: Vec<String>,
    pub energies: Vec<String>,
}

/// The full aggregated dataset, loaded once per session and never mutated.
///
/// Serialized as a single JSON document by `ctprix-store`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub centres: Vec<Centre>,
    pub last_update: DateTime<Utc>,
    pub metadata: DatasetMetadata,
}
