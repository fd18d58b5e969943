//! Statistics and diagnostic report types.

use serde::{Deserialize, Serialize};

use super::centre::Centre;

/// Mean price and centre count for one region or département.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupStat {
    pub nom: String,
    pub prix_moyen: f64,
    pub count: usize,
}

/// Price spread within one département.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSpread {
    pub nom: String,
    pub ecart: f64,
    pub min: f64,
    pub max: f64,
}

/// Observatory aggregates over the full centre collection.
///
/// National distribution figures exclude centres with a zero reference price:
/// those are missing-data establishments, not free inspections.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub prix_moyen: f64,
    pub prix_min: f64,
    pub prix_max: f64,
    pub prix_median: f64,
    pub nombre_centres: usize,
    /// Ascending by mean price.
    pub par_region: Vec<GroupStat>,
    /// Ascending by mean price.
    pub par_departement: Vec<GroupStat>,
    /// The 10 cheapest centres, cheapest first.
    pub top_moins_chers: Vec<Centre>,
    /// The 10 most expensive centres, most expensive first.
    pub top_plus_chers: Vec<Centre>,
    /// Top 10 départements by internal price spread, widest first.
    pub ecarts_max: Vec<PriceSpread>,
}

/// Which geographic filters were active when a conflict was detected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictingFilters {
    pub region: Option<String>,
    pub departement: Option<String>,
}

/// Diagnosis of the "search matches, but not inside the selected area" state.
///
/// Produced when a text search yields results on its own but the active
/// region/département filters exclude every one of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictReport {
    pub has_conflict: bool,
    /// Matches of the text search alone, before geographic filtering.
    pub search_results_count: usize,
    pub filtered_results_count: usize,
    pub conflicting_filters: ConflictingFilters,
}

impl ConflictReport {
    /// The "no conflict" report.
    pub fn none() -> Self {
        Self {
            has_conflict: false,
            search_results_count: 0,
            filtered_results_count: 0,
            conflicting_filters: ConflictingFilters { region: None, departement: None },
        }
    }
}
