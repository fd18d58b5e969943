//! Filter state consumed by the query engine.

use serde::{Deserialize, Serialize};

/// Sort key for query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Prix,
    Nom,
    Commune,
    Departement,
    Distance,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Anchor point for distance sorting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoint {
    pub lat: f64,
    pub lng: f64,
    pub label: String,
}

/// A snapshot of every active filter, sort, and search criterion.
///
/// A plain value object: the engine never mutates it and two equal snapshots
/// always produce the same query result. The multi-select lists follow an
/// explicit contract: **an empty list means "no constraint"**, never "match
/// nothing". Likewise an absent price bound never excludes anything, and a
/// blank `search` means "no text search".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub region: Option<String>,
    pub departement: Option<String>,
    #[serde(default)]
    pub vehicules: Vec<String>,
    #[serde(default)]
    pub energies: Vec<String>,
    pub prix_min: Option<f64>,
    pub prix_max: Option<f64>,
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub sort_by: SortBy,
    #[serde(default)]
    pub sort_order: SortOrder,
    /// Only meaningful when `sort_by` is [`SortBy::Distance`]. Never
    /// persisted; always `None` right after a session loads.
    #[serde(default)]
    pub reference_point: Option<ReferencePoint>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            region: None,
            departement: None,
            vehicules: Vec::new(),
            energies: Vec::new(),
            prix_min: None,
            prix_max: None,
            search: String::new(),
            sort_by: SortBy::Prix,
            sort_order: SortOrder::Asc,
            reference_point: None,
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_departement(mut self, departement: impl Into<String>) -> Self {
        self.departement = Some(departement.into());
        self
    }

    pub fn with_vehicules(mut self, vehicules: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.vehicules = vehicules.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_energies(mut self, energies: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.energies = energies.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_prix_min(mut self, prix: f64) -> Self {
        self.prix_min = Some(prix);
        self
    }

    pub fn with_prix_max(mut self, prix: f64) -> Self {
        self.prix_max = Some(prix);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_sort(mut self, sort_by: SortBy, sort_order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.sort_order = sort_order;
        self
    }

    pub fn with_reference_point(mut self, point: ReferencePoint) -> Self {
        self.reference_point = Some(point);
        self
    }

    /// The trimmed search query, or `None` when the search is blank.
    ///
    /// A whitespace-only search is "no search", which is distinct from a
    /// query that legitimately matches nothing.
    pub fn search_query(&self) -> Option<&str> {
        let trimmed = self.search.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Whether a region or département filter is active.
    pub fn has_geo_filter(&self) -> bool {
        self.region.is_some() || self.departement.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unconstrained_price_ascending() {
        let filters = FilterState::default();
        assert!(filters.region.is_none());
        assert!(filters.vehicules.is_empty());
        assert_eq!(filters.sort_by, SortBy::Prix);
        assert_eq!(filters.sort_order, SortOrder::Asc);
        assert!(filters.search_query().is_none());
    }

    #[test]
    fn blank_search_is_no_search() {
        let filters = FilterState::new().with_search("   ");
        assert!(filters.search_query().is_none());

        let filters = FilterState::new().with_search("  Dupont ");
        assert_eq!(filters.search_query(), Some("Dupont"));
    }

    #[test]
    fn serde_round_trip_keeps_value_semantics() {
        let filters = FilterState::new()
            .with_region("Bretagne")
            .with_vehicules(["Voiture particulière"])
            .with_prix_max(90.0)
            .with_sort(SortBy::Nom, SortOrder::Desc);
        let json = serde_json::to_string(&filters).unwrap();
        let back: FilterState = serde_json::from_str(&json).unwrap();
        assert_eq!(filters, back);
    }
}
