//! The multi-criteria query pipeline.
//!
//! Stages run strictly in order, each narrowing or reordering the previous
//! stage's result: text search, region, département, véhicules, énergies,
//! price bounds, sort. Order matters: the numeric and sort stages operate on
//! the already text- and geo-filtered set.

use std::cmp::Ordering;

use ctprix_core::collate::compare_fr;
use ctprix_core::models::{Centre, FilterState, SortBy, SortOrder};
use ctprix_geo::distance_km;

use crate::search::SearchIndex;

/// Query surface over an immutable centre collection.
///
/// Owns the collection and its search index; both are built once per dataset
/// load. `query` is purely functional: the same [`FilterState`] value always
/// yields the same result, and the collection is never mutated.
pub struct QueryEngine {
    centres: Vec<Centre>,
    index: SearchIndex,
}

impl QueryEngine {
    /// Build the engine (and its search index) over an aggregated collection.
    pub fn new(centres: Vec<Centre>) -> Self {
        let index = SearchIndex::build(&centres);
        Self { centres, index }
    }

    /// The full, unfiltered collection.
    pub fn centres(&self) -> &[Centre] {
        &self.centres
    }

    pub(crate) fn search_index(&self) -> &SearchIndex {
        &self.index
    }

    /// Run the filter pipeline and return the ordered subset.
    pub fn query(&self, filters: &FilterState) -> Vec<&Centre> {
        // Stage 1: text search, or the whole collection when the query is blank
        let mut result: Vec<&Centre> = match filters.search_query() {
            Some(query) => {
                self.index.search(query).into_iter().map(|idx| &self.centres[idx]).collect()
            }
            None => self.centres.iter().collect(),
        };

        // Stages 2-3: geography
        if let Some(region) = &filters.region {
            result.retain(|c| &c.region == region);
        }
        if let Some(departement) = &filters.departement {
            result.retain(|c| &c.nom_departement == departement);
        }

        // Stages 4-5: multi-select tariff facets, OR within a stage
        if !filters.vehicules.is_empty() {
            result.retain(|c| c.tarifs.iter().any(|t| filters.vehicules.contains(&t.vehicule)));
        }
        if !filters.energies.is_empty() {
            result.retain(|c| c.tarifs.iter().any(|t| filters.energies.contains(&t.energie)));
        }

        // Stage 6: price bounds, an absent bound never excludes
        if let Some(prix_min) = filters.prix_min {
            result.retain(|c| c.prix_reference >= prix_min);
        }
        if let Some(prix_max) = filters.prix_max {
            result.retain(|c| c.prix_reference <= prix_max);
        }

        // Stage 7: stable sort; reversing the comparator keeps equal pairs
        // in their prior relative order
        result.sort_by(|a, b| {
            let ordering = compare_centres(a, b, filters);
            match filters.sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        result
    }
}

fn compare_centres(a: &Centre, b: &Centre, filters: &FilterState) -> Ordering {
    match filters.sort_by {
        SortBy::Prix => a.prix_reference.total_cmp(&b.prix_reference),
        SortBy::Nom => compare_fr(&a.nom, &b.nom),
        SortBy::Commune => compare_fr(&a.commune, &b.commune),
        SortBy::Departement => compare_fr(&a.nom_departement, &b.nom_departement),
        SortBy::Distance => match &filters.reference_point {
            Some(point) => {
                let dist_a = distance_km(point.lat, point.lng, a.lat, a.lng);
                let dist_b = distance_km(point.lat, point.lng, b.lat, b.lng);
                dist_a.total_cmp(&dist_b)
            }
            // No reference point means no distance is available: every pair
            // compares equal and the stable sort preserves the prior order.
            // This is intentional, not a 0-distance tie.
            None => Ordering::Equal,
        },
    }
}
