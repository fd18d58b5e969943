//! Diagnosing "the search works, the area filter hides it" zero-result states.
//!
//! A text search combined with a region/département selection can land on
//! zero rows even though the search itself is fine, just satisfied entirely
//! outside the selected area. This looks identical to a typo'd search in the
//! result list, so the detector distinguishes the two cases for the caller.

use ctprix_core::models::{Centre, ConflictReport, ConflictingFilters, FilterState};

use crate::query::QueryEngine;

impl QueryEngine {
    /// Diagnose whether the geographic filters alone are responsible for an
    /// empty result of the given filter state.
    ///
    /// Reports "no conflict" when there is no search, no geographic filter,
    /// or when the search is unproductive even without geography. Otherwise
    /// the text matches are re-filtered by region/département only; if that
    /// empties them, the report carries the pre-geography match count and
    /// whichever geographic filters were active.
    pub fn detect_conflict(&self, filters: &FilterState) -> ConflictReport {
        let Some(query) = filters.search_query() else {
            return ConflictReport::none();
        };
        if !filters.has_geo_filter() {
            return ConflictReport::none();
        }

        let matches = self.search_index().search(query);
        let search_results_count = matches.len();
        if search_results_count == 0 {
            // The search finds nothing anywhere: not a filter interaction
            return ConflictReport::none();
        }

        let mut filtered: Vec<&Centre> =
            matches.into_iter().map(|idx| &self.centres()[idx]).collect();
        if let Some(region) = &filters.region {
            filtered.retain(|c| &c.region == region);
        }
        if let Some(departement) = &filters.departement {
            filtered.retain(|c| &c.nom_departement == departement);
        }

        if filtered.is_empty() {
            ConflictReport {
                has_conflict: true,
                search_results_count,
                filtered_results_count: 0,
                conflicting_filters: ConflictingFilters {
                    region: filters.region.clone(),
                    departement: filters.departement.clone(),
                },
            }
        } else {
            ConflictReport::none()
        }
    }
}
