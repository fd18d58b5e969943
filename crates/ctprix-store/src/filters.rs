//! Persisted filter snapshot.
//!
//! The last-used filters survive between sessions so the user does not
//! rebuild their selection every time. Two rules from the filter contract:
//! the reference point is never persisted (it belongs to one session's map
//! interaction), and a persisted distance sort degrades to the price sort,
//! since it cannot mean anything without a reference point.

use std::fs;
use std::path::Path;

use ctprix_core::models::{FilterState, SortBy};
use ctprix_core::Result;
use serde::{Deserialize, Serialize};

/// Bumped whenever the persisted shape changes incompatibly.
const SNAPSHOT_VERSION: u32 = 3;

#[derive(Debug, Serialize, Deserialize)]
struct FilterSnapshot {
    version: u32,
    filters: FilterState,
}

/// Persist a filter state, stripping the reference point.
pub fn save_filters<P: AsRef<Path>>(filters: &FilterState, path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut persisted = filters.clone();
    persisted.reference_point = None;

    let snapshot = FilterSnapshot { version: SNAPSHOT_VERSION, filters: persisted };
    fs::write(path, serde_json::to_string_pretty(&snapshot)?)?;
    Ok(())
}

/// Load the persisted filter state, falling back to defaults.
///
/// Total: a missing, corrupt, or differently-versioned snapshot yields the
/// default filters rather than an error. A loaded state always has
/// `reference_point = None`.
pub fn load_filters<P: AsRef<Path>>(path: P) -> FilterState {
    let path = path.as_ref();

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return FilterState::default(),
    };

    let snapshot: FilterSnapshot = match serde_json::from_str(&content) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "unreadable filter snapshot, using defaults");
            return FilterState::default();
        }
    };

    if snapshot.version != SNAPSHOT_VERSION {
        tracing::debug!(
            found = snapshot.version,
            expected = SNAPSHOT_VERSION,
            "filter snapshot version mismatch, using defaults"
        );
        return FilterState::default();
    }

    let mut filters = snapshot.filters;
    filters.reference_point = None;
    if filters.sort_by == SortBy::Distance {
        filters.sort_by = SortBy::Prix;
    }
    filters
}
