//! Filter, search, and sort the aggregated centres.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use ctprix_core::config::LayeredConfig;
use ctprix_core::models::{FilterState, ReferencePoint, SortBy};
use ctprix_engine::QueryEngine;
use ctprix_store::{load_dataset, load_filters, save_filters};

use crate::cli::QueryArgs;
use crate::output::OutputWriter;
use crate::output_types::{CentreRow, QueryOutput};

pub fn execute(args: QueryArgs, output: &OutputWriter, config: &LayeredConfig) -> Result<()> {
    let dataset = load_dataset(&config.dataset_path.value)?;
    let snapshot_path = filters_path(&config.dataset_path.value);

    let filters = build_filters(&args, &snapshot_path)?;
    let limit = args.limit.unwrap_or(config.result_limit.value);

    let engine = QueryEngine::new(dataset.centres);
    let results = engine.query(&filters);

    // A zero-result state can be the geo filters hiding a working search;
    // tell the user instead of showing a silently empty table.
    let conflict = engine.detect_conflict(&filters);
    if conflict.has_conflict {
        let mut hidden_by = Vec::new();
        if let Some(region) = &conflict.conflicting_filters.region {
            hidden_by.push(format!("region '{region}'"));
        }
        if let Some(departement) = &conflict.conflicting_filters.departement {
            hidden_by.push(format!("département '{departement}'"));
        }
        output.warning(format!(
            "the search matches {} centre(s) nationwide, but none within {}",
            conflict.search_results_count,
            hidden_by.join(" and ")
        ));
    }

    if args.explain {
        output.section("Query plan");
        output.kv("Search", filters.search_query().unwrap_or("(none)"));
        output.kv("Region", filters.region.as_deref().unwrap_or("(any)"));
        output.kv("Département", filters.departement.as_deref().unwrap_or("(any)"));
        output.kv("Véhicules", display_list(&filters.vehicules));
        output.kv("Énergies", display_list(&filters.energies));
        output.kv("Matches", results.len());
    }

    output.info(format!(
        "{} centre(s) match, showing {}",
        results.len(),
        results.len().min(limit)
    ));

    let rows: Vec<CentreRow> = results
        .iter()
        .take(limit)
        .map(|c| CentreRow::from_centre(c, filters.reference_point.as_ref()))
        .collect();
    output.table(rows);

    output.result(&QueryOutput {
        total_matches: results.len(),
        shown: results.len().min(limit),
        conflict: conflict.has_conflict.then_some(conflict),
        centres: results.iter().take(limit).map(|c| (*c).clone()).collect(),
    })?;

    if !args.no_save {
        if let Err(err) = save_filters(&filters, &snapshot_path) {
            tracing::warn!(%err, "could not persist filters");
        }
    }

    Ok(())
}

/// The filter snapshot lives next to the dataset artifact.
fn filters_path(dataset_path: &Path) -> PathBuf {
    match dataset_path.parent() {
        Some(parent) => parent.join("filters.json"),
        None => PathBuf::from("filters.json"),
    }
}

fn build_filters(args: &QueryArgs, snapshot_path: &Path) -> Result<FilterState> {
    let mut filters = if args.saved {
        load_filters(snapshot_path)
    } else {
        FilterState::default()
    };

    if let Some(search) = &args.search {
        filters.search = search.clone();
    }
    if let Some(region) = &args.region {
        filters.region = Some(region.clone());
    }
    if let Some(departement) = &args.departement {
        filters.departement = Some(departement.clone());
    }
    if !args.vehicules.is_empty() {
        filters.vehicules = args.vehicules.clone();
    }
    if !args.energies.is_empty() {
        filters.energies = args.energies.clone();
    }
    if let Some(prix_min) = args.prix_min {
        filters.prix_min = Some(prix_min);
    }
    if let Some(prix_max) = args.prix_max {
        filters.prix_max = Some(prix_max);
    }
    // Only an explicit flag overrides the snapshot's sort; without --saved
    // the snapshot is the default state, so prix/asc still apply
    if let Some(sort) = args.sort {
        filters.sort_by = sort.into();
    }
    if let Some(order) = args.order {
        filters.sort_order = order.into();
    }

    if let Some(near) = &args.near {
        filters.reference_point = Some(parse_reference_point(near)?);
    } else if filters.sort_by == SortBy::Distance {
        // Without an anchor the distance sort cannot order anything
        bail!("--sort distance requires --near LAT,LNG");
    }

    Ok(filters)
}

fn parse_reference_point(value: &str) -> Result<ReferencePoint> {
    let Some((lat_str, lng_str)) = value.split_once(',') else {
        bail!("invalid --near value '{value}': expected LAT,LNG");
    };
    let lat: f64 = lat_str.trim().parse()?;
    let lng: f64 = lng_str.trim().parse()?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        bail!("invalid --near value '{value}': coordinates out of range");
    }
    Ok(ReferencePoint { lat, lng, label: format!("{lat},{lng}") })
}

fn display_list(values: &[String]) -> String {
    if values.is_empty() {
        "(any)".to_string()
    } else {
        values.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{OrderArg, SortArg};
    use ctprix_core::models::SortOrder;
    use tempfile::TempDir;

    fn blank_args() -> QueryArgs {
        QueryArgs {
            search: None,
            region: None,
            departement: None,
            vehicules: Vec::new(),
            energies: Vec::new(),
            prix_min: None,
            prix_max: None,
            sort: None,
            order: None,
            near: None,
            limit: None,
            saved: false,
            no_save: false,
            explain: false,
        }
    }

    #[test]
    fn defaults_to_prix_ascending_without_snapshot_or_flags() {
        let dir = TempDir::new().unwrap();
        let filters = build_filters(&blank_args(), &dir.path().join("absent.json")).unwrap();
        assert_eq!(filters.sort_by, SortBy::Prix);
        assert_eq!(filters.sort_order, SortOrder::Asc);
    }

    #[test]
    fn saved_sort_takes_effect_without_explicit_flags() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("filters.json");
        let saved = FilterState::new().with_sort(SortBy::Nom, SortOrder::Desc);
        save_filters(&saved, &path).unwrap();

        let mut args = blank_args();
        args.saved = true;
        let filters = build_filters(&args, &path).unwrap();
        assert_eq!(filters.sort_by, SortBy::Nom);
        assert_eq!(filters.sort_order, SortOrder::Desc);
    }

    #[test]
    fn explicit_sort_flags_override_the_snapshot() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("filters.json");
        let saved = FilterState::new().with_sort(SortBy::Nom, SortOrder::Desc);
        save_filters(&saved, &path).unwrap();

        let mut args = blank_args();
        args.saved = true;
        args.sort = Some(SortArg::Commune);
        let filters = build_filters(&args, &path).unwrap();
        // The untouched direction still comes from the snapshot
        assert_eq!(filters.sort_by, SortBy::Commune);
        assert_eq!(filters.sort_order, SortOrder::Desc);

        args.order = Some(OrderArg::Asc);
        let filters = build_filters(&args, &path).unwrap();
        assert_eq!(filters.sort_order, SortOrder::Asc);
    }

    #[test]
    fn parses_reference_points() {
        let point = parse_reference_point("48.39, -4.49").unwrap();
        assert_eq!(point.lat, 48.39);
        assert_eq!(point.lng, -4.49);

        assert!(parse_reference_point("48.39").is_err());
        assert!(parse_reference_point("91.0,0.0").is_err());
        assert!(parse_reference_point("nord,ouest").is_err());
    }
}
