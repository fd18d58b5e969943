//! Folding raw feed rows into per-centre entities.
//!
//! The export has one row per (establishment, vehicle category, energy
//! category); a centre typically contributes a dozen rows. A single pass
//! keyed on the SIRET collapses them, then one finishing pass derives the
//! reference price once every tariff of a centre is known.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use ctprix_core::collate::sort_fr;
use ctprix_core::models::{Centre, Dataset, DatasetMetadata, RawPriceRecord, Tarif};
use ctprix_core::{CtprixError, Result};

/// Aggregate raw feed rows into centres, one per distinct SIRET,
/// in first-seen feed order.
///
/// Duplicate rows for the same `(vehicule, energie)` combination of a centre
/// are dropped, first write wins. The update timestamp keeps the lexical max
/// across all contributing rows regardless of which tariffs were kept.
///
/// A row without a SIRET is a hard error: the engine cannot key on it, and
/// silently skipping it would hide feed corruption from the caller.
pub fn aggregate_centres(records: &[RawPriceRecord]) -> Result<Vec<Centre>> {
    let mut centres: Vec<Centre> = Vec::new();
    let mut index_by_siret: HashMap<String, usize> = HashMap::new();

    for (index, record) in records.iter().enumerate() {
        let siret = record.siret().ok_or(CtprixError::MissingSiret { index })?;

        let centre_idx = match index_by_siret.get(siret) {
            Some(&idx) => idx,
            None => {
                index_by_siret.insert(siret.to_string(), centres.len());
                centres.push(centre_shell(record, siret));
                centres.len() - 1
            }
        };
        let centre = &mut centres[centre_idx];

        if !centre.has_tarif(&record.cat_vehicule_libelle, &record.cat_energie_libelle) {
            centre.tarifs.push(Tarif {
                vehicule: record.cat_vehicule_libelle.clone(),
                energie: record.cat_energie_libelle.clone(),
                prix: record.prix_visite.unwrap_or(0.0),
                contre_visite_min: record.prix_contre_visite_mini.unwrap_or(0.0),
                contre_visite_max: record.prix_contre_visite_maxi.unwrap_or(0.0),
            });
        }

        // ISO-8601 timestamps compare lexically
        if record.cct_update_date_time > centre.date_maj {
            centre.date_maj = record.cct_update_date_time.clone();
        }
    }

    // The reference price needs the complete tariff list, hence a second pass
    for centre in &mut centres {
        centre.prix_reference = centre.reference_price();
    }

    tracing::info!(
        records = records.len(),
        centres = centres.len(),
        "aggregated raw feed into centres"
    );

    Ok(centres)
}

fn centre_shell(record: &RawPriceRecord, siret: &str) -> Centre {
    Centre {
        siret: siret.to_string(),
        nom: record.cct_denomination.clone(),
        adresse: record.cct_adresse.clone(),
        code_postal: record.cct_code_postal.clone(),
        commune: record.cct_commune.clone(),
        departement: record.code_departement.clone(),
        nom_departement: record.nom_departement.clone(),
        region: record.nom_region.clone(),
        tel: record.cct_tel.clone(),
        url: record.cct_url.clone(),
        lat: record.latitude.unwrap_or(0.0),
        lng: record.longitude.unwrap_or(0.0),
        tarifs: Vec::new(),
        prix_reference: 0.0,
        date_maj: record.cct_update_date_time.clone(),
    }
}

/// Derive the facet lists for filter controls from the aggregated centres.
///
/// Deterministic: distinct values are collected then sorted with French
/// collation, so traversal order does not matter.
pub fn extract_metadata(centres: &[Centre]) -> DatasetMetadata {
    let mut regions = HashSet::new();
    let mut departements = HashSet::new();
    let mut vehicules = HashSet::new();
    let mut energies = HashSet::new();

    for centre in centres {
        regions.insert(centre.region.clone());
        departements.insert(centre.nom_departement.clone());
        for tarif in &centre.tarifs {
            vehicules.insert(tarif.vehicule.clone());
            energies.insert(tarif.energie.clone());
        }
    }

    DatasetMetadata {
        total_centres: centres.len(),
        regions: into_sorted(regions),
        departements: into_sorted(departements),
        vehicules: into_sorted(vehicules),
        energies: into_sorted(energies),
    }
}

fn into_sorted(values: HashSet<String>) -> Vec<String> {
    let mut list: Vec<String> = values.into_iter().collect();
    sort_fr(&mut list);
    list
}

/// Aggregate the full feed and stamp the result as a loadable [`Dataset`].
pub fn build_dataset(records: &[RawPriceRecord]) -> Result<Dataset> {
    let centres = aggregate_centres(records)?;
    let metadata = extract_metadata(&centres);
    Ok(Dataset { centres, last_update: Utc::now(), metadata })
}
