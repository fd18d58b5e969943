//! Raw rows from the data.economie.gouv.fr export.

use serde::{Deserialize, Serialize};

/// One row of the `prix-controle-technique` export: a single
/// (establishment, vehicle category, energy category) combination.
///
/// Field names match the feed schema exactly. Open-government feeds contain
/// partial rows for newly registered establishments, so every price and
/// coordinate is optional here; the aggregator coerces missing numbers to 0.
/// The SIRET is optional too, but its absence is a hard ingestion error
/// because nothing can be keyed without it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPriceRecord {
    pub cct_siret: Option<String>,
    #[serde(default)]
    pub cct_denomination: String,
    #[serde(default)]
    pub cct_adresse: String,
    #[serde(default)]
    pub cct_code_postal: String,
    #[serde(default)]
    pub cct_commune: String,
    #[serde(default)]
    pub code_departement: String,
    #[serde(default)]
    pub nom_departement: String,
    #[serde(default)]
    pub code_region: Option<i64>,
    #[serde(default)]
    pub nom_region: String,
    #[serde(default)]
    pub cct_tel: Option<String>,
    #[serde(default)]
    pub cct_url: Option<String>,
    #[serde(default)]
    pub cct_update_date_time: String,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub cat_vehicule_id: Option<i64>,
    #[serde(default)]
    pub cat_vehicule_libelle: String,
    #[serde(default)]
    pub cat_energie_id: Option<i64>,
    #[serde(default)]
    pub cat_energie_libelle: String,
    #[serde(default)]
    pub prix_visite: Option<f64>,
    #[serde(default)]
    pub date_application_visite: Option<String>,
    #[serde(default)]
    pub prix_contre_visite_mini: Option<f64>,
    #[serde(default)]
    pub prix_contre_visite_maxi: Option<f64>,
    #[serde(default)]
    pub date_application_contre_visite: Option<String>,
}

impl RawPriceRecord {
    /// The establishment key, if the row carries one.
    ///
    /// An empty string counts as missing: the feed has been observed to emit
    /// `""` where the SIRET is unknown.
    pub fn siret(&self) -> Option<&str> {
        self.cct_siret.as_deref().filter(|s| !s.trim().is_empty())
    }
}
