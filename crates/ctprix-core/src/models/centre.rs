//! The aggregated inspection-centre entity.

use serde::{Deserialize, Serialize};

/// Vehicle label whose tariff serves as the comparable reference price.
pub const REF_VEHICULE: &str = "Voiture particulière";

/// Energy labels eligible for the reference price.
pub const REF_ENERGIES: [&str; 2] = ["Essence", "Diesel"];

/// One price line of a centre: the inspection price for a
/// (vehicle category, energy category) pair, plus the re-inspection range.
///
/// Uniqueness key within a centre is `(vehicule, energie)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tarif {
    pub vehicule: String,
    pub energie: String,
    pub prix: f64,
    pub contre_visite_min: f64,
    pub contre_visite_max: f64,
}

/// An inspection centre, aggregated from all raw rows sharing a SIRET.
///
/// Immutable once aggregation completes; every query produces derived views,
/// never in-place modification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Centre {
    pub siret: String,
    pub nom: String,
    pub adresse: String,
    pub code_postal: String,
    pub commune: String,
    /// Département code, e.g. "29".
    pub departement: String,
    pub nom_departement: String,
    pub region: String,
    pub tel: Option<String>,
    pub url: Option<String>,
    pub lat: f64,
    pub lng: f64,
    /// Price lines in first-seen feed order.
    pub tarifs: Vec<Tarif>,
    /// Derived comparable price, see [`Centre::reference_price`].
    pub prix_reference: f64,
    /// Max `cct_update_date_time` across the contributing rows (ISO-8601,
    /// compared lexically).
    #[serde(rename = "dateMAJ")]
    pub date_maj: String,
}

impl Centre {
    /// Whether a price line with this `(vehicule, energie)` key already exists.
    pub fn has_tarif(&self, vehicule: &str, energie: &str) -> bool {
        self.tarifs.iter().any(|t| t.vehicule == vehicule && t.energie == energie)
    }

    /// Derive the reference price from the complete tariff list.
    ///
    /// The first tariff (in insertion order) for a private car running on
    /// Essence or Diesel; failing that, the first tariff of the list; failing
    /// that, 0. Must only be called once all rows for the centre have been
    /// folded in.
    pub fn reference_price(&self) -> f64 {
        self.tarifs
            .iter()
            .find(|t| t.vehicule == REF_VEHICULE && REF_ENERGIES.contains(&t.energie.as_str()))
            .or_else(|| self.tarifs.first())
            .map(|t| t.prix)
            .unwrap_or(0.0)
    }
}
