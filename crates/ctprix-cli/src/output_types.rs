//! Row and result types for the human table and the `--json` mode.

use ctprix_core::models::{Centre, ConflictReport, GroupStat, PriceSpread, ReferencePoint, Stats};
use ctprix_geo::{distance_km, format_distance};
use serde::Serialize;
use tabled::Tabled;

/// One table row of the query output.
#[derive(Debug, Tabled)]
pub struct CentreRow {
    #[tabled(rename = "Nom")]
    pub nom: String,
    #[tabled(rename = "Commune")]
    pub commune: String,
    #[tabled(rename = "Département")]
    pub departement: String,
    #[tabled(rename = "Prix")]
    pub prix: String,
    #[tabled(rename = "Distance")]
    pub distance: String,
}

impl CentreRow {
    pub fn from_centre(centre: &Centre, reference_point: Option<&ReferencePoint>) -> Self {
        let distance = match reference_point {
            Some(point) => {
                format_distance(distance_km(point.lat, point.lng, centre.lat, centre.lng))
            }
            None => "-".to_string(),
        };
        Self {
            nom: centre.nom.clone(),
            commune: centre.commune.clone(),
            departement: centre.nom_departement.clone(),
            prix: format_price(centre.prix_reference),
            distance,
        }
    }
}

/// One row of a grouped-mean table.
#[derive(Debug, Tabled)]
pub struct GroupRow {
    #[tabled(rename = "Nom")]
    pub nom: String,
    #[tabled(rename = "Prix moyen")]
    pub prix_moyen: String,
    #[tabled(rename = "Centres")]
    pub count: usize,
}

impl From<&GroupStat> for GroupRow {
    fn from(stat: &GroupStat) -> Self {
        Self {
            nom: stat.nom.clone(),
            prix_moyen: format_price(stat.prix_moyen),
            count: stat.count,
        }
    }
}

/// One row of the price-spread table.
#[derive(Debug, Tabled)]
pub struct SpreadRow {
    #[tabled(rename = "Département")]
    pub nom: String,
    #[tabled(rename = "Écart")]
    pub ecart: String,
    #[tabled(rename = "Min")]
    pub min: String,
    #[tabled(rename = "Max")]
    pub max: String,
}

impl From<&PriceSpread> for SpreadRow {
    fn from(spread: &PriceSpread) -> Self {
        Self {
            nom: spread.nom.clone(),
            ecart: format_price(spread.ecart),
            min: format_price(spread.min),
            max: format_price(spread.max),
        }
    }
}

/// JSON result of the query command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryOutput {
    pub total_matches: usize,
    pub shown: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflict: Option<ConflictReport>,
    pub centres: Vec<Centre>,
}

/// JSON result of the stats command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsOutput {
    pub stats: Option<Stats>,
}

pub fn format_price(prix: f64) -> String {
    format!("{:.2} €", prix)
}
