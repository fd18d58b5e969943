//! Property tests for the aggregation invariants.

use ctprix_core::models::{RawPriceRecord, REF_ENERGIES, REF_VEHICULE};
use ctprix_engine::aggregate_centres;
use proptest::prelude::*;

fn record_strategy() -> impl Strategy<Value = RawPriceRecord> {
    let sirets = prop::sample::select(vec!["111", "222", "333", "444"]);
    let vehicules =
        prop::sample::select(vec![REF_VEHICULE, "Camionnette", "Moto", "Camping-car"]);
    let energies = prop::sample::select(vec!["Essence", "Diesel", "Électrique", "Gaz"]);

    (sirets, vehicules, energies, 0.0f64..200.0, 0u32..60).prop_map(
        |(siret, vehicule, energie, prix, stamp)| {
            serde_json::from_value(serde_json::json!({
                "cct_siret": siret,
                "cct_denomination": format!("Centre {siret}"),
                "nom_departement": "Finistère",
                "nom_region": "Bretagne",
                "cct_update_date_time": format!("2024-01-01T00:00:{stamp:02}+00:00"),
                "cat_vehicule_libelle": vehicule,
                "cat_energie_libelle": energie,
                "prix_visite": prix,
            }))
            .unwrap()
        },
    )
}

proptest! {
    #[test]
    fn aggregation_is_idempotent(records in prop::collection::vec(record_strategy(), 0..40)) {
        let first = aggregate_centres(&records).unwrap();
        let second = aggregate_centres(&records).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn no_centre_has_duplicate_tarif_keys(records in prop::collection::vec(record_strategy(), 0..40)) {
        let centres = aggregate_centres(&records).unwrap();
        for centre in &centres {
            for (i, a) in centre.tarifs.iter().enumerate() {
                for b in &centre.tarifs[i + 1..] {
                    prop_assert!(
                        !(a.vehicule == b.vehicule && a.energie == b.energie),
                        "duplicate ({}, {}) in {}", a.vehicule, a.energie, centre.siret
                    );
                }
            }
        }
    }

    #[test]
    fn reference_price_honours_the_invariant(records in prop::collection::vec(record_strategy(), 0..40)) {
        let centres = aggregate_centres(&records).unwrap();
        for centre in &centres {
            let expected = centre
                .tarifs
                .iter()
                .find(|t| {
                    t.vehicule == REF_VEHICULE && REF_ENERGIES.contains(&t.energie.as_str())
                })
                .or_else(|| centre.tarifs.first())
                .map(|t| t.prix)
                .unwrap_or(0.0);
            prop_assert_eq!(centre.prix_reference, expected);
        }
    }

    #[test]
    fn one_centre_per_distinct_siret(records in prop::collection::vec(record_strategy(), 0..40)) {
        let centres = aggregate_centres(&records).unwrap();
        let mut sirets: Vec<&str> = centres.iter().map(|c| c.siret.as_str()).collect();
        sirets.sort_unstable();
        let before = sirets.len();
        sirets.dedup();
        prop_assert_eq!(before, sirets.len());
    }
}
