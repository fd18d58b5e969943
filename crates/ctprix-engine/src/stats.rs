//! Observatory statistics over the full centre collection.
//!
//! Deliberately independent of the query pipeline: the observatory always
//! shows the national picture, whatever the user's filters are.

use ctprix_core::models::{Centre, GroupStat, PriceSpread, Stats};

/// How many entries the rankings and the spread table keep.
const TOP_N: usize = 10;

/// Compute distribution, grouped and ranking statistics.
///
/// Returns `None` when there is nothing to measure: an empty collection, or
/// a collection where every centre has a zero (missing-data) reference price.
/// Centres with `prix_reference == 0` are excluded from the national
/// distribution and from the rankings; grouped means keep them, as the source
/// dataset does.
pub fn compute_stats(centres: &[Centre]) -> Option<Stats> {
    let mut prices: Vec<f64> =
        centres.iter().map(|c| c.prix_reference).filter(|p| *p > 0.0).collect();
    if prices.is_empty() {
        return None;
    }
    prices.sort_by(f64::total_cmp);

    let prix_moyen = prices.iter().sum::<f64>() / prices.len() as f64;
    let prix_min = prices[0];
    let prix_max = prices[prices.len() - 1];
    // Upper middle element for even counts, the dataset's historic convention
    let prix_median = prices[prices.len() / 2];

    let par_region = grouped_means(centres, |c| &c.region);
    let par_departement = grouped_means(centres, |c| &c.nom_departement);
    let ecarts_max = departement_spreads(centres);
    let (top_moins_chers, top_plus_chers) = rankings(centres);

    Some(Stats {
        prix_moyen,
        prix_min,
        prix_max,
        prix_median,
        nombre_centres: centres.len(),
        par_region,
        par_departement,
        top_moins_chers,
        top_plus_chers,
        ecarts_max,
    })
}

/// Mean price and count per group, ascending by mean.
///
/// Groups accumulate in first-seen collection order before the stable sort,
/// so the output is deterministic for a given collection.
fn grouped_means<'a, F>(centres: &'a [Centre], group_key: F) -> Vec<GroupStat>
where
    F: Fn(&'a Centre) -> &'a str,
{
    let mut groups: Vec<(String, f64, usize)> = Vec::new();

    for centre in centres {
        let key = group_key(centre);
        match groups.iter_mut().find(|(nom, _, _)| nom == key) {
            Some((_, sum, count)) => {
                *sum += centre.prix_reference;
                *count += 1;
            }
            None => groups.push((key.to_string(), centre.prix_reference, 1)),
        }
    }

    let mut stats: Vec<GroupStat> = groups
        .into_iter()
        .map(|(nom, sum, count)| GroupStat { nom, prix_moyen: sum / count as f64, count })
        .collect();
    stats.sort_by(|a, b| a.prix_moyen.total_cmp(&b.prix_moyen));
    stats
}

/// Top départements by internal price spread, widest first.
///
/// Zero-spread départements are excluded, which also drops every département
/// with a single observed price.
fn departement_spreads(centres: &[Centre]) -> Vec<PriceSpread> {
    let mut groups: Vec<(String, f64, f64)> = Vec::new();

    for centre in centres {
        let prix = centre.prix_reference;
        match groups.iter_mut().find(|(nom, _, _)| nom == &centre.nom_departement) {
            Some((_, min, max)) => {
                *min = min.min(prix);
                *max = max.max(prix);
            }
            None => groups.push((centre.nom_departement.clone(), prix, prix)),
        }
    }

    let mut spreads: Vec<PriceSpread> = groups
        .into_iter()
        .map(|(nom, min, max)| PriceSpread { nom, ecart: max - min, min, max })
        .filter(|s| s.ecart > 0.0)
        .collect();
    spreads.sort_by(|a, b| b.ecart.total_cmp(&a.ecart));
    spreads.truncate(TOP_N);
    spreads
}

/// The cheapest and most expensive centres, zero prices excluded.
fn rankings(centres: &[Centre]) -> (Vec<Centre>, Vec<Centre>) {
    let mut by_price: Vec<&Centre> =
        centres.iter().filter(|c| c.prix_reference > 0.0).collect();
    by_price.sort_by(|a, b| a.prix_reference.total_cmp(&b.prix_reference));

    let cheapest: Vec<Centre> = by_price.iter().take(TOP_N).map(|c| (*c).clone()).collect();
    let most_expensive: Vec<Centre> =
        by_price.iter().rev().take(TOP_N).map(|c| (*c).clone()).collect();
    (cheapest, most_expensive)
}
