//! Approximate text search over centre names, communes, addresses and
//! postal codes.
//!
//! Two legs, evaluated per field in priority order (nom, commune, adresse,
//! code postal), everything accent-folded and lowercased:
//!
//! - a substring hit scores high, earlier fields and earlier match positions
//!   ranking first;
//! - otherwise a SkimMatcherV2 subsequence match covers partial and sloppy
//!   queries, always ranking below every substring hit. Subsequence matching
//!   tolerates dropped letters ("dupnt" finds "Dupont") but not substituted
//!   ones ("Dupond" finds nothing); an edit-distance leg could close that
//!   gap if it turns out to matter in practice.
//!
//! Ranking is reproducible for identical input: score descending, original
//! index ascending on ties.

use ctprix_core::collate::fold;
use ctprix_core::models::Centre;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Weights by field priority: nom, commune, adresse, code postal.
const FIELD_WEIGHTS: [f64; 4] = [1.0, 0.9, 0.8, 0.7];

/// A substring hit outranks any subsequence hit regardless of field.
const SUBSTRING_BASE: f64 = 100_000.0;

struct IndexEntry {
    /// Folded keys in field-priority order.
    keys: [String; 4],
}

/// Searchable index over a centre collection.
///
/// Built once per dataset load; the collection is immutable afterwards so the
/// index never goes stale.
pub struct SearchIndex {
    entries: Vec<IndexEntry>,
    matcher: SkimMatcherV2,
}

impl SearchIndex {
    /// Precompute folded search keys for every centre.
    pub fn build(centres: &[Centre]) -> Self {
        let entries = centres
            .iter()
            .map(|c| IndexEntry {
                keys: [fold(&c.nom), fold(&c.commune), fold(&c.adresse), fold(&c.code_postal)],
            })
            .collect();
        Self { entries, matcher: SkimMatcherV2::default() }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Indices of matching centres, best match first.
    ///
    /// Callers gate blank queries themselves ("no search" passes the whole
    /// collection through); a blank query here yields no matches, which is
    /// also what an empty collection yields.
    pub fn search(&self, query: &str) -> Vec<usize> {
        let needle = fold(query.trim());
        if needle.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<(usize, f64)> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(idx, entry)| self.score(entry, &needle).map(|score| (idx, score)))
            .collect();

        hits.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        hits.into_iter().map(|(idx, _)| idx).collect()
    }

    /// Best score across the entry's fields, or `None` if nothing matches.
    fn score(&self, entry: &IndexEntry, needle: &str) -> Option<f64> {
        let mut best: Option<f64> = None;
        for (key, weight) in entry.keys.iter().zip(FIELD_WEIGHTS) {
            let field_score = if let Some(pos) = key.find(needle) {
                Some(SUBSTRING_BASE * weight - pos as f64)
            } else {
                self.matcher.fuzzy_match(key, needle).map(|s| s as f64 * weight)
            };
            if let Some(s) = field_score {
                if best.map_or(true, |b| s > b) {
                    best = Some(s);
                }
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centre(nom: &str, commune: &str, adresse: &str, code_postal: &str) -> Centre {
        Centre {
            siret: nom.to_string(),
            nom: nom.to_string(),
            adresse: adresse.to_string(),
            code_postal: code_postal.to_string(),
            commune: commune.to_string(),
            departement: String::new(),
            nom_departement: String::new(),
            region: String::new(),
            tel: None,
            url: None,
            lat: 0.0,
            lng: 0.0,
            tarifs: Vec::new(),
            prix_reference: 0.0,
            date_maj: String::new(),
        }
    }

    fn fixture() -> Vec<Centre> {
        vec![
            centre("Garage Dupont", "Brest", "12 rue Jean Jaurès", "29200"),
            centre("Contrôle Plus", "Quimper", "3 avenue Dupont", "29000"),
            centre("Auto Sécurité", "Besançon", "8 rue des Près", "25000"),
        ]
    }

    #[test]
    fn name_match_outranks_address_match() {
        let centres = fixture();
        let index = SearchIndex::build(&centres);
        let results = index.search("Dupont");
        // Both match, but the nom field carries more weight than adresse
        assert_eq!(results, vec![0, 1]);
    }

    #[test]
    fn matching_is_accent_and_case_insensitive() {
        let centres = fixture();
        let index = SearchIndex::build(&centres);
        assert_eq!(index.search("besancon"), vec![2]);
        assert_eq!(index.search("CONTRÔLE"), vec![1]);
    }

    #[test]
    fn postal_code_is_searchable() {
        let centres = fixture();
        let index = SearchIndex::build(&centres);
        assert_eq!(index.search("25000"), vec![2]);
    }

    #[test]
    fn partial_query_still_matches() {
        let centres = fixture();
        let index = SearchIndex::build(&centres);
        // Subsequence leg: "garage dpt" is not a substring of anything
        let results = index.search("gar dup");
        assert!(results.contains(&0));
    }

    #[test]
    fn dropped_letters_match_but_substituted_ones_do_not() {
        let centres = fixture();
        let index = SearchIndex::build(&centres);
        // A dropped letter is still a subsequence
        assert!(index.search("dupnt").contains(&0));
        // A substituted final letter breaks the subsequence
        assert!(index.search("Dupond").is_empty());
    }

    #[test]
    fn unrelated_query_matches_nothing() {
        let centres = fixture();
        let index = SearchIndex::build(&centres);
        assert!(index.search("zzzzqqqq").is_empty());
    }

    #[test]
    fn blank_query_and_empty_collection_yield_empty() {
        let centres = fixture();
        let index = SearchIndex::build(&centres);
        assert!(index.search("   ").is_empty());

        let empty = SearchIndex::build(&[]);
        assert!(empty.is_empty());
        assert!(empty.search("Dupont").is_empty());
    }

    #[test]
    fn ranking_is_reproducible() {
        let centres = fixture();
        let index = SearchIndex::build(&centres);
        assert_eq!(index.search("Dupont"), index.search("Dupont"));
    }
}
