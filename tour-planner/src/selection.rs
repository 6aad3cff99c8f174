//! Candidate selection by interest overlap.
use crate::catalog::{Catalog, InterestSet, interest_score};

/// Rank every country other than `home` by interest overlap and keep the top `count`.
///
/// Countries with no overlap never qualify. Equal scores keep catalog order.
/// An empty result means nothing matched; the caller decides how to report it.
#[must_use]
pub fn select_candidates(
    catalog: &Catalog,
    interests: &InterestSet,
    count: usize,
    home: &str,
) -> Vec<String> {
    let mut scored: Vec<(&str, usize)> = catalog
        .iter()
        .filter(|record| record.name != home)
        .map(|record| (record.name.as_str(), interest_score(record, interests)))
        .filter(|&(_, score)| score > 0)
        .collect();

    // Stable: ties stay in catalog order.
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored
        .into_iter()
        .take(count)
        .map(|(name, _)| name.to_string())
        .collect()
}
