//! Interest-weighted day allocation with largest-remainder rounding.
//!
//! Each interior country is entitled to `score / total_score * total_days`
//! days. Floors are handed out first; the leftover days go one at a time to the
//! largest fractional remainders, ties falling to the earlier country in route
//! order. When nobody scores, days are split evenly and the first countries in
//! route order absorb the remainder.
//!
//! Shares are kept as integer numerators over the common denominator
//! `total_score`, so remainders compare exactly.
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, InterestSet, interest_score};
use crate::numbers::{u64_to_u32_saturating, usize_to_u64};
use crate::route::Route;

/// Days assigned to a single country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryDays {
    pub country: String,
    pub days: u32,
}

/// Days per interior country, in route order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayAllocation(Vec<CountryDays>);

impl DayAllocation {
    /// Days allocated to `country`, if it is part of the allocation.
    #[must_use]
    pub fn get(&self, country: &str) -> Option<u32> {
        self.0
            .iter()
            .find(|entry| entry.country == country)
            .map(|entry| entry.days)
    }

    /// Sum of all allocated days.
    #[must_use]
    pub fn total_days(&self) -> u32 {
        self.0.iter().map(|entry| entry.days).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CountryDays> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, u32)> for DayAllocation {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(country, days)| CountryDays { country, days })
                .collect(),
        )
    }
}

/// Spread `total_days` across the interior stops of `route`.
///
/// Scores are recomputed here rather than reused from selection. A country can
/// end up with 0 days when its floor is 0 and it wins no remainder day.
#[must_use]
pub fn allocate_days(
    catalog: &Catalog,
    total_days: u32,
    route: &Route,
    interests: &InterestSet,
) -> DayAllocation {
    let countries = route.interior();
    if countries.is_empty() {
        return DayAllocation::default();
    }

    let scores: Vec<u64> = countries
        .iter()
        .map(|name| {
            catalog
                .get(name)
                .map_or(0, |record| usize_to_u64(interest_score(record, interests)))
        })
        .collect();

    let days = distribute(u64::from(total_days), &scores);
    log::debug!("allocated {total_days} days over {countries:?} with scores {scores:?}: {days:?}");

    countries
        .iter()
        .cloned()
        .zip(days.into_iter().map(u64_to_u32_saturating))
        .collect()
}

fn distribute(total_days: u64, scores: &[u64]) -> Vec<u64> {
    let total_score: u64 = scores.iter().sum();
    if total_score == 0 {
        return distribute_evenly(total_days, scores.len());
    }

    let numerators: Vec<u64> = scores.iter().map(|score| score * total_days).collect();
    let mut days: Vec<u64> = numerators.iter().map(|n| n / total_score).collect();
    let remaining = total_days - days.iter().sum::<u64>();

    let mut order: Vec<usize> = (0..scores.len()).collect();
    // Stable: equal remainders keep route order.
    order.sort_by(|&a, &b| (numerators[b] % total_score).cmp(&(numerators[a] % total_score)));
    for &idx in order.iter().take(usize::try_from(remaining).unwrap_or(usize::MAX)) {
        days[idx] += 1;
    }
    days
}

fn distribute_evenly(total_days: u64, count: usize) -> Vec<u64> {
    let n = usize_to_u64(count);
    let base = total_days / n;
    let remainder = total_days % n;
    (0..n)
        .map(|idx| if idx < remainder { base + 1 } else { base })
        .collect()
}
