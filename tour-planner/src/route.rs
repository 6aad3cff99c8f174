//! Closed-loop routes built with a greedy nearest-neighbor tour.
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::geo::{Coordinates, euclidean_distance};

/// Ordered stops starting and ending at the home country.
///
/// Always at least two entries. `[home, home]` means the traveler stays home.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Route(Vec<String>);

impl TryFrom<Vec<String>> for Route {
    type Error = String;

    fn try_from(stops: Vec<String>) -> Result<Self, Self::Error> {
        match (stops.first(), stops.last()) {
            (Some(first), Some(last)) if stops.len() >= 2 && first == last => Ok(Self(stops)),
            _ => Err(format!(
                "a route needs at least two stops that start and end at home (got {stops:?})"
            )),
        }
    }
}

impl From<Route> for Vec<String> {
    fn from(route: Route) -> Self {
        route.0
    }
}

impl Route {
    /// The "stay home" route.
    #[must_use]
    pub fn stay_home(home: &str) -> Self {
        Self(vec![home.to_string(), home.to_string()])
    }

    #[must_use]
    pub fn home(&self) -> &str {
        &self.0[0]
    }

    /// Every stop except the two home endpoints.
    #[must_use]
    pub fn interior(&self) -> &[String] {
        &self.0[1..self.0.len() - 1]
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.0.len() <= 2
    }

    /// Last country visited before returning home, if any.
    #[must_use]
    pub fn last_interior(&self) -> Option<&str> {
        self.interior().last().map(String::as_str)
    }

    #[must_use]
    pub fn stops(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`: a route holds at least the two home endpoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of leg distances in degree space, ignoring stops missing from the catalog.
    #[must_use]
    pub fn path_length(&self, catalog: &Catalog) -> f64 {
        self.0
            .windows(2)
            .filter_map(|leg| Some((catalog.get(&leg[0])?, catalog.get(&leg[1])?)))
            .map(|(a, b)| euclidean_distance(a.coordinates, b.coordinates))
            .sum()
    }
}

/// Order `candidates` into a loop from `home` by repeatedly visiting the nearest unvisited one.
///
/// `home`, repeated names and names the catalog does not know are skipped.
/// Equal distances go to whichever candidate comes first in `candidates`.
/// This is a greedy heuristic, not an optimal tour.
#[must_use]
pub fn build_route(catalog: &Catalog, candidates: &[String], home: &str) -> Route {
    let mut unvisited: Vec<&str> = Vec::with_capacity(candidates.len());
    for name in candidates {
        if name != home && catalog.contains(name) && !unvisited.contains(&name.as_str()) {
            unvisited.push(name);
        }
    }

    let mut stops = Vec::with_capacity(unvisited.len() + 2);
    stops.push(home.to_string());

    let mut current = catalog.get(home).map(|record| record.coordinates);
    while !unvisited.is_empty() {
        let next_idx = current.map_or(0, |from| nearest_index(catalog, &unvisited, from));
        let next = unvisited.remove(next_idx);
        current = catalog.get(next).map(|record| record.coordinates);
        stops.push(next.to_string());
    }

    stops.push(home.to_string());
    Route(stops)
}

fn nearest_index(catalog: &Catalog, unvisited: &[&str], from: Coordinates) -> usize {
    let mut best_idx = 0;
    let mut best_distance = f64::INFINITY;
    for (idx, name) in unvisited.iter().enumerate() {
        let Some(record) = catalog.get(name) else {
            continue;
        };
        let distance = euclidean_distance(from, record.coordinates);
        // Strict comparison keeps the earliest candidate on ties.
        if distance < best_distance {
            best_distance = distance;
            best_idx = idx;
        }
    }
    best_idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CountryRecord;

    fn record(name: &str, lat: f64, lon: f64) -> CountryRecord {
        CountryRecord {
            name: name.to_string(),
            coordinates: Coordinates::new(lat, lon),
            interests: vec!["art".to_string()],
            avg_travel_cost: 0.0,
            avg_accommodation_cost: 0.0,
        }
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    fn line_catalog() -> Catalog {
        Catalog::from_records([
            record("Home", 0.0, 0.0),
            record("A", 0.0, 1.0),
            record("B", 0.0, 2.0),
            record("C", 0.0, 5.0),
            record("West", 0.0, -1.0),
        ])
        .unwrap()
    }

    #[test]
    fn empty_candidates_stay_home() {
        let route = build_route(&line_catalog(), &[], "Home");
        assert_eq!(route, Route::stay_home("Home"));
        assert!(route.is_degenerate());
        assert!(route.interior().is_empty());
        assert_eq!(route.last_interior(), None);
    }

    #[test]
    fn visits_nearest_first() {
        let route = build_route(&line_catalog(), &names(&["C", "B", "A"]), "Home");
        assert_eq!(route.stops(), names(&["Home", "A", "B", "C", "Home"]).as_slice());
        assert_eq!(route.home(), "Home");
        assert_eq!(route.last_interior(), Some("C"));
        assert!((route.path_length(&line_catalog()) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn equal_distances_prefer_earlier_candidate() {
        let catalog = line_catalog();
        let route = build_route(&catalog, &names(&["West", "A"]), "Home");
        assert_eq!(route.interior(), names(&["West", "A"]).as_slice());
        let route = build_route(&catalog, &names(&["A", "West"]), "Home");
        assert_eq!(route.interior(), names(&["A", "West"]).as_slice());
    }

    #[test]
    fn drops_home_duplicates_and_unknown_names() {
        let route = build_route(
            &line_catalog(),
            &names(&["Home", "B", "Atlantis", "B"]),
            "Home",
        );
        assert_eq!(route.stops(), names(&["Home", "B", "Home"]).as_slice());

        let only_home = build_route(&line_catalog(), &names(&["Home"]), "Home");
        assert_eq!(only_home, Route::stay_home("Home"));
    }

    #[test]
    fn serializes_as_plain_list() {
        let route = build_route(&line_catalog(), &names(&["A"]), "Home");
        assert_eq!(
            serde_json::to_string(&route).unwrap(),
            r#"["Home","A","Home"]"#
        );
        let parsed: Route = serde_json::from_str(r#"["Home","A","Home"]"#).unwrap();
        assert_eq!(parsed, route);
        assert!(serde_json::from_str::<Route>(r#"["Home"]"#).is_err());
        assert!(serde_json::from_str::<Route>(r#"["Home","A"]"#).is_err());
    }
}
