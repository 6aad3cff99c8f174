//! Country reference data: records, the catalog that owns them, and interest scoring.
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use thiserror::Error;

use crate::geo::Coordinates;

const DEFAULT_CATALOG_DATA: &str = include_str!("../data/countries.json");

/// Tags the traveler selected, lowercase. Tags the catalog does not know simply score nothing.
pub type InterestSet = BTreeSet<String>;

/// Errors raised while building a catalog from reference data.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("country data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("country data contains no countries")]
    Empty,
    #[error("country {country:?} is invalid: {reason}")]
    InvalidRecord { country: String, reason: String },
}

/// A single country as described by the reference dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: String,
    pub coordinates: Coordinates,
    /// Lowercased when the record enters a [`Catalog`].
    #[serde(default)]
    pub interests: Vec<String>,
    /// One-way travel cost to reach this country.
    #[serde(default)]
    pub avg_travel_cost: f64,
    /// Accommodation cost per day spent in this country.
    #[serde(default, alias = "avg_accommodation_cost_per_day")]
    pub avg_accommodation_cost: f64,
}

/// Dataset shape: the record fields without the name, which is the map key.
#[derive(Debug, Clone, Deserialize)]
struct CountryNoName {
    coordinates: Coordinates,
    #[serde(default)]
    interests: Vec<String>,
    #[serde(default)]
    avg_travel_cost: f64,
    #[serde(default, alias = "avg_accommodation_cost_per_day")]
    avg_accommodation_cost: f64,
}

impl CountryRecord {
    #[must_use]
    fn with_name(name: String, c: CountryNoName) -> Self {
        Self {
            name,
            coordinates: c.coordinates,
            interests: c.interests,
            avg_travel_cost: c.avg_travel_cost,
            avg_accommodation_cost: c.avg_accommodation_cost,
        }
    }

    fn validate(&self) -> Result<(), CatalogLoadError> {
        let invalid = |reason: String| CatalogLoadError::InvalidRecord {
            country: self.name.clone(),
            reason,
        };
        if self.name.trim().is_empty() {
            return Err(invalid("name is empty".to_string()));
        }
        if !self.coordinates.is_finite() {
            return Err(invalid("coordinates must be finite".to_string()));
        }
        for (field, value) in [
            ("avg_travel_cost", self.avg_travel_cost),
            ("avg_accommodation_cost", self.avg_accommodation_cost),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!(
                    "{field} must be a non-negative number (got {value})"
                )));
            }
        }
        Ok(())
    }
}

/// Immutable mapping from country name to its record.
///
/// Iteration is in ascending name order; every ranking in the planner that
/// falls back on "catalog order" means this order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    countries: BTreeMap<String, CountryRecord>,
    all_interests: Vec<String>,
}

impl Catalog {
    /// Load a catalog from the name-keyed JSON dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, holds no countries, or any
    /// record carries non-finite coordinates or a negative cost.
    pub fn from_json(json: &str) -> Result<Self, CatalogLoadError> {
        let map: HashMap<String, CountryNoName> = serde_json::from_str(json)?;
        Self::from_records(
            map.into_iter()
                .map(|(name, c)| CountryRecord::with_name(name, c)),
        )
    }

    /// Build a catalog from already-parsed records.
    ///
    /// A later record with the same name replaces an earlier one.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no records or any record is invalid.
    pub fn from_records<I>(records: I) -> Result<Self, CatalogLoadError>
    where
        I: IntoIterator<Item = CountryRecord>,
    {
        let mut countries = BTreeMap::new();
        for mut record in records {
            record.validate()?;
            record.interests = normalize_tags(record.interests);
            countries.insert(record.name.clone(), record);
        }
        if countries.is_empty() {
            return Err(CatalogLoadError::Empty);
        }
        let all_interests = countries
            .values()
            .flat_map(|c| c.interests.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        Ok(Self {
            countries,
            all_interests,
        })
    }

    /// Load the dataset bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled data fails validation.
    pub fn load_from_static() -> Result<Self, CatalogLoadError> {
        Self::from_json(DEFAULT_CATALOG_DATA)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CountryRecord> {
        self.countries.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.countries.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Records in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &CountryRecord> {
        self.countries.values()
    }

    /// Sorted country names, suitable for a home-country picker.
    pub fn country_names(&self) -> impl Iterator<Item = &str> {
        self.countries.keys().map(String::as_str)
    }

    /// Every distinct interest tag across the catalog, sorted.
    #[must_use]
    pub fn all_interests(&self) -> &[String] {
        &self.all_interests
    }
}

/// Tags are trimmed and lowercased so they match traveler input regardless of case.
fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Number of distinct tags a country shares with the traveler's interests.
#[must_use]
pub fn interest_score(record: &CountryRecord, interests: &InterestSet) -> usize {
    record
        .interests
        .iter()
        .filter(|tag| interests.contains(tag.as_str()))
        .collect::<BTreeSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interests(tags: &[&str]) -> InterestSet {
        tags.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn from_json_reads_dataset_shape() {
        let json = r#"{
            "Italy": {
                "coordinates": [41.9, 12.5],
                "interests": ["food", "history", "art"],
                "avg_travel_cost": 450,
                "avg_accommodation_cost": 120
            },
            "Japan": {
                "coordinates": [35.7, 139.7],
                "interests": ["food", "technology"],
                "avg_travel_cost": 900,
                "avg_accommodation_cost_per_day": 150.5
            }
        }"#;

        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        let japan = catalog.get("Japan").unwrap();
        assert_eq!(japan.name, "Japan");
        assert!((japan.avg_accommodation_cost - 150.5).abs() < f64::EPSILON);
        assert!((japan.coordinates.lon - 139.7).abs() < f64::EPSILON);
        assert_eq!(
            catalog.all_interests(),
            &["art", "food", "history", "technology"]
        );
        assert_eq!(
            catalog.country_names().collect::<Vec<_>>(),
            vec!["Italy", "Japan"]
        );
    }

    #[test]
    fn missing_optional_fields_default() {
        let catalog = Catalog::from_json(r#"{"Nowhere": {"coordinates": [0, 0]}}"#).unwrap();
        let record = catalog.get("Nowhere").unwrap();
        assert!(record.interests.is_empty());
        assert!(record.avg_travel_cost.abs() < f64::EPSILON);
        assert!(catalog.all_interests().is_empty());
    }

    #[test]
    fn rejects_malformed_empty_and_negative_data() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CatalogLoadError::Parse(_))
        ));
        assert!(matches!(
            Catalog::from_json("{}"),
            Err(CatalogLoadError::Empty)
        ));
        let err = Catalog::from_json(
            r#"{"Cheapland": {"coordinates": [1, 2], "avg_travel_cost": -5}}"#,
        )
        .unwrap_err();
        match err {
            CatalogLoadError::InvalidRecord { country, reason } => {
                assert_eq!(country, "Cheapland");
                assert!(reason.contains("avg_travel_cost"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn tags_are_folded_to_lowercase() {
        let catalog = Catalog::from_json(
            r#"{"Spain": {"coordinates": [40.4, -3.7], "interests": ["Art", " Food ", "art", ""]}}"#,
        )
        .unwrap();
        let spain = catalog.get("Spain").unwrap();
        assert_eq!(spain.interests, vec!["art", "food", "art"]);
        assert_eq!(catalog.all_interests(), &["art", "food"]);
        assert_eq!(interest_score(spain, &interests(&["art", "food"])), 2);
    }

    #[test]
    fn interest_score_counts_distinct_overlap() {
        let record = CountryRecord {
            name: "Peru".to_string(),
            coordinates: Coordinates::new(-12.0, -77.0),
            interests: vec![
                "hiking".to_string(),
                "history".to_string(),
                "hiking".to_string(),
            ],
            avg_travel_cost: 700.0,
            avg_accommodation_cost: 60.0,
        };
        assert_eq!(interest_score(&record, &interests(&["hiking"])), 1);
        assert_eq!(
            interest_score(&record, &interests(&["hiking", "history", "surfing"])),
            2
        );
        assert_eq!(interest_score(&record, &InterestSet::new()), 0);
    }

    #[test]
    fn bundled_catalog_loads() {
        let catalog = Catalog::load_from_static().unwrap();
        assert!(catalog.len() >= 10);
        assert!(!catalog.all_interests().is_empty());
        assert!(
            catalog
                .all_interests()
                .windows(2)
                .all(|pair| pair[0] < pair[1])
        );
    }
}
