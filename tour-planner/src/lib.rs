//! Tour Planner Engine
//!
//! Platform-agnostic planning core for multi-country tours. Given interests,
//! a home country, trip dates and a budget, the engine picks candidate
//! countries, orders them into a loop from home, spreads the trip days over
//! them and prices the result. It performs no I/O; catalogs arrive through a
//! [`CatalogLoader`] or as JSON text.

pub mod allocation;
pub mod catalog;
pub mod cost;
pub mod error;
pub mod geo;
pub mod itinerary;
pub mod map;
pub mod numbers;
pub mod planner;
pub mod request;
pub mod route;
pub mod selection;

use std::sync::Arc;

// Re-export commonly used types
pub use allocation::{CountryDays, DayAllocation, allocate_days};
pub use catalog::{Catalog, CatalogLoadError, CountryRecord, InterestSet, interest_score};
pub use cost::{CostBreakdown, ReturnLeg, StopCost, cost_breakdown, total_cost};
pub use error::{InputError, PlanningError};
pub use geo::{Coordinates, euclidean_distance};
pub use itinerary::{Itinerary, ItineraryStop, StayDates, build_itinerary};
pub use map::{MapMarker, MarkerKind, RouteMap};
pub use planner::{PlanResult, plan};
pub use request::{PlanRequest, TripDates};
pub use route::{Route, build_route};
pub use selection::select_candidates;

/// Trait for abstracting catalog loading.
/// Platform-specific implementations should provide this
pub trait CatalogLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the country catalog from the platform-specific source
    ///
    /// # Errors
    ///
    /// Returns an error if the reference data is missing or malformed.
    fn load_catalog(&self) -> Result<Catalog, Self::Error>;
}

/// Loader for the dataset bundled with this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledCatalog;

impl CatalogLoader for BundledCatalog {
    type Error = CatalogLoadError;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        Catalog::load_from_static()
    }
}

/// Planning engine holding a shared, read-only catalog.
///
/// Cloning is cheap; clones share the same catalog.
#[derive(Debug, Clone)]
pub struct PlanningEngine {
    catalog: Arc<Catalog>,
}

impl PlanningEngine {
    /// Create an engine over an already-loaded catalog
    #[must_use]
    pub const fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Load the catalog once through `loader` and build an engine on it
    ///
    /// # Errors
    ///
    /// Returns the loader's error if the catalog cannot be loaded.
    pub fn load<L: CatalogLoader>(loader: &L) -> Result<Self, L::Error> {
        let catalog = loader.load_catalog()?;
        log::debug!("loaded catalog with {} countries", catalog.len());
        Ok(Self::new(Arc::new(catalog)))
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Validate `request` and plan it
    ///
    /// # Errors
    ///
    /// Returns [`PlanningError::InvalidInput`] for an unusable request, otherwise
    /// the errors of [`plan`].
    pub fn plan_request(&self, request: &PlanRequest) -> Result<PlanResult, PlanningError> {
        request.validate(&self.catalog)?;
        plan(
            &self.catalog,
            &request.interests,
            request.country_count,
            &request.home,
            request.total_days(),
            request.budget,
        )
    }

    /// Lay an accepted plan out on the calendar of `request`
    #[must_use]
    pub fn itinerary(&self, request: &PlanRequest, result: &PlanResult) -> Itinerary {
        build_itinerary(&self.catalog, result, request.dates.start(), request.budget)
    }

    /// Map view of an accepted plan
    #[must_use]
    pub fn route_map(&self, result: &PlanResult) -> Option<RouteMap> {
        RouteMap::from_route(&self.catalog, &result.route, &result.day_allocation)
    }
}
