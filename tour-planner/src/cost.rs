//! Trip cost estimation.
use serde::{Deserialize, Serialize};

use crate::allocation::DayAllocation;
use crate::catalog::Catalog;
use crate::route::Route;

/// Cost attributed to one interior stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopCost {
    pub country: String,
    pub days: u32,
    /// Travel cost to reach this stop.
    pub travel: f64,
    /// Accommodation for every allocated day.
    pub accommodation: f64,
}

impl StopCost {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.travel + self.accommodation
    }
}

/// Flight home from the last interior stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnLeg {
    pub from: String,
    pub to: String,
    pub cost: f64,
}

/// Itemized costs for a route and its day allocation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub stops: Vec<StopCost>,
    pub return_leg: Option<ReturnLeg>,
}

impl CostBreakdown {
    #[must_use]
    pub fn total(&self) -> f64 {
        let stops: f64 = self.stops.iter().map(StopCost::total).sum();
        stops + self.return_leg.as_ref().map_or(0.0, |leg| leg.cost)
    }
}

/// Itemize the cost of `route`.
///
/// Each interior stop costs its travel fare plus accommodation for its
/// allocated days (missing entries count as 0 days); the return leg home
/// costs the last stop's travel fare again. Countries missing from the
/// catalog cost nothing.
#[must_use]
pub fn cost_breakdown(
    catalog: &Catalog,
    route: &Route,
    allocation: &DayAllocation,
) -> CostBreakdown {
    let stops = route
        .interior()
        .iter()
        .map(|country| {
            let days = allocation.get(country).unwrap_or(0);
            let (travel, rate) = catalog.get(country).map_or((0.0, 0.0), |record| {
                (record.avg_travel_cost, record.avg_accommodation_cost)
            });
            StopCost {
                country: country.clone(),
                days,
                travel,
                accommodation: rate * f64::from(days),
            }
        })
        .collect();

    let return_leg = route.last_interior().map(|last| ReturnLeg {
        from: last.to_string(),
        to: route.home().to_string(),
        cost: catalog.get(last).map_or(0.0, |record| record.avg_travel_cost),
    });

    CostBreakdown { stops, return_leg }
}

/// Estimated total cost of `route`; 0 when the route never leaves home.
#[must_use]
pub fn total_cost(catalog: &Catalog, route: &Route, allocation: &DayAllocation) -> f64 {
    cost_breakdown(catalog, route, allocation).total()
}
