//! Orchestration: selection, routing, allocation, costing and the budget gate.
use serde::{Deserialize, Serialize};

use crate::allocation::{DayAllocation, allocate_days};
use crate::catalog::{Catalog, InterestSet};
use crate::cost::total_cost;
use crate::error::PlanningError;
use crate::route::{Route, build_route};
use crate::selection::select_candidates;

/// A plan that fits the budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResult {
    pub route: Route,
    pub day_allocation: DayAllocation,
    pub total_cost: f64,
}

/// Produce a plan for `total_days` days starting and ending at `home`.
///
/// The budget check runs last and is strict: a plan costing exactly `budget`
/// is accepted. No partial plan is returned on failure.
///
/// # Errors
///
/// Returns [`PlanningError::NoMatchingCountries`] when no country other than
/// `home` shares an interest, and [`PlanningError::BudgetExceeded`] when the
/// estimate is over `budget`.
pub fn plan(
    catalog: &Catalog,
    interests: &InterestSet,
    desired_country_count: usize,
    home: &str,
    total_days: u32,
    budget: f64,
) -> Result<PlanResult, PlanningError> {
    let candidates = select_candidates(catalog, interests, desired_country_count, home);
    if candidates.is_empty() {
        log::debug!("no candidates for interests {interests:?} from {home}");
        return Err(PlanningError::NoMatchingCountries);
    }
    log::debug!("selected candidates {candidates:?}");

    let route = build_route(catalog, &candidates, home);
    log::debug!(
        "route {:?} (length {:.2})",
        route.stops(),
        route.path_length(catalog)
    );

    let day_allocation = allocate_days(catalog, total_days, &route, interests);
    let total_cost = total_cost(catalog, &route, &day_allocation);

    if total_cost > budget {
        log::info!("rejecting plan: estimated cost {total_cost:.2} exceeds budget {budget:.2}");
        return Err(PlanningError::BudgetExceeded {
            estimated_cost: total_cost,
            budget,
        });
    }

    log::debug!("plan accepted at {total_cost:.2} of {budget:.2}");
    Ok(PlanResult {
        route,
        day_allocation,
        total_cost,
    })
}
