//! Day-by-day schedule for an accepted plan.
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::cost::{ReturnLeg, cost_breakdown};
use crate::planner::PlanResult;

/// Inclusive date range spent in one country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayDates {
    pub arrive: NaiveDate,
    pub depart: NaiveDate,
}

/// One interior stop of the itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryStop {
    pub country: String,
    pub days: u32,
    /// `None` for a stop that received no days.
    pub dates: Option<StayDates>,
    pub travel_cost: f64,
    pub accommodation_cost: f64,
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub home: String,
    pub stops: Vec<ItineraryStop>,
    pub return_leg: Option<ReturnLeg>,
    pub route: Vec<String>,
    pub total_cost: f64,
    pub budget: f64,
    pub remaining_budget: f64,
}

/// Lay the plan out on the calendar starting at `start`.
///
/// Stops are visited in route order, each occupying its allocated days; the
/// next stop begins the following day. Stops with no days are passed through
/// without consuming calendar time.
#[must_use]
pub fn build_itinerary(
    catalog: &Catalog,
    plan: &PlanResult,
    start: NaiveDate,
    budget: f64,
) -> Itinerary {
    let breakdown = cost_breakdown(catalog, &plan.route, &plan.day_allocation);
    let mut cursor = start;
    let stops = breakdown
        .stops
        .into_iter()
        .map(|stop| {
            let dates = stay_dates(cursor, stop.days);
            if let Some(stay) = dates {
                cursor = stay.depart.checked_add_days(Days::new(1)).unwrap_or(stay.depart);
            }
            let interests = catalog
                .get(&stop.country)
                .map(|record| record.interests.clone())
                .unwrap_or_default();
            ItineraryStop {
                country: stop.country,
                days: stop.days,
                dates,
                travel_cost: stop.travel,
                accommodation_cost: stop.accommodation,
                interests,
            }
        })
        .collect();

    Itinerary {
        home: plan.route.home().to_string(),
        stops,
        return_leg: breakdown.return_leg,
        route: plan.route.stops().to_vec(),
        total_cost: plan.total_cost,
        budget,
        remaining_budget: budget - plan.total_cost,
    }
}

fn stay_dates(arrive: NaiveDate, days: u32) -> Option<StayDates> {
    let extra = days.checked_sub(1)?;
    let depart = arrive.checked_add_days(Days::new(u64::from(extra)))?;
    Some(StayDates { arrive, depart })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::DayAllocation;
    use crate::catalog::CountryRecord;
    use crate::geo::Coordinates;
    use crate::route::Route;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(name: &str, travel: f64, nightly: f64) -> CountryRecord {
        CountryRecord {
            name: name.to_string(),
            coordinates: Coordinates::new(0.0, 0.0),
            interests: vec!["food".to_string()],
            avg_travel_cost: travel,
            avg_accommodation_cost: nightly,
        }
    }

    fn plan_for(days: &[(&str, u32)]) -> (Catalog, PlanResult) {
        let catalog = Catalog::from_records([
            record("Home", 0.0, 0.0),
            record("A", 100.0, 10.0),
            record("B", 200.0, 20.0),
            record("C", 50.0, 5.0),
        ])
        .unwrap();
        let mut stops = vec!["Home".to_string()];
        stops.extend(days.iter().map(|(name, _)| (*name).to_string()));
        stops.push("Home".to_string());
        let route = Route::try_from(stops).unwrap();
        let day_allocation: DayAllocation = days
            .iter()
            .map(|(name, d)| ((*name).to_string(), *d))
            .collect();
        let total_cost = crate::cost::total_cost(&catalog, &route, &day_allocation);
        (
            catalog,
            PlanResult {
                route,
                day_allocation,
                total_cost,
            },
        )
    }

    #[test]
    fn stops_are_contiguous_and_end_on_last_day() {
        let (catalog, plan) = plan_for(&[("A", 3), ("B", 2)]);
        let itinerary = build_itinerary(&catalog, &plan, date(2026, 1, 30), 1000.0);
        let a = itinerary.stops[0].dates.unwrap();
        let b = itinerary.stops[1].dates.unwrap();
        assert_eq!((a.arrive, a.depart), (date(2026, 1, 30), date(2026, 2, 1)));
        assert_eq!((b.arrive, b.depart), (date(2026, 2, 2), date(2026, 2, 3)));
        assert!((itinerary.stops[1].accommodation_cost - 40.0).abs() < 1e-9);
        assert_eq!(itinerary.stops[0].interests, vec!["food".to_string()]);
        // 130 + 240 + 200 return
        assert!((itinerary.total_cost - 570.0).abs() < 1e-9);
        assert!((itinerary.remaining_budget - 430.0).abs() < 1e-9);
        assert_eq!(itinerary.return_leg.unwrap().from, "B");
    }

    #[test]
    fn zero_day_stops_pass_through() {
        let (catalog, plan) = plan_for(&[("A", 2), ("C", 0), ("B", 1)]);
        let itinerary = build_itinerary(&catalog, &plan, date(2026, 5, 1), 1000.0);
        assert_eq!(itinerary.stops[1].dates, None);
        assert!((itinerary.stops[1].travel_cost - 50.0).abs() < 1e-9);
        let b = itinerary.stops[2].dates.unwrap();
        assert_eq!((b.arrive, b.depart), (date(2026, 5, 3), date(2026, 5, 3)));
    }
}
