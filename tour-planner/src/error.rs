//! Failure kinds surfaced by request validation and planning.
use chrono::NaiveDate;
use thiserror::Error;

/// A request field that cannot be planned with.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("select at least one interest")]
    NoInterests,
    #[error("number of countries must be at least 1")]
    ZeroCountryCount,
    #[error("budget must be a positive amount (got {budget})")]
    InvalidBudget { budget: f64 },
    #[error("home country is required")]
    MissingHomeCountry,
    #[error("unknown home country {name:?}")]
    UnknownHomeCountry { name: String },
    #[error("trip start and end dates are required")]
    MissingTripDates,
    #[error("end date {end} must be after start date {start}")]
    EndNotAfterStart { start: NaiveDate, end: NaiveDate },
}

/// Reasons a planning request produced no plan.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlanningError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
    #[error("no countries match the selected interests")]
    NoMatchingCountries,
    #[error("estimated cost {estimated_cost:.2} exceeds budget {budget:.2}")]
    BudgetExceeded { estimated_cost: f64, budget: f64 },
}

impl PlanningError {
    /// How far over budget the plan was, when the budget was the problem.
    #[must_use]
    pub fn overrun(&self) -> Option<f64> {
        match self {
            Self::BudgetExceeded {
                estimated_cost,
                budget,
            } => Some(estimated_cost - budget),
            _ => None,
        }
    }

    /// Things the traveler can change to get a plan.
    #[must_use]
    pub const fn suggestions(&self) -> &'static [&'static str] {
        match self {
            Self::BudgetExceeded { .. } => &[
                "Increase your budget",
                "Reduce the number of countries",
                "Plan a shorter trip",
                "Select interests that correspond to cheaper destinations",
            ],
            Self::NoMatchingCountries => &[
                "Select different interests",
                "Choose a different home country",
            ],
            Self::InvalidInput(_) => &[],
        }
    }
}
