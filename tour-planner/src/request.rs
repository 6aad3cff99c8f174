//! Typed planning requests and their validation.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, InterestSet};
use crate::error::InputError;
use crate::numbers::i64_to_u32_clamped;

/// Trip start and end, end strictly after start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTripDates")]
pub struct TripDates {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct RawTripDates {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawTripDates> for TripDates {
    type Error = InputError;

    fn try_from(raw: RawTripDates) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl TripDates {
    /// # Errors
    ///
    /// Returns [`InputError::EndNotAfterStart`] unless `end > start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, InputError> {
        if end <= start {
            return Err(InputError::EndNotAfterStart { start, end });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Inclusive day span: both the start and end dates count.
    #[must_use]
    pub fn total_days(&self) -> u32 {
        i64_to_u32_clamped((self.end - self.start).num_days() + 1)
    }
}

/// Everything the engine needs for one plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub interests: InterestSet,
    pub country_count: usize,
    pub home: String,
    pub dates: TripDates,
    pub budget: f64,
}

impl PlanRequest {
    /// Check every field against `catalog`.
    ///
    /// # Errors
    ///
    /// Returns the first field that cannot be planned with.
    pub fn validate(&self, catalog: &Catalog) -> Result<(), InputError> {
        if self.interests.is_empty() {
            return Err(InputError::NoInterests);
        }
        if self.country_count == 0 {
            return Err(InputError::ZeroCountryCount);
        }
        if !self.budget.is_finite() || self.budget <= 0.0 {
            return Err(InputError::InvalidBudget {
                budget: self.budget,
            });
        }
        if self.home.trim().is_empty() {
            return Err(InputError::MissingHomeCountry);
        }
        if !catalog.contains(&self.home) {
            return Err(InputError::UnknownHomeCountry {
                name: self.home.clone(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn total_days(&self) -> u32 {
        self.dates.total_days()
    }
}
