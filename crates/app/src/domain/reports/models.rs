//! Report Models

use jiff::{Timestamp, civil::Date, tz::TimeZone};

use crate::domain::reports::errors::ReportPeriodError;

/// A half-open `[start, end)` window over transaction creation times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPeriod {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl ReportPeriod {
    /// Covers every instant from the start of `start_date` up to the end of
    /// `end_date`, both read as calendar days in `tz`.
    ///
    /// # Errors
    ///
    /// Returns an error when `end_date` precedes `start_date` or the dates fall
    /// outside the supported range.
    pub fn from_dates(
        start_date: Date,
        end_date: Date,
        tz: &TimeZone,
    ) -> Result<Self, ReportPeriodError> {
        if end_date < start_date {
            return Err(ReportPeriodError::EndBeforeStart {
                start_date,
                end_date,
            });
        }

        let start = start_date.to_zoned(tz.clone())?.timestamp();
        let end = end_date.tomorrow()?.to_zoned(tz.clone())?.timestamp();

        Ok(Self { start, end })
    }

    /// The calendar day containing `now` in `tz`.
    ///
    /// # Errors
    ///
    /// Returns an error when the day cannot be represented in `tz`.
    pub fn day_of(now: Timestamp, tz: &TimeZone) -> Result<Self, ReportPeriodError> {
        let today = now.to_zoned(tz.clone()).date();

        Self::from_dates(today, today, tz)
    }

    /// The current calendar day in `tz`.
    ///
    /// # Errors
    ///
    /// Returns an error when the day cannot be represented in `tz`.
    pub fn today(tz: &TimeZone) -> Result<Self, ReportPeriodError> {
        Self::day_of(Timestamp::now(), tz)
    }

    #[must_use]
    pub fn contains(&self, instant: Timestamp) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// Best-selling product within a report period.
///
/// Empty name and zero quantity when nothing was sold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BestSeller {
    pub name: String,
    pub quantity: u64,
}

/// Sales Report Model
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesReport {
    pub total_revenue: u64,
    pub total_transactions: u64,
    pub best_seller: BestSeller,
}
