//! Reports service errors.

use jiff::civil::Date;
use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportPeriodError {
    #[error("end_date {end_date} is before start_date {start_date}")]
    EndBeforeStart { start_date: Date, end_date: Date },

    #[error("date out of range")]
    OutOfRange(#[from] jiff::Error),
}

#[derive(Debug, Error)]
pub enum ReportsServiceError {
    #[error("storage error")]
    Sql(#[from] Error),
}
