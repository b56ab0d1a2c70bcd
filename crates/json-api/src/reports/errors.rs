//! Report Errors

use tracing::error;

use kasir_app::domain::reports::{ReportPeriodError, ReportsServiceError};

use crate::envelope::ApiError;

pub(crate) fn period_api_error(error: &ReportPeriodError) -> ApiError {
    match error {
        ReportPeriodError::EndBeforeStart { .. } => {
            ApiError::bad_request("end_date must be after or equal to start_date")
        }
        ReportPeriodError::OutOfRange(source) => {
            error!("report period out of range: {source}");

            ApiError::bad_request("Report dates are out of range")
        }
    }
}

pub(crate) fn into_api_error(error: ReportsServiceError) -> ApiError {
    match error {
        ReportsServiceError::Sql(source) => {
            error!("failed to aggregate sales report: {source}");

            ApiError::internal()
        }
    }
}
