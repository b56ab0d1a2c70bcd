//! Date Range Report Handler

use std::sync::Arc;

use jiff::civil::Date;
use salvo::prelude::*;

use kasir_app::domain::reports::models::ReportPeriod;

use crate::{
    envelope::{ApiError, ApiResponse},
    extensions::*,
    reports::{
        errors::{into_api_error, period_api_error},
        models::SalesReportResponse,
    },
    state::State,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

fn non_blank_query(req: &Request, name: &str) -> Option<String> {
    req.query::<String>(name)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn parse_date(raw: &str, name: &str) -> Result<Date, ApiError> {
    Date::strptime(DATE_FORMAT, raw)
        .map_err(|_ignored| ApiError::bad_request(format!("Invalid {name} format, use YYYY-MM-DD")))
}

#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<ApiResponse<SalesReportResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let (Some(start_raw), Some(end_raw)) = (
        non_blank_query(req, "start_date"),
        non_blank_query(req, "end_date"),
    ) else {
        return Err(ApiError::bad_request(
            "start_date and end_date are required (format: YYYY-MM-DD)",
        ));
    };

    let start_date = parse_date(&start_raw, "start_date")?;
    let end_date = parse_date(&end_raw, "end_date")?;

    let period = ReportPeriod::from_dates(start_date, end_date, &state.time_zone)
        .map_err(|error| period_api_error(&error))?;

    let report = state
        .app
        .reports
        .sales_report(period)
        .await
        .map_err(into_api_error)?;

    Ok(ApiResponse::ok(
        format!("Report for date range {start_raw} to {end_raw} fetched successfully"),
        report.into(),
    ))
}
