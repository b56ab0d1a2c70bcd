//! Today's Report Handler

use std::sync::Arc;

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

#[handler]
pub(crate) async fn handler(depot: &mut Depot) -> Result<ApiResponse<SalesReportResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let period = ReportPeriod::today(&state.time_zone).map_err(|error| period_api_error(&error))?;

    let report = state
        .app
        .reports
        .sales_report(period)
        .await
        .map_err(into_api_error)?;

    Ok(ApiResponse::ok("Report fetched successfully", report.into()))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use kasir_app::domain::reports::{ReportsServiceError, models::SalesReport};

    use crate::test_helpers::Mocks;

    use super::{super::tests::make_report, *};

    fn make_service(mocks: Mocks) -> Service {
        mocks.service(Router::with_path("api/report/today").get(handler))
    }

    #[tokio::test]
    async fn test_today_reports_current_day() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .reports
            .expect_sales_report()
            .once()
            .withf(|period| period.contains(Timestamp::now()))
            .return_once(|_| Ok(make_report()));

        let mut res = TestClient::get("http://example.com/api/report/today")
            .send(&make_service(mocks))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body,
            json!({
                "status": 200,
                "message": "Report fetched successfully",
                "data": {
                    "total_revenue": 46000,
                    "total_transactions": 2,
                    "best_seller": { "name": "Coffee", "quantity_sold": 5 }
                }
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_today_without_sales_has_empty_best_seller() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .reports
            .expect_sales_report()
            .once()
            .return_once(|_| Ok(SalesReport::default()));

        let mut res = TestClient::get("http://example.com/api/report/today")
            .send(&make_service(mocks))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(body["data"]["best_seller"], json!({ "name": "", "quantity_sold": 0 }));

        Ok(())
    }

    #[tokio::test]
    async fn test_today_storage_failure_returns_500() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .reports
            .expect_sales_report()
            .once()
            .return_once(|_| Err(ReportsServiceError::Sql(sqlx::Error::PoolClosed)));

        let res = TestClient::get("http://example.com/api/report/today")
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
