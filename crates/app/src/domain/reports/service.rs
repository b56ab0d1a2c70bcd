//! Reports service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::reports::{
        errors::ReportsServiceError,
        models::{ReportPeriod, SalesReport},
        repository::PgReportsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgReportsService {
    db: Db,
    repository: PgReportsRepository,
}

impl PgReportsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgReportsRepository::new(),
        }
    }
}

#[async_trait]
impl ReportsService for PgReportsService {
    #[tracing::instrument(
        name = "reports.service.sales_report",
        skip(self),
        fields(start = %period.start, end = %period.end),
        err
    )]
    async fn sales_report(&self, period: ReportPeriod) -> Result<SalesReport, ReportsServiceError> {
        let mut tx = self.db.begin().await?;

        let (total_revenue, total_transactions) =
            self.repository.sales_summary(&mut tx, period).await?;

        let best_seller = self.repository.best_seller(&mut tx, period).await?;

        tx.commit().await?;

        Ok(SalesReport {
            total_revenue,
            total_transactions,
            best_seller: best_seller.unwrap_or_default(),
        })
    }
}

#[automock]
#[async_trait]
pub trait ReportsService: Send + Sync {
    /// Aggregates the transactions created within `period`.
    async fn sales_report(&self, period: ReportPeriod) -> Result<SalesReport, ReportsServiceError>;
}
