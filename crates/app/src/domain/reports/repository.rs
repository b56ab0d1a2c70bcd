//! Reports Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{Postgres, Row, Transaction, query};

use crate::{
    database::try_get_amount,
    domain::reports::models::{BestSeller, ReportPeriod},
};

const SALES_SUMMARY_SQL: &str = include_str!("sql/sales_summary.sql");
const BEST_SELLER_SQL: &str = include_str!("sql/best_seller.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgReportsRepository;

impl PgReportsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Returns `(total_revenue, total_transactions)` for the period.
    pub(crate) async fn sales_summary(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        period: ReportPeriod,
    ) -> Result<(u64, u64), sqlx::Error> {
        let row = query(SALES_SUMMARY_SQL)
            .bind(SqlxTimestamp::from(period.start))
            .bind(SqlxTimestamp::from(period.end))
            .fetch_one(&mut **tx)
            .await?;

        Ok((
            try_get_amount(&row, "total_revenue")?,
            try_get_amount(&row, "total_transactions")?,
        ))
    }

    /// Highest summed quantity wins; ties go to the lowest product id.
    pub(crate) async fn best_seller(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        period: ReportPeriod,
    ) -> Result<Option<BestSeller>, sqlx::Error> {
        let row = query(BEST_SELLER_SQL)
            .bind(SqlxTimestamp::from(period.start))
            .bind(SqlxTimestamp::from(period.end))
            .fetch_optional(&mut **tx)
            .await?;

        row.map(|row| {
            Ok(BestSeller {
                name: row.try_get("product_name")?,
                quantity: try_get_amount(&row, "quantity_sold")?,
            })
        })
        .transpose()
    }
}
