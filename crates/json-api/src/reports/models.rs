//! Report Models

use serde::{Deserialize, Serialize};

use kasir_app::domain::reports::models::{BestSeller, SalesReport};

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct BestSellerResponse {
    pub name: String,
    pub quantity_sold: u64,
}

impl From<BestSeller> for BestSellerResponse {
    fn from(best_seller: BestSeller) -> Self {
        BestSellerResponse {
            name: best_seller.name,
            quantity_sold: best_seller.quantity,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct SalesReportResponse {
    pub total_revenue: u64,
    pub total_transactions: u64,
    pub best_seller: BestSellerResponse,
}

impl From<SalesReport> for SalesReportResponse {
    fn from(report: SalesReport) -> Self {
        SalesReportResponse {
            total_revenue: report.total_revenue,
            total_transactions: report.total_transactions,
            best_seller: report.best_seller.into(),
        }
    }
}
