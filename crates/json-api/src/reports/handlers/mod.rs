//! Report Handlers

pub(crate) mod range;
pub(crate) mod today;

#[cfg(test)]
mod tests {
    use kasir_app::domain::reports::models::{BestSeller, SalesReport};

    pub(super) fn make_report() -> SalesReport {
        SalesReport {
            total_revenue: 46_000,
            total_transactions: 2,
            best_seller: BestSeller {
                name: "Coffee".to_string(),
                quantity: 5,
            },
        }
    }
}
