//! Kasir Domain Concerns

pub mod categories;
pub mod products;
pub mod reports;
pub mod transactions;
