//! Transactions

pub mod checkout;
pub mod errors;
pub mod models;
mod repository;
pub mod service;
pub mod store;

pub use errors::{CheckoutError, TransactionsServiceError};
pub use service::*;
