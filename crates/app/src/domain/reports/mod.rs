//! Reports

pub mod errors;
pub mod models;
mod repository;
pub mod service;

pub use errors::{ReportPeriodError, ReportsServiceError};
pub use service::*;
