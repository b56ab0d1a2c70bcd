//! Transactions service errors.

use sqlx::{Error, error::DatabaseError};
use thiserror::Error;

use crate::domain::products::models::ProductId;

const DEADLOCK_DETECTED: &str = "40P01";
const SERIALIZATION_FAILURE: &str = "40001";

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Checkout requires at least one item")]
    EmptyCart,

    #[error("Invalid quantity for product id {product_id}: {quantity} (must be at least 1)")]
    InvalidQuantity { product_id: ProductId, quantity: i64 },

    #[error("Product with id {0} not found")]
    ProductNotFound(ProductId),

    #[error(
        "Insufficient stock for product \"{product_name}\" (id {product_id}): requested {requested}, available {available}"
    )]
    InsufficientStock {
        product_id: ProductId,
        product_name: String,
        requested: u64,
        available: u64,
    },

    #[error("checkout amount overflowed")]
    AmountOverflow,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl CheckoutError {
    /// Machine-readable code for business failures, `None` for internal ones.
    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::EmptyCart => Some("EMPTY_CART"),
            Self::InvalidQuantity { .. } => Some("INVALID_QUANTITY"),
            Self::ProductNotFound(_) => Some("PRODUCT_NOT_FOUND"),
            Self::InsufficientStock { .. } => Some("INSUFFICIENT_STOCK"),
            Self::AmountOverflow | Self::Sql(_) => None,
        }
    }

    /// Whether the checkout was aborted by a concurrent transaction and is
    /// safe to run again from scratch.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        let Self::Sql(error) = self else {
            return false;
        };

        error
            .as_database_error()
            .and_then(DatabaseError::code)
            .is_some_and(|code| code == DEADLOCK_DETECTED || code == SERIALIZATION_FAILURE)
    }
}

impl From<Error> for CheckoutError {
    fn from(error: Error) -> Self {
        Self::Sql(error)
    }
}

#[derive(Debug, Error)]
pub enum TransactionsServiceError {
    #[error("transaction not found")]
    NotFound,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for TransactionsServiceError {
    fn from(error: Error) -> Self {
        match error {
            Error::RowNotFound => Self::NotFound,
            error => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test::helpers::database_error;

    use super::*;

    #[test]
    fn business_errors_render_client_messages() {
        let product_id = ProductId::from_i64(7);

        assert_eq!(
            CheckoutError::ProductNotFound(product_id).to_string(),
            "Product with id 7 not found"
        );

        assert_eq!(
            CheckoutError::InvalidQuantity {
                product_id,
                quantity: 0,
            }
            .to_string(),
            "Invalid quantity for product id 7: 0 (must be at least 1)"
        );

        assert_eq!(
            CheckoutError::InsufficientStock {
                product_id,
                product_name: "Iced Tea".to_string(),
                requested: 5,
                available: 4,
            }
            .to_string(),
            "Insufficient stock for product \"Iced Tea\" (id 7): requested 5, available 4"
        );

        assert_eq!(
            CheckoutError::EmptyCart.to_string(),
            "Checkout requires at least one item"
        );
    }

    #[test]
    fn internal_errors_have_no_code() {
        assert_eq!(CheckoutError::AmountOverflow.code(), None);
        assert_eq!(CheckoutError::Sql(Error::PoolTimedOut).code(), None);
        assert_eq!(CheckoutError::EmptyCart.code(), Some("EMPTY_CART"));
    }

    #[test]
    fn non_database_errors_are_not_retryable() {
        assert!(!CheckoutError::Sql(Error::PoolTimedOut).is_retryable());
        assert!(!CheckoutError::EmptyCart.is_retryable());
    }

    #[test]
    fn deadlocks_and_serialization_failures_are_retryable() {
        assert!(CheckoutError::from(database_error("40P01")).is_retryable());
        assert!(CheckoutError::from(database_error("40001")).is_retryable());
    }

    #[test]
    fn lock_timeouts_and_other_database_errors_are_not_retryable() {
        assert!(!CheckoutError::from(database_error("55P03")).is_retryable());
        assert!(!CheckoutError::from(database_error("23505")).is_retryable());
    }

    #[test]
    fn row_not_found_maps_to_not_found() {
        let error = TransactionsServiceError::from(Error::RowNotFound);

        assert!(matches!(error, TransactionsServiceError::NotFound));
    }
}
