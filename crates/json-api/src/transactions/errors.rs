//! Transaction Errors

use tracing::error;

use kasir_app::domain::transactions::{CheckoutError, TransactionsServiceError};

use crate::{
    envelope::ApiError,
    observability::{CheckoutOutcome, record_checkout},
};

/// Business failures keep their message and code; anything else is logged and
/// hidden behind a generic 500.
pub(crate) fn checkout_api_error(error: CheckoutError) -> ApiError {
    let Some(code) = error.code() else {
        record_checkout(CheckoutOutcome::Failed);
        error!("checkout failed: {error:?}");

        return ApiError::internal();
    };

    record_checkout(CheckoutOutcome::Rejected);

    let message = error.to_string();

    let api_error = match error {
        CheckoutError::ProductNotFound(_) => ApiError::not_found(message),
        _ => ApiError::unprocessable(message),
    };

    api_error.with_code(code)
}

pub(crate) fn into_api_error(error: TransactionsServiceError) -> ApiError {
    match error {
        TransactionsServiceError::NotFound => ApiError::not_found("Transaction not found"),
        TransactionsServiceError::Sql(source) => {
            error!("transaction storage failure: {source}");

            ApiError::internal()
        }
    }
}
