//! Checkout Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::{Span, info};

use kasir_app::domain::transactions::models::Transaction;

use crate::{
    envelope::{ApiError, ApiResponse},
    extensions::*,
    observability::{CheckoutOutcome, record_checkout},
    state::State,
    transactions::{
        errors::checkout_api_error,
        models::{CheckoutBody, TransactionResponse},
    },
};

#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<ApiResponse<TransactionResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let body = req.json_body::<CheckoutBody>().await?;

    let transaction = checkout(state, body).await?;

    Ok(ApiResponse::created(
        "Checkout created successfully",
        transaction.into(),
    ))
}

#[tracing::instrument(
    name = "http.checkout",
    skip_all,
    fields(item_count = body.items.as_ref().map_or(0, Vec::len), transaction_id)
)]
async fn checkout(state: &State, body: CheckoutBody) -> Result<Transaction, ApiError> {
    let transaction = state
        .app
        .transactions
        .checkout(body.into())
        .await
        .map_err(checkout_api_error)?;

    record_checkout(CheckoutOutcome::Completed);

    Span::current().record("transaction_id", transaction.id.into_i64());

    info!(
        total_amount = transaction.total_amount,
        line_items = transaction.details.len(),
        "checkout completed"
    );

    Ok(transaction)
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use kasir_app::domain::{
        products::models::ProductId,
        transactions::{
            CheckoutError,
            models::{CartItem, CheckoutRequest, CustomerDetails},
        },
    };

    use crate::test_helpers::Mocks;

    use super::{super::tests::make_transaction, *};

    fn make_service(mocks: Mocks) -> Service {
        mocks.service(Router::with_path("api/checkout").post(handler))
    }

    fn rejecting(error: CheckoutError) -> Mocks {
        let mut mocks = Mocks::default();

        mocks
            .transactions
            .expect_checkout()
            .once()
            .return_once(move |_| Err(error));

        mocks
    }

    async fn post(mocks: Mocks, body: Value) -> TestResult<(Option<StatusCode>, Value)> {
        let mut res = TestClient::post("http://example.com/api/checkout")
            .json(&body)
            .send(&make_service(mocks))
            .await;

        let body = res.take_json::<Value>().await?;

        Ok((res.status_code, body))
    }

    #[tokio::test]
    async fn test_checkout_returns_201_with_transaction() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .transactions
            .expect_checkout()
            .once()
            .withf(|request| {
                *request
                    == CheckoutRequest {
                        customer: CustomerDetails {
                            customer_id: None,
                            customer_name: Some("Budi".to_string()),
                            table_number: Some(4),
                        },
                        items: vec![CartItem {
                            product_id: ProductId::from_i64(1),
                            quantity: 3,
                        }],
                    }
            })
            .return_once(|_| Ok(make_transaction(10)));

        let (status, body) = post(
            mocks,
            json!({
                "customer_name": "Budi",
                "table_number": 4,
                "items": [{ "product_id": 1, "quantity": 3 }]
            }),
        )
        .await?;

        assert_eq!(status, Some(StatusCode::CREATED));
        assert_eq!(body["status"], 201);
        assert_eq!(body["message"], "Checkout created successfully");
        assert_eq!(body["data"]["id"], 10);
        assert_eq!(body["data"]["total_amount"], 300);
        assert_eq!(body["data"]["details"][0]["subtotal"], 300);
        assert_eq!(body["data"]["details"][0]["product_name"], "Iced Tea");

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_unknown_product_returns_404_with_code() -> TestResult {
        let (status, body) = post(
            rejecting(CheckoutError::ProductNotFound(ProductId::from_i64(999))),
            json!({ "items": [{ "product_id": 999, "quantity": 1 }] }),
        )
        .await?;

        assert_eq!(status, Some(StatusCode::NOT_FOUND));
        assert_eq!(
            body,
            json!({
                "status": 404,
                "message": "Product with id 999 not found",
                "data": { "code": "PRODUCT_NOT_FOUND" }
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_insufficient_stock_returns_422_with_code() -> TestResult {
        let (status, body) = post(
            rejecting(CheckoutError::InsufficientStock {
                product_id: ProductId::from_i64(1),
                product_name: "Iced Tea".to_string(),
                requested: 5,
                available: 4,
            }),
            json!({ "items": [{ "product_id": 1, "quantity": 2 }, { "product_id": 1, "quantity": 3 }] }),
        )
        .await?;

        assert_eq!(status, Some(StatusCode::UNPROCESSABLE_ENTITY));
        assert_eq!(body["data"]["code"], "INSUFFICIENT_STOCK");
        assert_eq!(
            body["message"],
            "Insufficient stock for product \"Iced Tea\" (id 1): requested 5, available 4"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_invalid_quantity_returns_422_with_code() -> TestResult {
        let (status, body) = post(
            rejecting(CheckoutError::InvalidQuantity {
                product_id: ProductId::from_i64(1),
                quantity: 0,
            }),
            json!({ "items": [{ "product_id": 1, "quantity": 0 }] }),
        )
        .await?;

        assert_eq!(status, Some(StatusCode::UNPROCESSABLE_ENTITY));
        assert_eq!(body["data"]["code"], "INVALID_QUANTITY");

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_missing_items_is_an_empty_cart() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .transactions
            .expect_checkout()
            .once()
            .withf(|request| request.items.is_empty())
            .return_once(|_| Err(CheckoutError::EmptyCart));

        let (status, body) = post(mocks, json!({ "customer_name": "Budi" })).await?;

        assert_eq!(status, Some(StatusCode::UNPROCESSABLE_ENTITY));
        assert_eq!(body["data"]["code"], "EMPTY_CART");

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_null_items_is_an_empty_cart() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .transactions
            .expect_checkout()
            .once()
            .withf(|request| request.items.is_empty())
            .return_once(|_| Err(CheckoutError::EmptyCart));

        let (status, body) = post(mocks, json!({ "items": null })).await?;

        assert_eq!(status, Some(StatusCode::UNPROCESSABLE_ENTITY));
        assert_eq!(body["data"]["code"], "EMPTY_CART");

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_storage_failure_hides_details() -> TestResult {
        let (status, body) = post(
            rejecting(CheckoutError::Sql(sqlx::Error::PoolTimedOut)),
            json!({ "items": [{ "product_id": 1, "quantity": 1 }] }),
        )
        .await?;

        assert_eq!(status, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(
            body,
            json!({ "status": 500, "message": "Internal server error", "data": null })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_malformed_body_returns_400() -> TestResult {
        let (status, body) = post(
            Mocks::default(),
            json!({ "items": [{ "product_id": "one", "quantity": 1 }] }),
        )
        .await?;

        assert_eq!(status, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body["message"], "Invalid request body");

        Ok(())
    }
}
