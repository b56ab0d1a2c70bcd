//! List Products Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    envelope::{ApiError, ApiResponse},
    extensions::*,
    products::{errors::into_api_error, models::ProductResponse},
    state::State,
};

#[handler]
pub(crate) async fn handler(depot: &mut Depot) -> Result<ApiResponse<Vec<ProductResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .list_products()
        .await
        .map_err(into_api_error)?;

    Ok(ApiResponse::ok(
        "Products fetched successfully",
        products.into_iter().map(Into::into).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use crate::test_helpers::Mocks;

    use super::{super::tests::make_product, *};

    fn make_service(mocks: Mocks) -> Service {
        mocks.service(Router::with_path("api/products").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_products_in_envelope() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .products
            .expect_list_products()
            .once()
            .return_once(|| Ok(vec![make_product(1), make_product(2)]));

        let mut res = TestClient::get("http://example.com/api/products")
            .send(&make_service(mocks))
            .await;

        let body: ApiResponse<Vec<ProductResponse>> = res.take_json().await?;
        let data = body.data.unwrap_or_default();

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.status, 200);
        assert_eq!(body.message, "Products fetched successfully");
        assert_eq!(data.len(), 2);
        assert_eq!(data.first().map(|product| product.price), Some(100));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_empty_catalogue_returns_empty_list() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .products
            .expect_list_products()
            .once()
            .return_once(|| Ok(Vec::new()));

        let mut res = TestClient::get("http://example.com/api/products")
            .send(&make_service(mocks))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(body["data"], json!([]));

        Ok(())
    }
}
