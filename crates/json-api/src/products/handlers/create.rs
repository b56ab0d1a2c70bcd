//! Create Product Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};

use crate::{
    envelope::{ApiError, ApiResponse},
    extensions::*,
    products::{
        errors::into_api_error,
        models::{ProductRequest, ProductResponse},
    },
    state::State,
};

#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<ApiResponse<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = req.json_body::<ProductRequest>().await?;

    let product = state
        .app
        .products
        .create_product(request.into())
        .await
        .map_err(into_api_error)?;

    res.add_header(LOCATION, format!("/api/products/{}", product.id), true)
        .or_500("failed to set location header")?;

    Ok(ApiResponse::created(
        "Product created successfully",
        product.into(),
    ))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use kasir_app::domain::{
        categories::models::CategoryId,
        products::{ProductsServiceError, models::NewProduct},
    };

    use crate::test_helpers::Mocks;

    use super::{super::tests::make_product, *};

    fn make_service(mocks: Mocks) -> Service {
        mocks.service(Router::with_path("api/products").post(handler))
    }

    #[tokio::test]
    async fn test_create_product_returns_201_with_location() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .products
            .expect_create_product()
            .once()
            .withf(|new| {
                *new == NewProduct {
                    name: "Iced Tea".to_string(),
                    price: 100,
                    stock: 10,
                    category_id: Some(CategoryId::from_i64(1)),
                }
            })
            .return_once(|_| Ok(make_product(12)));

        let mut res = TestClient::post("http://example.com/api/products")
            .json(&json!({ "name": "Iced Tea", "price": 100, "stock": 10, "category_id": 1 }))
            .send(&make_service(mocks))
            .await;

        let body: Value = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/api/products/12"));
        assert_eq!(body["message"], "Product created successfully");
        assert_eq!(body["data"]["id"], 12);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_without_category() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .products
            .expect_create_product()
            .once()
            .withf(|new| new.category_id.is_none())
            .return_once(|_| Ok(make_product(13)));

        let res = TestClient::post("http://example.com/api/products")
            .json(&json!({ "name": "Iced Tea", "price": 100, "stock": 10 }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_negative_price_returns_400() -> TestResult {
        let mut res = TestClient::post("http://example.com/api/products")
            .json(&json!({ "name": "Iced Tea", "price": -1, "stock": 10 }))
            .send(&make_service(Mocks::default()))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body["message"], "Invalid request body");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_unknown_category_returns_422() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .products
            .expect_create_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::InvalidReference));

        let mut res = TestClient::post("http://example.com/api/products")
            .json(&json!({ "name": "Iced Tea", "price": 100, "stock": 10, "category_id": 99 }))
            .send(&make_service(mocks))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));
        assert_eq!(body["message"], "Category not found");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_conflict_returns_409() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .products
            .expect_create_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::AlreadyExists));

        let res = TestClient::post("http://example.com/api/products")
            .json(&json!({ "name": "Iced Tea", "price": 100, "stock": 10 }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }
}
