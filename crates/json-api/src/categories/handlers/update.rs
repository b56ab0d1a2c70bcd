//! Update Category Handler

use std::sync::Arc;

use salvo::prelude::*;

use kasir_app::domain::categories::models::Category;

use crate::{
    categories::{
        errors::into_api_error,
        models::{CategoryRequest, CategoryResponse},
    },
    envelope::{ApiError, ApiResponse},
    extensions::*,
    state::State,
};

#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<ApiResponse<CategoryResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = req.id_param::<Category>("id")?;
    let request = req.json_body::<CategoryRequest>().await?;

    let category = state
        .app
        .categories
        .update_category(id, request.into())
        .await
        .map_err(into_api_error)?;

    Ok(ApiResponse::ok(
        "Category updated successfully",
        category.into(),
    ))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use kasir_app::domain::categories::{
        CategoriesServiceError,
        models::{CategoryId, CategoryUpdate},
    };

    use crate::test_helpers::Mocks;

    use super::{super::tests::make_category, *};

    fn make_service(mocks: Mocks) -> Service {
        mocks.service(Router::with_path("api/categories/{id}").put(handler))
    }

    #[tokio::test]
    async fn test_update_category_returns_200() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .categories
            .expect_update_category()
            .once()
            .withf(|id, update| {
                *id == CategoryId::from_i64(4)
                    && *update
                        == CategoryUpdate {
                            name: "Snacks".to_string(),
                            description: "Small bites".to_string(),
                        }
            })
            .return_once(|_, _| Ok(make_category(4)));

        let res = TestClient::put("http://example.com/api/categories/4")
            .json(&json!({ "name": "Snacks", "description": "Small bites" }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_category_without_description_returns_422() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .categories
            .expect_update_category()
            .once()
            .return_once(|_, _| Err(CategoriesServiceError::DescriptionRequired));

        let mut res = TestClient::put("http://example.com/api/categories/4")
            .json(&json!({ "name": "Snacks", "description": "  " }))
            .send(&make_service(mocks))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));
        assert_eq!(body["message"], "Description is required");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_category_returns_404() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .categories
            .expect_update_category()
            .once()
            .return_once(|_, _| Err(CategoriesServiceError::NotFound));

        let res = TestClient::put("http://example.com/api/categories/404")
            .json(&json!({ "name": "Snacks", "description": "Small bites" }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
