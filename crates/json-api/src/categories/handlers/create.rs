//! Create Category Handler

use std::sync::Arc;

use salvo::prelude::*;

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
    let request = req.json_body::<CategoryRequest>().await?;

    let category = state
        .app
        .categories
        .create_category(request.into())
        .await
        .map_err(into_api_error)?;

    Ok(ApiResponse::created(
        "Category created successfully",
        category.into(),
    ))
}
