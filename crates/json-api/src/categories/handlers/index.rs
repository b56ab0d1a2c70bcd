//! List Categories Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    categories::{errors::into_api_error, models::CategoryResponse},
    envelope::{ApiError, ApiResponse},
    extensions::*,
    state::State,
};

#[handler]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<ApiResponse<Vec<CategoryResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let categories = state
        .app
        .categories
        .list_categories()
        .await
        .map_err(into_api_error)?;

    Ok(ApiResponse::ok(
        "Categories fetched successfully",
        categories.into_iter().map(Into::into).collect(),
    ))
}
