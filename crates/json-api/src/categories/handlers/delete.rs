//! Delete Category Handler

use std::sync::Arc;

use salvo::prelude::*;

use kasir_app::domain::categories::models::Category;

use crate::{
    categories::errors::into_api_error,
    envelope::{ApiError, ApiResponse},
    extensions::*,
    state::State,
};

#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<ApiResponse<()>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = req.id_param::<Category>("id")?;

    state
        .app
        .categories
        .delete_category(id)
        .await
        .map_err(into_api_error)?;

    Ok(ApiResponse::empty("Category deleted successfully"))
}
