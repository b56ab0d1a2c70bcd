//! Delete Product Handler

use std::sync::Arc;

use salvo::prelude::*;

use kasir_app::domain::products::models::Product;

use crate::{
    envelope::{ApiError, ApiResponse},
    extensions::*,
    products::errors::into_api_error,
    state::State,
};

#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<ApiResponse<()>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = req.id_param::<Product>("id")?;

    state
        .app
        .products
        .delete_product(id)
        .await
        .map_err(into_api_error)?;

    Ok(ApiResponse::empty("Product deleted successfully"))
}
