//! Get Product Handler

use std::sync::Arc;

use salvo::prelude::*;

use kasir_app::domain::products::models::Product;

use crate::{
    envelope::{ApiError, ApiResponse},
    extensions::*,
    products::{errors::into_api_error, models::ProductResponse},
    state::State,
};

#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<ApiResponse<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = req.id_param::<Product>("id")?;

    let product = state
        .app
        .products
        .get_product(id)
        .await
        .map_err(into_api_error)?;

    Ok(ApiResponse::ok("Product fetched successfully", product.into()))
}
