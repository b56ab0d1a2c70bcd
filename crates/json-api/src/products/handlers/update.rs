//! Update Product Handler

use std::sync::Arc;

use salvo::prelude::*;

use kasir_app::domain::products::models::Product;

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
) -> Result<ApiResponse<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = req.id_param::<Product>("id")?;
    let request = req.json_body::<ProductRequest>().await?;

    let product = state
        .app
        .products
        .update_product(id, request.into())
        .await
        .map_err(into_api_error)?;

    Ok(ApiResponse::ok("Product updated successfully", product.into()))
}
