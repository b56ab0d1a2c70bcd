//! Product Errors

use tracing::error;

use kasir_app::domain::products::ProductsServiceError;

use crate::envelope::ApiError;

pub(crate) fn into_api_error(error: ProductsServiceError) -> ApiError {
    match error {
        ProductsServiceError::NotFound => ApiError::not_found("Product not found"),
        ProductsServiceError::AlreadyExists => ApiError::conflict("Product already exists"),
        ProductsServiceError::InvalidReference => ApiError::unprocessable("Category not found"),
        ProductsServiceError::MissingRequiredData | ProductsServiceError::InvalidData => {
            ApiError::unprocessable("Invalid product data")
        }
        ProductsServiceError::Sql(source) => {
            error!("product storage failure: {source}");

            ApiError::internal()
        }
    }
}
