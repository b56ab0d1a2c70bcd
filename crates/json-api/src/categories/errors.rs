//! Category Errors

use tracing::error;

use kasir_app::domain::categories::CategoriesServiceError;

use crate::envelope::ApiError;

pub(crate) fn into_api_error(error: CategoriesServiceError) -> ApiError {
    match error {
        CategoriesServiceError::NotFound => ApiError::not_found("Category not found"),
        CategoriesServiceError::NameRequired => ApiError::unprocessable("Name is required"),
        CategoriesServiceError::DescriptionRequired => {
            ApiError::unprocessable("Description is required")
        }
        CategoriesServiceError::InvalidData => ApiError::unprocessable("Invalid category data"),
        CategoriesServiceError::Sql(source) => {
            error!("category storage failure: {source}");

            ApiError::internal()
        }
    }
}
