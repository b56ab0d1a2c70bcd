//! Category Models

use serde::{Deserialize, Serialize};

use kasir_app::domain::categories::models::{Category, CategoryUpdate, NewCategory};

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CategoryResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_at: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        CategoryResponse {
            id: category.id.into_i64(),
            name: category.name,
            description: category.description,
            created_at: category.created_at.to_string(),
        }
    }
}

/// Body accepted by create and update.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CategoryRequest {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,
}

impl From<CategoryRequest> for NewCategory {
    fn from(request: CategoryRequest) -> Self {
        NewCategory {
            name: request.name,
            description: request.description,
        }
    }
}

impl From<CategoryRequest> for CategoryUpdate {
    fn from(request: CategoryRequest) -> Self {
        CategoryUpdate {
            name: request.name,
            description: request.description,
        }
    }
}
