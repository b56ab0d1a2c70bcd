//! Product Models

use serde::{Deserialize, Serialize};

use kasir_app::domain::{
    categories::models::CategoryId,
    products::models::{NewProduct, Product, ProductUpdate},
};

use crate::categories::models::CategoryResponse;

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ProductResponse {
    pub id: i64,
    pub name: String,

    /// Unit price in minor currency units
    pub price: u64,
    pub stock: u32,
    pub category_id: Option<i64>,
    pub category: Option<CategoryResponse>,
    pub created_at: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            id: product.id.into_i64(),
            name: product.name,
            price: product.price,
            stock: product.stock,
            category_id: product.category_id.map(CategoryId::into_i64),
            category: product.category.map(Into::into),
            created_at: product.created_at.to_string(),
        }
    }
}

/// Body accepted by create and update.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ProductRequest {
    pub name: String,
    pub price: u64,
    pub stock: u32,

    #[serde(default)]
    pub category_id: Option<i64>,
}

impl From<ProductRequest> for NewProduct {
    fn from(request: ProductRequest) -> Self {
        NewProduct {
            name: request.name,
            price: request.price,
            stock: request.stock,
            category_id: request.category_id.map(CategoryId::from_i64),
        }
    }
}

impl From<ProductRequest> for ProductUpdate {
    fn from(request: ProductRequest) -> Self {
        ProductUpdate {
            name: request.name,
            price: request.price,
            stock: request.stock,
            category_id: request.category_id.map(CategoryId::from_i64),
        }
    }
}
