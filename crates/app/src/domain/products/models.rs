//! Product Models

use jiff::Timestamp;

use crate::{
    domain::categories::models::{Category, CategoryId},
    ids::TypedId,
};

/// Product Id
pub type ProductId = TypedId<Product>;

/// Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price in minor currency units
    pub price: u64,
    pub stock: u32,
    pub category_id: Option<CategoryId>,
    pub category: Option<Category>,
    pub created_at: Timestamp,
}

/// New Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: u64,
    pub stock: u32,
    pub category_id: Option<CategoryId>,
}

/// Product Update Model
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub name: String,
    pub price: u64,
    pub stock: u32,
    pub category_id: Option<CategoryId>,
}

/// The slice of a product row checkout reads while holding its row lock.
#[derive(Debug, Clone, PartialEq)]
pub struct LockedProduct {
    pub id: ProductId,
    pub name: String,
    pub price: u64,
    pub stock: u32,
}
