//! Category Models

use jiff::Timestamp;

use crate::ids::TypedId;

/// Category Id
pub type CategoryId = TypedId<Category>;

/// Category Model
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
}

/// New Category Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
}

/// Category Update Model
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryUpdate {
    pub name: String,
    pub description: String,
}
