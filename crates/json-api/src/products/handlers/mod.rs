//! Product Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update;

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use kasir_app::domain::products::models::{Product, ProductId};

    use crate::categories::handlers::tests::make_category;

    pub(super) fn make_product(id: i64) -> Product {
        let category = make_category(1);

        Product {
            id: ProductId::from_i64(id),
            name: "Iced Tea".to_string(),
            price: 100,
            stock: 10,
            category_id: Some(category.id),
            category: Some(category),
            created_at: Timestamp::UNIX_EPOCH,
        }
    }
}
