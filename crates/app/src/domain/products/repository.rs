//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::{
    database::{encode_amount, encode_count, try_get_amount, try_get_count},
    domain::{
        categories::models::{Category, CategoryId},
        products::models::{LockedProduct, NewProduct, Product, ProductId, ProductUpdate},
    },
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");
const LOCK_PRODUCT_SQL: &str = include_str!("sql/lock_product.sql");
const DECREMENT_STOCK_SQL: &str = include_str!("sql/decrement_stock.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(LIST_PRODUCTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Postgres, Product>(GET_PRODUCT_SQL)
            .bind(product.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: NewProduct,
    ) -> Result<Product, sqlx::Error> {
        let id: i64 = query_scalar(CREATE_PRODUCT_SQL)
            .bind(product.name)
            .bind(encode_amount(product.price)?)
            .bind(encode_count(product.stock)?)
            .bind(product.category_id.map(CategoryId::into_i64))
            .fetch_one(&mut **tx)
            .await?;

        self.get_product(tx, ProductId::from_i64(id)).await
    }

    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, sqlx::Error> {
        let id: i64 = query_scalar(UPDATE_PRODUCT_SQL)
            .bind(product.into_i64())
            .bind(update.name)
            .bind(encode_amount(update.price)?)
            .bind(encode_count(update.stock)?)
            .bind(update.category_id.map(CategoryId::into_i64))
            .fetch_one(&mut **tx)
            .await?;

        self.get_product(tx, ProductId::from_i64(id)).await
    }

    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// Reads a product and holds its row lock until `tx` ends.
    pub(crate) async fn lock_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
    ) -> Result<Option<LockedProduct>, sqlx::Error> {
        query_as::<Postgres, LockedProduct>(LOCK_PRODUCT_SQL)
            .bind(product.into_i64())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn decrement_stock(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
        amount: u32,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DECREMENT_STOCK_SQL)
            .bind(product.into_i64())
            .bind(encode_count(amount)?)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for Product {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let category_id = row
            .try_get::<Option<i64>, _>("category_id")?
            .map(CategoryId::from_i64);

        let category = match (category_id, row.try_get::<Option<String>, _>("category_name")?) {
            (Some(id), Some(name)) => Some(Category {
                id,
                name,
                description: row.try_get("category_description")?,
                created_at: row
                    .try_get::<SqlxTimestamp, _>("category_created_at")?
                    .to_jiff(),
            }),
            _ => None,
        };

        Ok(Self {
            id: ProductId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            price: try_get_amount(row, "price")?,
            stock: try_get_count(row, "stock")?,
            category_id,
            category,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for LockedProduct {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ProductId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            price: try_get_amount(row, "price")?,
            stock: try_get_count(row, "stock")?,
        })
    }
}
