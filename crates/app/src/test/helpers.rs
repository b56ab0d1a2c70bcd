//! Test Helpers

use std::borrow::Cow;

use sqlx::error::{DatabaseError, ErrorKind};
use thiserror::Error;

use crate::{
    domain::{
        categories::{
            CategoriesService, CategoriesServiceError,
            models::{Category, NewCategory},
        },
        products::{
            ProductsService, ProductsServiceError,
            models::{NewProduct, Product},
        },
    },
    test::TestContext,
};

pub(crate) async fn create_category(
    ctx: &TestContext,
    name: &str,
) -> Result<Category, CategoriesServiceError> {
    ctx.categories
        .create_category(NewCategory {
            name: name.to_string(),
            description: format!("{name} category"),
        })
        .await
}

pub(crate) async fn create_product(
    ctx: &TestContext,
    name: &str,
    price: u64,
    stock: u32,
) -> Result<Product, ProductsServiceError> {
    ctx.products
        .create_product(NewProduct {
            name: name.to_string(),
            price,
            stock,
            category_id: None,
        })
        .await
}

/// A server-side error carrying only a `SQLSTATE` code.
#[derive(Debug, Error)]
#[error("database error {code}")]
struct SqlStateError {
    code: &'static str,
}

impl DatabaseError for SqlStateError {
    fn message(&self) -> &str {
        "database error"
    }

    fn code(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.code))
    }

    fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self
    }

    fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
        self
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

pub(crate) fn database_error(code: &'static str) -> sqlx::Error {
    sqlx::Error::Database(Box::new(SqlStateError { code }))
}
