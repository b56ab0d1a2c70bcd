//! Storage seam for the checkout engine.

use async_trait::async_trait;
use jiff::Timestamp;
use sqlx::{Postgres, Transaction as PgTransaction};

use crate::domain::{
    products::{
        models::{LockedProduct, ProductId},
        repository::PgProductsRepository,
    },
    transactions::{
        models::{CustomerDetails, LineItem, NewLineItem, TransactionId},
        repository::PgTransactionsRepository,
    },
};

/// Everything checkout reads and writes, scoped to a single unit of work.
///
/// Implementations must apply every call to the same underlying transaction so
/// that dropping it without commit discards all of them.
#[async_trait]
pub trait CheckoutStore: Send {
    /// Reads a product and holds it exclusively until the unit of work ends.
    async fn get_product_for_update(
        &mut self,
        product: ProductId,
    ) -> Result<Option<LockedProduct>, sqlx::Error>;

    /// Returns `false` when the product no longer exists.
    async fn decrement_stock(&mut self, product: ProductId, amount: u32)
    -> Result<bool, sqlx::Error>;

    async fn insert_transaction(
        &mut self,
        total_amount: u64,
        customer: &CustomerDetails,
    ) -> Result<(TransactionId, Timestamp), sqlx::Error>;

    async fn insert_line_items(
        &mut self,
        transaction: TransactionId,
        items: &[NewLineItem],
    ) -> Result<Vec<LineItem>, sqlx::Error>;
}

/// [`CheckoutStore`] bound to an open `PostgreSQL` transaction.
pub(crate) struct PgCheckoutStore<'a> {
    tx: &'a mut PgTransaction<'static, Postgres>,
    products: &'a PgProductsRepository,
    transactions: &'a PgTransactionsRepository,
}

impl<'a> PgCheckoutStore<'a> {
    pub(crate) fn new(
        tx: &'a mut PgTransaction<'static, Postgres>,
        products: &'a PgProductsRepository,
        transactions: &'a PgTransactionsRepository,
    ) -> Self {
        Self {
            tx,
            products,
            transactions,
        }
    }
}

#[async_trait]
impl CheckoutStore for PgCheckoutStore<'_> {
    async fn get_product_for_update(
        &mut self,
        product: ProductId,
    ) -> Result<Option<LockedProduct>, sqlx::Error> {
        self.products.lock_product(self.tx, product).await
    }

    async fn decrement_stock(
        &mut self,
        product: ProductId,
        amount: u32,
    ) -> Result<bool, sqlx::Error> {
        let rows_affected = self
            .products
            .decrement_stock(self.tx, product, amount)
            .await?;

        Ok(rows_affected > 0)
    }

    async fn insert_transaction(
        &mut self,
        total_amount: u64,
        customer: &CustomerDetails,
    ) -> Result<(TransactionId, Timestamp), sqlx::Error> {
        self.transactions
            .insert_transaction(self.tx, total_amount, customer)
            .await
    }

    async fn insert_line_items(
        &mut self,
        transaction: TransactionId,
        items: &[NewLineItem],
    ) -> Result<Vec<LineItem>, sqlx::Error> {
        self.transactions
            .insert_line_items(self.tx, transaction, items)
            .await
    }
}
