//! Transactions Repository

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction as PgTransaction, postgres::PgRow, query, query_as};
use tracing::debug;

use crate::{
    database::{encode_amount, encode_count, try_get_amount, try_get_count},
    domain::{
        products::models::ProductId,
        transactions::models::{
            CustomerDetails, LineItem, LineItemId, NewLineItem, Transaction, TransactionId,
        },
    },
};

const INSERT_TRANSACTION_SQL: &str = include_str!("sql/insert_transaction.sql");
const INSERT_LINE_ITEMS_SQL: &str = include_str!("sql/insert_line_items.sql");
const GET_TRANSACTION_SQL: &str = include_str!("sql/get_transaction.sql");
const GET_LINE_ITEMS_SQL: &str = include_str!("sql/get_line_items.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgTransactionsRepository;

impl PgTransactionsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn insert_transaction(
        &self,
        tx: &mut PgTransaction<'_, Postgres>,
        total_amount: u64,
        customer: &CustomerDetails,
    ) -> Result<(TransactionId, Timestamp), sqlx::Error> {
        let row = query(INSERT_TRANSACTION_SQL)
            .bind(customer.customer_id.as_deref())
            .bind(customer.customer_name.as_deref())
            .bind(customer.table_number)
            .bind(encode_amount(total_amount)?)
            .fetch_one(&mut **tx)
            .await?;

        Ok((
            TransactionId::from_i64(row.try_get("id")?),
            row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        ))
    }

    /// Writes every line item in one statement and returns them in insertion order.
    #[tracing::instrument(
        name = "transactions.repository.insert_line_items",
        skip(self, tx, items),
        fields(transaction_id = %transaction, item_count = items.len()),
        err
    )]
    pub(crate) async fn insert_line_items(
        &self,
        tx: &mut PgTransaction<'_, Postgres>,
        transaction: TransactionId,
        items: &[NewLineItem],
    ) -> Result<Vec<LineItem>, sqlx::Error> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let product_ids: Vec<i64> = items.iter().map(|i| i.product_id.into_i64()).collect();
        let product_names: Vec<&str> = items.iter().map(|i| i.product_name.as_str()).collect();

        let quantities = items
            .iter()
            .map(|i| encode_count(i.quantity))
            .collect::<Result<Vec<i32>, _>>()?;

        let subtotals = items
            .iter()
            .map(|i| encode_amount(i.subtotal))
            .collect::<Result<Vec<i64>, _>>()?;

        let mut line_items = query_as::<Postgres, LineItem>(INSERT_LINE_ITEMS_SQL)
            .bind(transaction.into_i64())
            .bind(&product_ids)
            .bind(&product_names)
            .bind(&quantities)
            .bind(&subtotals)
            .fetch_all(&mut **tx)
            .await?;

        line_items.sort_by_key(|item| item.id);

        debug!(line_item_count = line_items.len(), "inserted line items");

        Ok(line_items)
    }

    pub(crate) async fn get_transaction(
        &self,
        tx: &mut PgTransaction<'_, Postgres>,
        transaction: TransactionId,
    ) -> Result<Transaction, sqlx::Error> {
        query_as::<Postgres, Transaction>(GET_TRANSACTION_SQL)
            .bind(transaction.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_line_items(
        &self,
        tx: &mut PgTransaction<'_, Postgres>,
        transaction: TransactionId,
    ) -> Result<Vec<LineItem>, sqlx::Error> {
        query_as::<Postgres, LineItem>(GET_LINE_ITEMS_SQL)
            .bind(transaction.into_i64())
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Transaction {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: TransactionId::from_i64(row.try_get("id")?),
            customer_id: row.try_get("customer_id")?,
            customer_name: row.try_get("customer_name")?,
            table_number: row.try_get("table_number")?,
            total_amount: try_get_amount(row, "total_amount")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            details: Vec::new(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for LineItem {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: LineItemId::from_i64(row.try_get("id")?),
            transaction_id: TransactionId::from_i64(row.try_get("transaction_id")?),
            product_id: ProductId::from_i64(row.try_get("product_id")?),
            product_name: row.try_get("product_name")?,
            quantity: try_get_count(row, "quantity")?,
            subtotal: try_get_amount(row, "subtotal")?,
        })
    }
}
