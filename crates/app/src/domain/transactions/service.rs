//! Transactions service.

use std::{future::Future, time::Duration};

use async_trait::async_trait;
use mockall::automock;
use tracing::{info, warn};

use crate::{
    database::Db,
    domain::{
        products::repository::PgProductsRepository,
        transactions::{
            checkout::checkout,
            errors::{CheckoutError, TransactionsServiceError},
            models::{CheckoutRequest, Transaction, TransactionId},
            repository::PgTransactionsRepository,
            store::PgCheckoutStore,
        },
    },
};

/// Default bound on how long a checkout waits for a product row lock.
pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct PgTransactionsService {
    db: Db,
    lock_timeout: Duration,
    products: PgProductsRepository,
    repository: PgTransactionsRepository,
}

impl PgTransactionsService {
    #[must_use]
    pub fn new(db: Db, lock_timeout: Duration) -> Self {
        Self {
            db,
            lock_timeout,
            products: PgProductsRepository::new(),
            repository: PgTransactionsRepository::new(),
        }
    }

    async fn checkout_once(&self, request: CheckoutRequest) -> Result<Transaction, CheckoutError> {
        let mut tx = self.db.begin_with_lock_timeout(self.lock_timeout).await?;

        let transaction = {
            let mut store = PgCheckoutStore::new(&mut tx, &self.products, &self.repository);

            checkout(&mut store, request).await?
        };

        tx.commit().await?;

        Ok(transaction)
    }
}

#[async_trait]
impl TransactionsService for PgTransactionsService {
    async fn checkout(&self, request: CheckoutRequest) -> Result<Transaction, CheckoutError> {
        let request = &request;

        let transaction = retry_once(move || self.checkout_once(request.clone())).await?;

        info!(
            transaction_id = %transaction.id,
            total_amount = transaction.total_amount,
            item_count = transaction.details.len(),
            "checkout completed"
        );

        Ok(transaction)
    }

    async fn get_transaction(
        &self,
        transaction: TransactionId,
    ) -> Result<Transaction, TransactionsServiceError> {
        let mut tx = self.db.begin().await?;

        let mut found = self.repository.get_transaction(&mut tx, transaction).await?;

        let details = self.repository.get_line_items(&mut tx, transaction).await?;

        tx.commit().await?;

        found.details = details;

        Ok(found)
    }
}

/// Runs `attempt`, running it a second time only when the first failure is retryable.
async fn retry_once<F, Fut>(mut attempt: F) -> Result<Transaction, CheckoutError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Transaction, CheckoutError>>,
{
    match attempt().await {
        Err(error) if error.is_retryable() => {
            warn!(error = ?error, "checkout aborted by a concurrent transaction, retrying");

            attempt().await
        }
        result => result,
    }
}

#[automock]
#[async_trait]
pub trait TransactionsService: Send + Sync {
    /// Atomically validates a cart, decrements stock and records the sale.
    ///
    /// A checkout aborted by a deadlock or serialization failure is retried once.
    async fn checkout(&self, request: CheckoutRequest) -> Result<Transaction, CheckoutError>;

    /// Retrieve a transaction with its line items in insertion order.
    async fn get_transaction(
        &self,
        transaction: TransactionId,
    ) -> Result<Transaction, TransactionsServiceError>;
}
