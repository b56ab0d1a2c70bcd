//! App Context

use std::{sync::Arc, time::Duration};

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        categories::{CategoriesService, PgCategoriesService},
        products::{PgProductsService, ProductsService},
        reports::{PgReportsService, ReportsService},
        transactions::{PgTransactionsService, TransactionsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply migrations")]
    Migrations(#[source] sqlx::migrate::MigrateError),
}

/// Database settings needed to build an [`AppContext`].
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    /// Upper bound on how long a checkout waits for a product row lock.
    pub lock_timeout: Duration,
    pub run_migrations: bool,
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub categories: Arc<dyn CategoriesService>,
    pub transactions: Arc<dyn TransactionsService>,
    pub reports: Arc<dyn ReportsService>,
}

impl AppContext {
    /// Build application context from database settings.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or applying
    /// migrations fails.
    pub async fn from_settings(settings: &DatabaseSettings) -> Result<Self, AppInitError> {
        let pool = database::connect(&settings.url, settings.max_connections)
            .await
            .map_err(AppInitError::Database)?;

        if settings.run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrations)?;
        }

        Ok(Self::from_db(Db::new(pool), settings.lock_timeout))
    }

    #[must_use]
    pub fn from_db(db: Db, lock_timeout: Duration) -> Self {
        Self {
            products: Arc::new(PgProductsService::new(db.clone())),
            categories: Arc::new(PgCategoriesService::new(db.clone())),
            transactions: Arc::new(PgTransactionsService::new(db.clone(), lock_timeout)),
            reports: Arc::new(PgReportsService::new(db)),
        }
    }
}
