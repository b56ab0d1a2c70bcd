//! Database Config

use std::time::Duration;

use clap::Args;
use kasir_app::{context::DatabaseSettings, database::DEFAULT_MAX_CONNECTIONS};

/// `PostgreSQL` stores `lock_timeout` as a 32-bit millisecond count, and `0` disables it.
const MAX_LOCK_TIMEOUT_MS: u64 = 2_147_483_647;

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    /// Maximum number of pooled connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// How long a checkout waits for a product row lock, in milliseconds
    #[arg(
        long,
        env = "CHECKOUT_LOCK_TIMEOUT_MS",
        default_value_t = 5_000_u64,
        value_parser = clap::value_parser!(u64).range(1..=MAX_LOCK_TIMEOUT_MS)
    )]
    pub checkout_lock_timeout_ms: u64,

    /// Apply pending migrations on startup
    #[arg(long, env = "RUN_MIGRATIONS", default_value_t = false)]
    pub run_migrations: bool,
}

impl DatabaseConfig {
    #[must_use]
    pub fn lock_timeout(&self) -> Duration {
        Duration::from_millis(self.checkout_lock_timeout_ms)
    }

    #[must_use]
    pub fn settings(&self) -> DatabaseSettings {
        DatabaseSettings {
            url: self.database_url.clone(),
            max_connections: self.max_connections,
            lock_timeout: self.lock_timeout(),
            run_migrations: self.run_migrations,
        }
    }
}
