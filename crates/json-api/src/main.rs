//! Kasir JSON API Server

use std::process;

use salvo::{affix_state::inject, prelude::*, trailing_slash::remove_slash};
use tracing::{error, info};

use kasir_app::context::AppContext;

use crate::{config::ServerConfig, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod catcher;
mod categories;
mod config;
mod envelope;
mod extensions;
mod healthcheck;
mod observability;
mod products;
mod reports;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;
mod transactions;

/// Kasir JSON API Server entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(source) = observability::init_logging(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("Logging error: {source}");
        }

        process::exit(1);
    }

    let time_zone = match config.reports.time_zone() {
        Ok(time_zone) => time_zone,
        Err(source) => {
            error!("invalid report time zone: {source}");

            process::exit(1);
        }
    };

    let app = match AppContext::from_settings(&config.database.settings()).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let addr = config.socket_addr();

    info!(
        %addr,
        time_zone = time_zone.iana_name().unwrap_or("system"),
        "Starting server"
    );

    let listener = TcpListener::new(addr).bind().await;

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(observability::request_logging)
        .hoop(inject(State::shared(app, time_zone)))
        .push(router::app_router());

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server
        .serve(Service::new(router).catcher(catcher::catcher()))
        .await;

    info!("Server stopped");
}
