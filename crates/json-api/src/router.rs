//! App Router

use salvo::Router;

use crate::{categories, healthcheck, observability, products, reports, transactions};

/// Every public route; state and middleware are attached by the caller.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(Router::with_path("api").push(api_router()))
}

fn api_router() -> Router {
    Router::new()
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
        .push(
            Router::with_path("categories")
                .get(categories::index::handler)
                .post(categories::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(categories::get::handler)
                        .put(categories::update::handler)
                        .delete(categories::delete::handler),
                ),
        )
        .push(Router::with_path("checkout").post(transactions::checkout::handler))
        .push(Router::with_path("transactions/{id}").get(transactions::get::handler))
        .push(
            Router::with_path("report")
                .get(reports::range::handler)
                .push(Router::with_path("today").get(reports::today::handler)),
        )
}
