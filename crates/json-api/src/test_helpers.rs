//! Test helpers.

use std::sync::Arc;

use jiff::tz::TimeZone;
use salvo::{affix_state::inject, prelude::*};

use kasir_app::{
    context::AppContext,
    domain::{
        categories::MockCategoriesService, products::MockProductsService,
        reports::MockReportsService, transactions::MockTransactionsService,
    },
};

use crate::{catcher::catcher, state::State};

/// Service mocks backing a test server; any call without an expectation fails.
#[derive(Debug, Default)]
pub(crate) struct Mocks {
    pub products: MockProductsService,
    pub categories: MockCategoriesService,
    pub transactions: MockTransactionsService,
    pub reports: MockReportsService,
}

impl Mocks {
    /// Serve `route` with these mocks and UTC report dates.
    pub(crate) fn service(self, route: Router) -> Service {
        self.service_in(TimeZone::UTC, route)
    }

    pub(crate) fn service_in(self, time_zone: TimeZone, route: Router) -> Service {
        let app = AppContext {
            products: Arc::new(self.products),
            categories: Arc::new(self.categories),
            transactions: Arc::new(self.transactions),
            reports: Arc::new(self.reports),
        };

        Service::new(
            Router::new()
                .hoop(inject(State::shared(app, time_zone)))
                .push(route),
        )
        .catcher(catcher())
    }
}
