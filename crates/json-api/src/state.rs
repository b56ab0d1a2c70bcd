//! State

use std::sync::Arc;

use jiff::tz::TimeZone;
use kasir_app::context::AppContext;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    /// Zone report dates are interpreted in.
    pub(crate) time_zone: TimeZone,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, time_zone: TimeZone) -> Self {
        Self { app, time_zone }
    }

    #[must_use]
    pub(crate) fn shared(app: AppContext, time_zone: TimeZone) -> Arc<Self> {
        Arc::new(Self::new(app, time_zone))
    }
}
