//! Kasir JSON API Healthcheck Handler

use salvo::prelude::*;
use serde::{Deserialize, Serialize};

use crate::envelope::ApiResponse;

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct HealthResponse {
    /// Service status
    pub status: String,
}

#[handler]
pub(crate) async fn handler() -> ApiResponse<HealthResponse> {
    ApiResponse::ok(
        "Service is healthy",
        HealthResponse {
            status: "ok".to_string(),
        },
    )
}
