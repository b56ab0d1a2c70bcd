//! Request helper extensions.

use salvo::Request;
use serde::de::DeserializeOwned;
use tracing::debug;

use kasir_app::ids::TypedId;

use crate::envelope::ApiError;

/// Path and body extraction that fails with envelope errors.
pub(crate) trait RequestExt {
    /// Reads a numeric `{id}` path segment.
    fn id_param<T>(&self, name: &str) -> Result<TypedId<T>, ApiError>;

    /// Deserializes the JSON body, rejecting malformed payloads with 400.
    async fn json_body<T: DeserializeOwned>(&mut self) -> Result<T, ApiError>;
}

impl RequestExt for Request {
    fn id_param<T>(&self, name: &str) -> Result<TypedId<T>, ApiError> {
        self.param::<String>(name)
            .and_then(|raw| raw.parse::<TypedId<T>>().ok())
            .ok_or_else(ApiError::invalid_id)
    }

    async fn json_body<T: DeserializeOwned>(&mut self) -> Result<T, ApiError> {
        self.parse_json::<T>().await.map_err(|source| {
            debug!("rejected request body: {source}");

            ApiError::invalid_body()
        })
    }
}
