//! JSON response envelope
//!
//! Every endpoint answers with `{ "status", "message", "data" }` and mirrors the
//! envelope status as the HTTP status code.

use salvo::{
    Response,
    http::StatusCode,
    writing::{Json, Scribe},
};
use serde::{Deserialize, Serialize};

/// Successful response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ApiResponse<T> {
    pub status: u16,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    #[must_use]
    pub(crate) fn ok(message: impl Into<String>, data: T) -> Self {
        Self::with_status(StatusCode::OK, message, Some(data))
    }

    #[must_use]
    pub(crate) fn created(message: impl Into<String>, data: T) -> Self {
        Self::with_status(StatusCode::CREATED, message, Some(data))
    }

    fn with_status(status: StatusCode, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            data,
        }
    }
}

impl ApiResponse<()> {
    /// A 200 envelope whose `data` is `null`.
    #[must_use]
    pub(crate) fn empty(message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::OK, message, None)
    }
}

impl<T> Scribe for ApiResponse<T>
where
    T: Serialize + Send,
{
    fn render(self, res: &mut Response) {
        res.status_code(StatusCode::from_u16(self.status).unwrap_or(StatusCode::OK));
        res.render(Json(self));
    }
}

/// Machine-readable detail attached to business errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ErrorData {
    pub code: String,
}

/// Error envelope.
///
/// Internal failures carry only a generic message; details are logged where the
/// error is converted, never sent to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ApiError {
    status: StatusCode,
    message: String,
    code: Option<&'static str>,
}

impl ApiError {
    #[must_use]
    pub(crate) fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            code: None,
        }
    }

    #[must_use]
    pub(crate) fn with_code(mut self, code: &'static str) -> Self {
        self.code = Some(code);
        self
    }

    #[must_use]
    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    #[must_use]
    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    #[must_use]
    pub(crate) fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    #[must_use]
    pub(crate) fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }

    #[must_use]
    pub(crate) fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }

    #[must_use]
    pub(crate) fn invalid_id() -> Self {
        Self::bad_request("Invalid ID")
    }

    #[must_use]
    pub(crate) fn invalid_body() -> Self {
        Self::bad_request("Invalid request body")
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        let envelope = ApiResponse {
            status: self.status.as_u16(),
            message: self.message,
            data: self.code.map(|code| ErrorData {
                code: code.to_string(),
            }),
        };

        envelope.render(res);
    }
}

#[cfg(test)]
mod tests {
    use salvo::{
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use serde_json::{Value, json};
    use testresult::TestResult;

    use super::*;

    #[handler]
    async fn ok_handler() -> ApiResponse<Value> {
        ApiResponse::ok("Fetched", json!({ "id": 1 }))
    }

    #[handler]
    async fn empty_handler() -> ApiResponse<()> {
        ApiResponse::empty("Deleted")
    }

    #[handler]
    async fn error_handler() -> Result<ApiResponse<()>, ApiError> {
        Err(ApiError::unprocessable("Checkout requires at least one item").with_code("EMPTY_CART"))
    }

    fn service() -> Service {
        Service::new(
            Router::new()
                .push(Router::with_path("ok").get(ok_handler))
                .push(Router::with_path("empty").get(empty_handler))
                .push(Router::with_path("error").get(error_handler)),
        )
    }

    #[tokio::test]
    async fn success_envelope_carries_status_and_data() -> TestResult {
        let mut res = TestClient::get("http://example.com/ok")
            .send(&service())
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body,
            json!({ "status": 200, "message": "Fetched", "data": { "id": 1 } })
        );

        Ok(())
    }

    #[tokio::test]
    async fn empty_envelope_has_null_data() -> TestResult {
        let mut res = TestClient::get("http://example.com/empty")
            .send(&service())
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(body, json!({ "status": 200, "message": "Deleted", "data": null }));

        Ok(())
    }

    #[tokio::test]
    async fn error_envelope_carries_code() -> TestResult {
        let mut res = TestClient::get("http://example.com/error")
            .send(&service())
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));
        assert_eq!(
            body,
            json!({
                "status": 422,
                "message": "Checkout requires at least one item",
                "data": { "code": "EMPTY_CART" }
            })
        );

        Ok(())
    }
}
