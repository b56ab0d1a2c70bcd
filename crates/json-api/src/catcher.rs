//! Error page catcher
//!
//! Unmatched routes, caught panics and other framework-level failures leave an
//! empty or `StatusError` body; this renders them with the JSON envelope.

use salvo::{catcher::Catcher, prelude::*};

use crate::envelope::ApiError;

pub(crate) fn catcher() -> Catcher {
    Catcher::default().hoop(envelope_error)
}

#[handler]
async fn envelope_error(res: &mut Response, ctrl: &mut FlowCtrl) {
    let status = res
        .status_code
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let message = if status.is_server_error() {
        "Internal server error"
    } else {
        status.canonical_reason().unwrap_or("Request failed")
    };

    res.render(ApiError::new(status, message));
    ctrl.skip_rest();
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use super::*;

    #[handler]
    async fn failing(res: &mut Response) {
        res.render(StatusError::internal_server_error().brief("worker panicked"));
    }

    fn make_service() -> Service {
        Service::new(Router::new().push(Router::with_path("failing").get(failing)))
            .catcher(catcher())
    }

    #[tokio::test]
    async fn unmatched_route_renders_envelope() -> TestResult {
        let mut res = TestClient::get("http://example.com/nowhere")
            .send(&make_service())
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(
            body,
            json!({ "status": 404, "message": "Not Found", "data": null })
        );

        Ok(())
    }

    #[tokio::test]
    async fn status_error_renders_envelope_without_details() -> TestResult {
        let mut res = TestClient::get("http://example.com/failing")
            .send(&make_service())
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(
            body,
            json!({ "status": 500, "message": "Internal server error", "data": null })
        );

        Ok(())
    }
}
