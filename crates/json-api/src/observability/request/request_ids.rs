//! Correlation ids for API requests.
//!
//! A client-supplied `x-request-id` is echoed back when it is a short run of
//! visible ASCII; anything else is replaced with a fresh UUIDv7 so log lines for
//! one checkout stay greppable.

use salvo::{
    http::{StatusCode, header::HeaderValue},
    prelude::Response,
};
use tracing::warn;
use uuid::Uuid;

pub(super) const REQUEST_ID_HEADER: &str = "x-request-id";

const MAX_CLIENT_REQUEST_ID_LEN: usize = 128;

pub(super) fn resolve_request_id(client_id: Option<String>) -> String {
    client_id
        .map(|id| id.trim().to_string())
        .filter(|id| is_acceptable_client_id(id))
        .unwrap_or_else(|| Uuid::now_v7().to_string())
}

fn is_acceptable_client_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_CLIENT_REQUEST_ID_LEN
        && id.bytes().all(|byte| byte.is_ascii_graphic())
}

pub(super) fn set_request_id_header(res: &mut Response, request_id: &str) {
    match HeaderValue::from_str(request_id) {
        Ok(value) => {
            res.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        Err(source) => warn!(request_id, "request id is not a valid header value: {source}"),
    }
}

/// Handlers that never set a status answered 200.
pub(super) fn final_status(status_code: Option<StatusCode>) -> StatusCode {
    status_code.unwrap_or(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_id_is_kept_when_well_formed() {
        assert_eq!(
            resolve_request_id(Some("  till-3-checkout-0042 ".to_string())),
            "till-3-checkout-0042"
        );
    }

    #[test]
    fn missing_blank_or_oversized_ids_are_replaced() {
        for client_id in [
            None,
            Some("   ".to_string()),
            Some("a".repeat(MAX_CLIENT_REQUEST_ID_LEN + 1)),
            Some("kasir id".to_string()),
        ] {
            let resolved = resolve_request_id(client_id.clone());

            assert!(
                Uuid::parse_str(&resolved).is_ok(),
                "{client_id:?} should be replaced with a generated id, got {resolved}"
            );
        }
    }
}
