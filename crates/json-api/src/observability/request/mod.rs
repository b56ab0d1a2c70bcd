//! Request-level logging and request IDs.

mod request_ids;
mod spans;

use std::time::Instant;

use salvo::{
    Request, handler,
    http::Method,
    prelude::{Depot, FlowCtrl, Response},
};
use tracing::{Instrument as _, debug, error, info, warn};

use super::{metrics, settings};

const REQUEST_ID_DEPOT_KEY: &str = "request_id";

/// Bodies larger than this are not echoed into debug logs.
const MAX_LOGGED_BODY_BYTES: usize = 4 * 1024;

#[handler]
pub(crate) async fn request_logging(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    if req.uri().path() == "/metrics" {
        ctrl.call_next(req, depot, res).await;
        return;
    }

    let started = Instant::now();

    let request_id =
        request_ids::resolve_request_id(req.header::<String>(request_ids::REQUEST_ID_HEADER));

    depot.insert(REQUEST_ID_DEPOT_KEY, request_id.clone());

    request_ids::set_request_id_header(res, &request_id);

    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let route = spans::route_label(&path);
    let remote_addr = req.remote_addr().to_string();
    let user_agent = req.header::<String>("user-agent").unwrap_or_default();
    let _in_flight_request = metrics::InFlightRequestGuard::track();

    let span = tracing::info_span!(
        parent: None,
        "http.request",
        request_id = %request_id,
        method = %method,
        path = %path,
        route = %route,
        remote_addr = %remote_addr,
        user_agent = %user_agent,
        status = tracing::field::Empty,
        duration_ms = tracing::field::Empty
    );

    if has_body(&method) && tracing::enabled!(tracing::Level::DEBUG) {
        log_request_body(req).instrument(span.clone()).await;
    }

    ctrl.call_next(req, depot, res)
        .instrument(span.clone())
        .await;

    let duration = started.elapsed();
    let status = request_ids::final_status(res.status_code);
    let duration_ms = duration.as_millis();
    let threshold_ms = u128::from(settings::slow_request_threshold_ms());

    metrics::observe_request(
        method.as_str(),
        &route,
        status.as_u16(),
        duration.as_secs_f64(),
    );

    span.record("status", status.as_u16());
    span.record("duration_ms", duration_ms);

    span.in_scope(|| {
        info!(status = status.as_u16(), duration_ms, "request.completed");

        if status.is_server_error() {
            error!(status = status.as_u16(), "server error response");
        } else if status.is_client_error() {
            warn!(status = status.as_u16(), "client error response");
        }

        if duration_ms > threshold_ms {
            warn!(duration_ms, threshold_ms, "slow request detected");
        }
    });
}

fn has_body(method: &Method) -> bool {
    *method == Method::POST || *method == Method::PUT || *method == Method::PATCH
}

/// The payload is buffered by salvo, so handlers can still parse it afterwards.
async fn log_request_body(req: &mut Request) {
    match req.payload().await {
        Ok(body) if body.len() <= MAX_LOGGED_BODY_BYTES => {
            debug!(body = %String::from_utf8_lossy(body), "request.body");
        }
        Ok(body) => debug!(bytes = body.len(), "request.body omitted"),
        Err(source) => debug!("could not read request body: {source}"),
    }
}
