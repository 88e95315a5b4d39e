use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::domain::errors::ApiError;
use crate::domain::origin::AllowDecision;
use crate::interface_adapters::handlers::map_api_error;
use crate::interface_adapters::state::AppState;

// Headers and methods advertised on preflight responses.
const ALLOWED_METHODS: &str = "GET, POST, PUT, PATCH, DELETE, OPTIONS";
const ALLOWED_HEADERS: &str = "authorization, content-type, accept";

// Origin admission runs before everything else. Rejected origins get an
// explicit 403 body rather than a response without CORS headers, so the
// failure is visible to the caller and in the logs.
pub async fn origin_admission(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let origin = req
        .headers()
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let credentials = match state.config.origin_policy.decide(origin.as_deref()) {
        AllowDecision::Allowed { credentials } => credentials,
        AllowDecision::Rejected => {
            tracing::warn!(
                origin = origin.as_deref().unwrap_or("none"),
                "origin rejected"
            );
            return map_api_error(ApiError::OriginRejected).into_response();
        }
    };

    // Preflight requests are answered here and never reach the routers.
    if req.method() == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        apply_cors_headers(response.headers_mut(), origin.as_deref(), credentials);
        let headers = response.headers_mut();
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        );
        return response;
    }

    let mut response = next.run(req).await;
    apply_cors_headers(response.headers_mut(), origin.as_deref(), credentials);
    response
}

// The allowed origin is echoed back verbatim (with Vary: Origin) instead of
// a wildcard, since a wildcard cannot carry allow-credentials. Requests
// without a declared origin need no CORS headers at all.
fn apply_cors_headers(headers: &mut HeaderMap, origin: Option<&str>, credentials: bool) {
    let Some(origin) = origin else { return };
    let Ok(value) = HeaderValue::from_str(origin) else {
        return;
    };
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
    if credentials {
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        );
    }
    headers.insert(header::VARY, HeaderValue::from_static("Origin"));
}

// One line per admitted request, before route dispatch. Observes only;
// never alters or rejects. The subscriber supplies the timestamp.
pub async fn log_requests(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let origin = req
        .headers()
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("none")
        .to_owned();

    tracing::info!(%method, %uri, %origin, "request");

    next.run(req).await
}
