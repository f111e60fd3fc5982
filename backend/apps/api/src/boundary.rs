//! HTTP Boundary
//!
//! Failure logging for every response, security headers, and the envelope
//! for requests that never reach a handler.

use axum::Router;
use axum::extract::Request;
use axum::http::{HeaderName, HeaderValue, header};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;
use kernel::error::{app_error::AppError, conversions::ErrorReport, kind::ErrorKind};
use kernel::i18n::MessageKey;
use tower_http::set_header::SetResponseHeaderLayer;

/// Log method, path, timestamp and message of every failed response
///
/// 4xx is logged at `warn`, 5xx at `error`.
pub async fn log_failures(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let message = response
        .extensions()
        .get::<ErrorReport>()
        .map(|report| report.message.clone())
        .unwrap_or_else(|| status.canonical_reason().unwrap_or_default().to_string());
    let timestamp = Utc::now().to_rfc3339();

    if status.is_server_error() {
        tracing::error!(
            %method,
            %path,
            %timestamp,
            status = status.as_u16(),
            %message,
            "Request failed"
        );
    } else {
        tracing::warn!(
            %method,
            %path,
            %timestamp,
            status = status.as_u16(),
            %message,
            "Request rejected"
        );
    }

    response
}

/// Fallback for unknown paths
pub async fn route_not_found() -> AppError {
    AppError::not_found(MessageKey::RouteNotFound.text())
}

/// Fallback for known paths with an unsupported method
pub async fn method_not_allowed() -> AppError {
    AppError::new(ErrorKind::MethodNotAllowed, MessageKey::MethodNotAllowed.text())
}

/// Response headers set on every response unless a handler already set them
const SECURITY_HEADERS: [(HeaderName, &str); 5] = [
    (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
    (header::X_FRAME_OPTIONS, "SAMEORIGIN"),
    (header::REFERRER_POLICY, "no-referrer"),
    (header::X_DNS_PREFETCH_CONTROL, "off"),
    (header::X_XSS_PROTECTION, "0"),
];

/// Add [`SECURITY_HEADERS`] to every response of `router`
pub fn with_security_headers(router: Router) -> Router {
    SECURITY_HEADERS
        .into_iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::if_not_present(
                name,
                HeaderValue::from_static(value),
            ))
        })
}
