//! Liveness check

use kernel::i18n::MessageKey;
use kernel::response::ApiResponse;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Health {
    pub status: &'static str,
}

/// GET /api/health
pub async fn health() -> ApiResponse<Health> {
    ApiResponse::ok(Health { status: "ok" }, MessageKey::HealthOk)
}
