//! Application Configuration
//!
//! Read once at startup from the process environment (after `.env` has been
//! loaded by `dotenvy`).

use std::fmt;

use anyhow::{Context, bail};
use auth::AuthConfig;
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Server configuration
#[derive(Clone)]
pub struct AppConfig {
    pub protocol: String,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    /// `None` outside release builds means a random per-process secret
    pub jwt_secret: Option<String>,
    /// Empty means any origin
    pub frontend_origins: Vec<String>,
}

impl AppConfig {
    pub const DEFAULT_PROTOCOL: &'static str = "http";
    pub const DEFAULT_HOST: &'static str = "localhost";
    pub const DEFAULT_PORT: u16 = 3000;
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

    /// Load from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT is not a valid port: {raw}"))?,
            None => Self::DEFAULT_PORT,
        };

        let database_max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {raw}"))?,
            None => Self::DEFAULT_MAX_CONNECTIONS,
        };

        let frontend_origins = get("FRONTEND_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            protocol: get("PROTOCOL").unwrap_or_else(|| Self::DEFAULT_PROTOCOL.to_string()),
            host: get("HOST").unwrap_or_else(|| Self::DEFAULT_HOST.to_string()),
            port,
            database_url: get("DATABASE_URL").context("DATABASE_URL must be set in environment")?,
            database_max_connections,
            jwt_secret: get("JWT_SECRET"),
            frontend_origins,
        })
    }

    /// `protocol://host:port`
    pub fn domain(&self) -> String {
        format!("{}://{}:{}", self.protocol, self.host, self.port)
    }

    /// Token and password settings for the auth crate
    ///
    /// Release builds refuse to start without `JWT_SECRET`.
    pub fn auth_config(&self) -> anyhow::Result<AuthConfig> {
        match &self.jwt_secret {
            Some(secret) => Ok(AuthConfig::new(secret.as_bytes().to_vec())),
            None if cfg!(debug_assertions) => {
                tracing::warn!("JWT_SECRET not set, using a random secret for this process");
                Ok(AuthConfig::with_random_secret())
            }
            None => bail!("JWT_SECRET must be set in production"),
        }
    }

    pub fn cors_layer(&self) -> CorsLayer {
        let origin = if self.frontend_origins.is_empty() {
            AllowOrigin::any()
        } else {
            let origins: Vec<HeaderValue> = self
                .frontend_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();
            AllowOrigin::list(origins)
        };

        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(AllowMethods::list([
                Method::GET,
                Method::POST,
                Method::PATCH,
                Method::DELETE,
                Method::OPTIONS,
            ]))
            .allow_headers(AllowHeaders::list([
                header::CONTENT_TYPE,
                header::AUTHORIZATION,
                header::ACCEPT,
            ]))
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("domain", &self.domain())
            .field("database_url", &"[REDACTED]")
            .field("database_max_connections", &self.database_max_connections)
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "[REDACTED]"))
            .field("frontend_origins", &self.frontend_origins)
            .finish()
    }
}
