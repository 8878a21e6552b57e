//! CORS (Cross-Origin Resource Sharing) configuration.
//!
//! The admin portal frontend runs on a different origin than the API, so
//! every browser call it makes is cross-origin. This module defines the
//! allow-list policy for those calls: which origins may read responses,
//! which methods and headers are permitted, whether credentials (cookies,
//! `Authorization` headers) may be attached, and how long browsers may cache
//! a preflight answer.
//!
//! # Configuration
//!
//! Policy values can be configured via environment variables:
//!
//! - `ALLOWED_ORIGINS`: Comma-separated list of exact origins
//!   (default: `http://localhost:3000,http://192.168.206.1:3000`)
//! - `CORS_ALLOWED_METHODS`: Comma-separated list of HTTP verbs
//!   (default: `GET,POST,PUT,DELETE,OPTIONS,PATCH`)
//! - `CORS_ALLOW_CREDENTIALS`: Default `true`
//! - `CORS_MAX_AGE_SECONDS`: Preflight cache TTL, default `3600`
//!
//! # Security
//!
//! Because credentials are allowed, the origin list must be an explicit
//! allow-list: a wildcard (`*`) origin combined with credentials would let
//! any page on the internet make authenticated calls with the user's
//! cookies. [`CorsConfig::cors_layer`] refuses that combination at startup.

use std::env;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// CORS policy for the API.
///
/// Constructed once at startup and shared read-only through `AppState`;
/// never mutated per-request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    /// Exact-match origins (scheme + host + port) allowed to read responses.
    pub allowed_origins: Vec<String>,

    /// HTTP verb tokens advertised on preflight responses.
    pub allowed_methods: Vec<String>,

    /// Whether browsers may attach cookies and `Authorization` headers.
    ///
    /// When true, `allowed_origins` must not contain `*`.
    pub allow_credentials: bool,

    /// How long (seconds) browsers may cache a preflight response.
    pub max_age_seconds: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: split_csv("http://localhost:3000,http://192.168.206.1:3000"),
            allowed_methods: split_csv("GET,POST,PUT,DELETE,OPTIONS,PATCH"),
            allow_credentials: true,
            max_age_seconds: 3600,
        }
    }
}

impl CorsConfig {
    /// Creates a new `CorsConfig` from environment variables.
    ///
    /// Falls back to the defaults above if a variable is not set or cannot
    /// be parsed.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|v| split_csv(&v))
                .ok()
                .filter(|origins| !origins.is_empty())
                .unwrap_or(defaults.allowed_origins),
            allowed_methods: env::var("CORS_ALLOWED_METHODS")
                .map(|v| split_csv(&v))
                .ok()
                .filter(|methods| !methods.is_empty())
                .unwrap_or(defaults.allowed_methods),
            allow_credentials: env::var("CORS_ALLOW_CREDENTIALS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.allow_credentials),
            max_age_seconds: env::var("CORS_MAX_AGE_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_age_seconds),
        }
    }

    /// Creates the `CorsLayer` implementing this policy.
    ///
    /// The layer answers preflight `OPTIONS` requests itself (the wrapped
    /// handler never runs) and annotates other responses with
    /// `Access-Control-Allow-*` headers when the request's `Origin` is on
    /// the allow-list. Requests from unlisted origins pass through
    /// unannotated; the browser then refuses to expose the response.
    ///
    /// Allowed headers mirror the request's `Access-Control-Request-Headers`,
    /// since a literal `*` is not honored by browsers in credentialed mode.
    ///
    /// # Panics
    ///
    /// Panics if `allow_credentials` is combined with a `*` origin. That
    /// pairing is rejected by browsers as a credential-leak hazard, so it is
    /// a configuration bug worth failing startup over.
    #[must_use]
    pub fn cors_layer(&self) -> CorsLayer {
        assert!(
            !(self.allow_credentials && self.allowed_origins.iter().any(|o| o == "*")),
            "CORS misconfiguration: wildcard origin cannot be combined with allow_credentials"
        );

        // `AllowOrigin::list` rejects a literal `*`; the wildcard form only
        // exists for the credential-less case and maps to `any()`.
        let origin = if self.allowed_origins.iter().any(|o| o == "*") {
            AllowOrigin::any()
        } else {
            let origins: Vec<HeaderValue> = self
                .allowed_origins
                .iter()
                .filter_map(|origin| match origin.parse() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(origin = %origin, "Skipping unparseable CORS origin");
                        None
                    }
                })
                .collect();
            AllowOrigin::list(origins)
        };

        let methods: Vec<Method> = self
            .allowed_methods
            .iter()
            .filter_map(|method| method.to_ascii_uppercase().parse().ok())
            .collect();

        let layer = CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(AllowMethods::list(methods))
            .allow_headers(AllowHeaders::mirror_request())
            .max_age(Duration::from_secs(self.max_age_seconds));

        if self.allow_credentials {
            layer.allow_credentials(true)
        } else {
            layer
        }
    }
}

fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CorsConfig::default();
        assert_eq!(
            config.allowed_origins,
            vec!["http://localhost:3000", "http://192.168.206.1:3000"]
        );
        assert_eq!(
            config.allowed_methods,
            vec!["GET", "POST", "PUT", "DELETE", "OPTIONS", "PATCH"]
        );
        assert!(config.allow_credentials);
        assert_eq!(config.max_age_seconds, 3600);
    }

    #[test]
    fn test_split_csv_trims_and_drops_empty() {
        assert_eq!(
            split_csv(" http://a.test , ,http://b.test,"),
            vec!["http://a.test", "http://b.test"]
        );
        assert!(split_csv("").is_empty());
    }

    #[test]
    fn test_cors_layer_builds_from_default() {
        let config = CorsConfig::default();
        let _layer = config.cors_layer();
    }

    #[test]
    fn test_cors_layer_without_credentials_allows_wildcard() {
        let config = CorsConfig {
            allowed_origins: vec!["*".to_string()],
            allow_credentials: false,
            ..CorsConfig::default()
        };
        let _layer = config.cors_layer();
    }

    #[test]
    #[should_panic(expected = "wildcard origin")]
    fn test_cors_layer_rejects_wildcard_with_credentials() {
        let config = CorsConfig {
            allowed_origins: vec!["*".to_string()],
            ..CorsConfig::default()
        };
        let _layer = config.cors_layer();
    }

    #[test]
    fn test_config_equality_and_clone() {
        let config = CorsConfig::default();
        assert_eq!(config, config.clone());
    }
}
