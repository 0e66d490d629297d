use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use crate::config::{Config, Environment};
use crate::error::{Error, Result};

pub fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(Any)
}

/// Any origin in development. Production only answers the configured origins,
/// and refuses to start without at least one.
pub fn cors_layer(config: &Config) -> Result<CorsLayer> {
    if config.environment == Environment::Development {
        return Ok(permissive_cors());
    }

    if config.cors_allowed_origins.is_empty() {
        return Err(Error::Config(
            "CORS_ALLOWED_ORIGINS must be set in production".to_string(),
        ));
    }

    let origins = config
        .cors_allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|_| Error::Config(format!("invalid CORS origin '{}'", origin)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogFormat;
    use tokio_test::{assert_err, assert_ok};

    fn config(environment: Environment, origins: &[&str]) -> Config {
        Config {
            server_address: "127.0.0.1:0".to_string(),
            environment,
            cors_allowed_origins: origins.iter().map(|o| o.to_string()).collect(),
            body_limit_bytes: 1024,
            log_format: LogFormat::Pretty,
        }
    }

    #[test]
    fn development_allows_any_origin() {
        assert_ok!(cors_layer(&config(Environment::Development, &[])));
    }

    #[test]
    fn production_requires_origins() {
        assert_err!(cors_layer(&config(Environment::Production, &[])));
        assert_ok!(cors_layer(&config(
            Environment::Production,
            &["https://quiz.example.com"]
        )));
    }

    #[test]
    fn production_rejects_malformed_origin() {
        assert_err!(cors_layer(&config(Environment::Production, &["bad\norigin"])));
    }
}
