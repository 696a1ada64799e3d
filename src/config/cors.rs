use crate::utils::error::{AppError, Result};
use crate::utils::validation::{validate_origin, Validate};
use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Cross-origin policy of the image API.
///
/// The default is fully permissive: every origin, method and request header is
/// echoed back and credentials are allowed. An explicit allow-list narrows the
/// origins only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CorsConfig {
    /// Allowed origins (empty = allow all)
    pub allowed_origins: Vec<String>,
    pub allow_credentials: bool,
    /// Max age for preflight cache (seconds)
    pub max_age_seconds: Option<u64>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            allow_credentials: true,
            max_age_seconds: None,
        }
    }
}

impl CorsConfig {
    pub fn is_restricted(&self) -> bool {
        !self.allowed_origins.is_empty()
    }

    /// Convert to a tower-http `CorsLayer`.
    ///
    /// A wildcard `*` cannot be combined with credentials, so the permissive
    /// policy mirrors the request's origin, method and headers instead.
    pub fn to_layer(&self) -> Result<CorsLayer> {
        let origin = if self.is_restricted() {
            let origins = self
                .allowed_origins
                .iter()
                .map(|origin| {
                    origin
                        .parse::<HeaderValue>()
                        .map_err(|e| AppError::InvalidConfigValueError {
                            field: "cors.allowed_origins".to_string(),
                            value: origin.clone(),
                            reason: e.to_string(),
                        })
                })
                .collect::<Result<Vec<_>>>()?;
            AllowOrigin::list(origins)
        } else {
            AllowOrigin::mirror_request()
        };

        let mut layer = CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(self.allow_credentials);

        if let Some(secs) = self.max_age_seconds {
            layer = layer.max_age(Duration::from_secs(secs));
        }

        Ok(layer)
    }
}

impl Validate for CorsConfig {
    fn validate(&self) -> Result<()> {
        for origin in &self.allowed_origins {
            validate_origin("cors.allowed_origins", origin)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_permissive_with_credentials() {
        let cors = CorsConfig::default();
        assert!(!cors.is_restricted());
        assert!(cors.allow_credentials);
        assert!(cors.validate().is_ok());
        assert!(cors.to_layer().is_ok());
    }

    #[test]
    fn test_allow_list_is_validated() {
        let cors = CorsConfig {
            allowed_origins: vec!["https://niomag.example".to_string(), "not an origin".to_string()],
            ..CorsConfig::default()
        };
        assert!(cors.is_restricted());
        assert!(cors.validate().is_err());
    }
}
