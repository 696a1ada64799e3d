use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid query parameter '{field}' = '{value}': {reason}")]
    InvalidQueryParameter {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}' = '{value}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidQueryParameter { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON body in the `{"detail": ...}` shape clients of the image API expect.
    pub fn detail(&self) -> serde_json::Value {
        match self {
            AppError::InvalidQueryParameter {
                field,
                value,
                reason,
            } => json!({
                "detail": [{
                    "loc": ["query", field],
                    "msg": reason,
                    "type": "literal_error",
                    "input": value,
                }]
            }),
            other => json!({ "detail": other.to_string() }),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("❌ Request failed: {}", self);
        } else {
            tracing::debug!("Rejected request: {}", self);
        }
        (status, Json(self.detail())).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_error_maps_to_unprocessable_entity() {
        let err = AppError::InvalidQueryParameter {
            field: "pack".to_string(),
            value: "5".to_string(),
            reason: "Input should be 3, 4 or 6".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = err.detail();
        assert_eq!(body["detail"][0]["loc"][1], "pack");
        assert_eq!(body["detail"][0]["input"], "5");
        assert_eq!(body["detail"][0]["type"], "literal_error");
    }

    #[test]
    fn test_config_error_is_server_error() {
        let err = AppError::ConfigError {
            message: "broken".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.detail()["detail"], "Configuration error: broken");
    }
}
