use crate::utils::error::{AppError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// A CORS origin is a bare `scheme://host[:port]` with no path, query or fragment.
pub fn validate_origin(field_name: &str, origin: &str) -> Result<()> {
    let invalid = |reason: String| AppError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: origin.to_string(),
        reason,
    };

    if origin.is_empty() {
        return Err(invalid("Origin cannot be empty".to_string()));
    }

    let url = Url::parse(origin).map_err(|e| invalid(format!("Invalid origin format: {}", e)))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => return Err(invalid(format!("Unsupported origin scheme: {}", scheme))),
    }

    if url.path() != "/" || url.query().is_some() || url.fragment().is_some() || origin.ends_with('/')
    {
        return Err(invalid(
            "Origin must not carry a path, query or trailing slash".to_string(),
        ));
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
