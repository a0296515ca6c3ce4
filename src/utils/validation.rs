use crate::utils::error::{LayerError, Result};
use regex::Regex;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(LayerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(LayerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| LayerError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LayerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 驗證 properties 內的點分路徑，例如 `layer` 或 `meta.layer`
pub fn validate_property_path(field_name: &str, path: &str) -> Result<()> {
    validate_non_empty_string(field_name, path)?;

    if path.split('.').any(|segment| segment.is_empty()) {
        return Err(LayerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path segments cannot be empty".to_string(),
        });
    }
    Ok(())
}

pub fn validate_pattern(field_name: &str, pattern: &str) -> Result<()> {
    Regex::new(pattern).map_err(|e| LayerError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: pattern.to_string(),
        reason: format!("Invalid regular expression: {}", e),
    })?;
    Ok(())
}
