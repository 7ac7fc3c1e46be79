use crate::utils::error::{LinkBioError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(LinkBioError::ValidationError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(LinkBioError::ValidationError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(LinkBioError::ValidationError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LinkBioError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

// Accepts #rgb and #rrggbb, the two forms the preview renderer understands.
pub fn validate_hex_color(field_name: &str, value: &str) -> Result<()> {
    let invalid = |reason: String| LinkBioError::ValidationError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason,
    };

    let digits = value
        .strip_prefix('#')
        .ok_or_else(|| invalid("Color must start with '#'".to_string()))?;

    if digits.len() != 3 && digits.len() != 6 {
        return Err(invalid(format!(
            "Expected 3 or 6 hex digits, got {}",
            digits.len()
        )));
    }

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid("Color contains non-hex characters".to_string()));
    }

    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(LinkBioError::ValidationError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(LinkBioError::ValidationError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}
