use crate::utils::error::{PantryError, Result};
use chrono::NaiveDate;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(PantryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(PantryError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(PantryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PantryError::InvalidConfigValueError {
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
        return Err(PantryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(field_name: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|source| PantryError::DateError {
        field: field_name.to_string(),
        value: value.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("product_lookup.endpoint", "https://example.com").is_ok());
        assert!(validate_url("product_lookup.endpoint", "http://example.com").is_ok());
        assert!(validate_url("product_lookup.endpoint", "").is_err());
        assert!(validate_url("product_lookup.endpoint", "invalid-url").is_err());
        assert!(validate_url("product_lookup.endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("recipes.max_results", 10, 1, 100).is_ok());
        assert!(validate_range("recipes.max_results", 0, 1, 100).is_err());
        assert!(validate_range("recipes.max_results", 101, 1, 100).is_err());
    }

    #[test]
    fn test_parse_date() {
        let date = parse_date("expiry_date", " 2024-09-20 ").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 9, 20).unwrap());
        assert!(parse_date("expiry_date", "2024-02-30").is_err());
        assert!(parse_date("expiry_date", "").is_err());
        assert!(validate_non_empty_string("name", "   ").is_err());
    }
}
