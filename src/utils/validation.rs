use crate::utils::error::{Result, ZooError};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ZooError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ZooError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, file: &str, allowed_extensions: &[&str]) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed_set.contains(extension) => Ok(()),
        Some(extension) => Err(ZooError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(ZooError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ZooError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ZooError::InvalidConfigValueError {
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
        return Err(ZooError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ZooError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("animals[0].name", "Лев").is_ok());
        assert!(validate_non_empty_string("animals[0].name", "").is_err());
        assert!(validate_non_empty_string("animals[0].name", "   ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("animals[0].age", 5i64, 0, u32::MAX as i64).is_ok());
        assert!(validate_range("animals[0].age", -1i64, 0, u32::MAX as i64).is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("animals[0].wing_span", 0.5).is_ok());
        assert!(validate_finite("animals[0].wing_span", f64::NAN).is_err());
        assert!(validate_finite("animals[0].wing_span", f64::INFINITY).is_err());
        // NaN slips through range checks on its own
        assert!(validate_range("animals[0].wing_span", f64::NAN, 0.0, f64::MAX).is_ok());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("inflector.lexicon", "extra.toml", &["toml"]).is_ok());
        assert!(validate_file_extension("inflector.lexicon", "extra.json", &["toml"]).is_err());
        assert!(validate_file_extension("inflector.lexicon", "extra", &["toml"]).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("золотой".to_string());
        let missing: Option<String> = None;
        assert_eq!(validate_required_field("fur_color", &present).unwrap(), "золотой");
        assert!(matches!(
            validate_required_field("fur_color", &missing),
            Err(ZooError::MissingConfigError { .. })
        ));
    }
}
