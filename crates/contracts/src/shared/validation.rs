use thiserror::Error;

/// Synchronous form validation failure, shown to the user before submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: u64,
        max: u64,
    },
    #[error("{field} is not a valid number")]
    NotANumber { field: &'static str },
    #[error("{0}")]
    Invalid(String),
}

pub fn require(value: &Option<String>, field: &'static str) -> Result<String, FormError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(FormError::Required(field)),
    }
}

pub fn require_str(value: &str, field: &'static str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FormError::Required(field))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Parses a quantity typed into a text input and checks it against `min..=max`.
pub fn parse_in_range(
    raw: &str,
    field: &'static str,
    min: u64,
    max: u64,
) -> Result<u64, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FormError::Required(field));
    }
    let value = trimmed
        .parse::<u64>()
        .map_err(|_| FormError::NotANumber { field })?;
    if value < min || value > max {
        return Err(FormError::OutOfRange { field, min, max });
    }
    Ok(value)
}

/// Indian mobile number: ten digits after stripping separators and a `+91`/`0` prefix.
pub fn normalize_phone(raw: &str) -> Result<String, FormError> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let digits = if digits.len() == 12 && digits.starts_with("91") {
        digits[2..].to_string()
    } else if digits.len() == 11 && digits.starts_with('0') {
        digits[1..].to_string()
    } else {
        digits
    };
    if digits.len() != 10 {
        return Err(FormError::Invalid(
            "Phone number must contain 10 digits".to_string(),
        ));
    }
    Ok(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_in_range() {
        assert_eq!(parse_in_range(" 12 ", "Quantity", 1, 100), Ok(12));
        assert_eq!(
            parse_in_range("", "Quantity", 1, 100),
            Err(FormError::Required("Quantity"))
        );
        assert_eq!(
            parse_in_range("abc", "Quantity", 1, 100),
            Err(FormError::NotANumber { field: "Quantity" })
        );
        assert_eq!(
            parse_in_range("0", "Quantity", 1, 100),
            Err(FormError::OutOfRange {
                field: "Quantity",
                min: 1,
                max: 100
            })
        );
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("98765 43210").unwrap(), "9876543210");
        assert_eq!(normalize_phone("+91-98765-43210").unwrap(), "9876543210");
        assert_eq!(normalize_phone("09876543210").unwrap(), "9876543210");
        assert!(normalize_phone("12345").is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FormError::Required("Brand").to_string(), "Brand is required");
        assert_eq!(
            FormError::OutOfRange {
                field: "Quantity",
                min: 1,
                max: 10
            }
            .to_string(),
            "Quantity must be between 1 and 10"
        );
    }
}
