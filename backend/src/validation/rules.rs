//! Common validation rules shared across request inputs.

use validator::ValidationError;

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

/// Validates an ISO 3166-1 alpha-2 country code.
///
/// Requirements:
/// - Exactly two ASCII letters (case is normalized by the caller)
pub fn validate_country_code(country_code: &str) -> Result<(), ValidationError> {
    if country_code.len() != 2 {
        return Err(ValidationError::new("country_code_invalid_length"));
    }

    if !country_code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::new("country_code_invalid_characters"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_code_rejects_empty() {
        assert!(validate_country_code("").is_err());
    }

    #[test]
    fn country_code_rejects_wrong_length() {
        let err = validate_country_code("GBR").unwrap_err();
        assert_eq!(err.code, "country_code_invalid_length");
    }

    #[test]
    fn country_code_rejects_non_letters() {
        let err = validate_country_code("G1").unwrap_err();
        assert_eq!(err.code, "country_code_invalid_characters");
        assert!(validate_country_code("é").is_err());
    }

    #[test]
    fn country_code_accepts_valid() {
        assert!(validate_country_code("GB").is_ok());
        assert!(validate_country_code("us").is_ok());
    }
}
