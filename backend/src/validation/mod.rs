//! Input validation for long-weekend lookups.

pub mod rules;

pub use validator::Validate;

use crate::error::AppError;

/// A validated `(country, year)` lookup. The country code is upper-cased.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct LongWeekendLookup {
    #[validate(custom(function = "rules::validate_country_code"))]
    pub country_code: String,
    #[validate(range(min = 1900, max = 2100))]
    pub year: i32,
}

impl LongWeekendLookup {
    pub fn new(country_code: &str, year: i32) -> Result<Self, AppError> {
        let lookup = Self {
            country_code: country_code.trim().to_ascii_uppercase(),
            year,
        };
        lookup.validate()?;
        Ok(lookup)
    }
}
