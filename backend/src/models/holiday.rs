use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A public holiday record as returned by the Nager.Date `PublicHolidays` endpoint.
///
/// Only `date` is consumed by the long-weekend scan; the rest is carried so the
/// record round-trips without loss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicHoliday {
    #[schema(example = "2024-05-31")]
    pub date: String,
    #[serde(default)]
    pub local_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub fixed: Option<bool>,
    #[serde(default)]
    pub global: Option<bool>,
    #[serde(default)]
    pub counties: Option<Vec<String>>,
    #[serde(default)]
    pub launch_year: Option<i32>,
    #[serde(default)]
    pub types: Vec<String>,
}

impl PublicHoliday {
    pub fn new(date: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            date: date.into(),
            local_name: Some(name.clone()),
            name: Some(name),
            country_code: None,
            fixed: None,
            global: Some(true),
            counties: None,
            launch_year: None,
            types: vec!["Public".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_nager_record() {
        let raw = r#"{
            "date": "2024-12-25",
            "localName": "Christmas Day",
            "name": "Christmas Day",
            "countryCode": "GB",
            "fixed": false,
            "global": true,
            "counties": null,
            "launchYear": null,
            "types": ["Public"]
        }"#;

        let holiday: PublicHoliday = serde_json::from_str(raw).unwrap();
        assert_eq!(holiday.date, "2024-12-25");
        assert_eq!(holiday.country_code.as_deref(), Some("GB"));
        assert_eq!(holiday.types, vec!["Public".to_string()]);
        assert!(holiday.counties.is_none());
    }

    #[test]
    fn deserializes_record_with_only_a_date() {
        let holiday: PublicHoliday = serde_json::from_str(r#"{"date":"2024-01-01"}"#).unwrap();
        assert_eq!(holiday.date, "2024-01-01");
        assert!(holiday.name.is_none());
        assert!(holiday.types.is_empty());
    }
}
