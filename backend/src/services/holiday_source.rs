//! Public holiday provider used to feed the long-weekend scan.

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
    time::Duration,
};

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::{
    config::Config,
    models::holiday::PublicHoliday,
    utils::time::{parse_holiday_date, InvalidDate},
};

/// Outcome of a successful provider call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HolidayFetch {
    Holidays(Vec<PublicHoliday>),
    /// The provider knows nothing for this country/year.
    NoData,
}

#[derive(Debug, Error)]
pub enum HolidaySourceError {
    #[error("holiday provider responded with status {status}")]
    Unavailable { status: u16 },
    #[error("failed to reach holiday provider: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("failed to decode holiday payload: {0}")]
    Decode(String),
    #[error("holiday payload contains an {0}")]
    InvalidDate(#[from] InvalidDate),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HolidaySource: Send + Sync {
    async fn public_holidays(
        &self,
        country_code: &str,
        year: i32,
    ) -> Result<HolidayFetch, HolidaySourceError>;
}

/// Fetches holiday dates for `(country_code, year)`, normalized to plain dates.
///
/// `Ok(None)` is the provider's "no data" answer. A record with an unparseable
/// date fails the whole fetch.
pub async fn fetch_holiday_dates(
    source: &dyn HolidaySource,
    country_code: &str,
    year: i32,
) -> Result<Option<HashSet<NaiveDate>>, HolidaySourceError> {
    match source.public_holidays(country_code, year).await? {
        HolidayFetch::Holidays(records) => Ok(Some(holiday_dates(&records)?)),
        HolidayFetch::NoData => Ok(None),
    }
}

pub fn holiday_dates(records: &[PublicHoliday]) -> Result<HashSet<NaiveDate>, InvalidDate> {
    records
        .iter()
        .map(|record| parse_holiday_date(&record.date))
        .collect()
}

/// Client for the Nager.Date `PublicHolidays/{year}/{country}` endpoint.
#[derive(Clone)]
pub struct NagerHolidaySource {
    client: Client,
    base_url: String,
}

impl NagerHolidaySource {
    pub fn new(config: &Config) -> Result<Self, HolidaySourceError> {
        let client = Client::builder()
            .user_agent(config.holiday_api_user_agent.clone())
            .timeout(Duration::from_secs(config.holiday_api_timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: config.holiday_api_url.clone(),
        })
    }

    fn url_for(&self, country_code: &str, year: i32) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            year,
            country_code.to_ascii_uppercase()
        )
    }
}

#[async_trait]
impl HolidaySource for NagerHolidaySource {
    async fn public_holidays(
        &self,
        country_code: &str,
        year: i32,
    ) -> Result<HolidayFetch, HolidaySourceError> {
        let url = self.url_for(country_code, year);
        tracing::debug!(url = %url, "Fetching public holidays");

        let response = self.client.get(&url).send().await.map_err(|err| {
            tracing::warn!(url = %url, error = %err, "Holiday provider request failed");
            HolidaySourceError::Transport(err)
        })?;
        let status = response.status();
        let body = response.bytes().await?;

        let outcome = classify_response(status, &body);
        if let Err(err) = &outcome {
            tracing::warn!(url = %url, status = status.as_u16(), error = %err, "Holiday provider returned an unusable response");
        }
        outcome
    }
}

/// Maps a provider response to the tagged fetch outcome.
///
/// 204 and 404 mean "no data"; any other non-success status is a failure and
/// never an empty holiday list.
pub fn classify_response(status: StatusCode, body: &[u8]) -> Result<HolidayFetch, HolidaySourceError> {
    match status {
        StatusCode::NO_CONTENT | StatusCode::NOT_FOUND => Ok(HolidayFetch::NoData),
        status if status.is_success() => {
            let records: Vec<PublicHoliday> = serde_json::from_slice(body)
                .map_err(|err| HolidaySourceError::Decode(err.to_string()))?;
            if records.is_empty() {
                Ok(HolidayFetch::NoData)
            } else {
                Ok(HolidayFetch::Holidays(records))
            }
        }
        status => Err(HolidaySourceError::Unavailable {
            status: status.as_u16(),
        }),
    }
}

#[derive(Debug, Clone)]
enum StubEntry {
    Holidays(Vec<PublicHoliday>),
    Status(u16),
}

/// In-memory provider keyed by `(country, year)`.
///
/// Unknown keys answer with [`HolidayFetch::NoData`].
#[derive(Debug, Clone, Default)]
pub struct HolidaySourceStub {
    entries: Arc<HashMap<(String, i32), StubEntry>>,
}

impl HolidaySourceStub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_holidays(
        self,
        country_code: &str,
        year: i32,
        holidays: impl IntoIterator<Item = PublicHoliday>,
    ) -> Self {
        self.with_entry(
            country_code,
            year,
            StubEntry::Holidays(holidays.into_iter().collect()),
        )
    }

    pub fn with_dates<'a>(
        self,
        country_code: &str,
        year: i32,
        dates: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let holidays = dates
            .into_iter()
            .map(|date| PublicHoliday::new(date, "Public holiday"));
        self.with_holidays(country_code, year, holidays)
    }

    /// Makes the provider fail with `status` for this key.
    pub fn with_status(self, country_code: &str, year: i32, status: u16) -> Self {
        self.with_entry(country_code, year, StubEntry::Status(status))
    }

    fn with_entry(self, country_code: &str, year: i32, entry: StubEntry) -> Self {
        let mut entries = Arc::unwrap_or_clone(self.entries);
        entries.insert((country_code.to_ascii_uppercase(), year), entry);
        Self {
            entries: Arc::new(entries),
        }
    }
}

#[async_trait]
impl HolidaySource for HolidaySourceStub {
    async fn public_holidays(
        &self,
        country_code: &str,
        year: i32,
    ) -> Result<HolidayFetch, HolidaySourceError> {
        match self.entries.get(&(country_code.to_ascii_uppercase(), year)) {
            Some(StubEntry::Holidays(records)) if !records.is_empty() => {
                Ok(HolidayFetch::Holidays(records.clone()))
            }
            Some(StubEntry::Holidays(_)) | None => Ok(HolidayFetch::NoData),
            Some(StubEntry::Status(status)) => {
                let status = StatusCode::from_u16(*status)
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                classify_response(status, b"[]")
            }
        }
    }
}
