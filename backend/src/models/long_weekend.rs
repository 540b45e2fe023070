use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use utoipa::ToSchema;

/// An inclusive run of non-working days anchored on a Friday or Saturday.
///
/// Identity is the `(start, end)` pair; `length` is derived from it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct LongWeekendWindow {
    #[serde(rename = "start_date")]
    #[schema(value_type = String, format = Date, example = "2024-05-31")]
    pub start: NaiveDate,
    #[serde(rename = "end_date")]
    #[schema(value_type = String, format = Date, example = "2024-06-03")]
    pub end: NaiveDate,
    #[schema(example = 4)]
    pub length: u32,
}

impl LongWeekendWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start <= end, "window must not end before it starts");
        let length = (end - start).num_days() as u32 + 1;
        Self { start, end, length }
    }

    pub fn key(&self) -> (NaiveDate, NaiveDate) {
        (self.start, self.end)
    }
}

impl PartialEq for LongWeekendWindow {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for LongWeekendWindow {}

impl Hash for LongWeekendWindow {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LongWeekendsResponse {
    pub year: i32,
    pub country: String,
    pub long_weekends: Vec<LongWeekendWindow>,
}

/// Body of `GET /next-long-weekend/{country_code}`.
///
/// Serializes to either `{"next_long_weekend": {...}}` or `{"message": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum NextLongWeekendResponse {
    Found {
        next_long_weekend: LongWeekendWindow,
    },
    NoneUpcoming {
        message: String,
    },
}

pub const NO_UPCOMING_MESSAGE: &str = "No upcoming long weekends found";

impl From<Option<LongWeekendWindow>> for NextLongWeekendResponse {
    fn from(value: Option<LongWeekendWindow>) -> Self {
        match value {
            Some(next_long_weekend) => NextLongWeekendResponse::Found { next_long_weekend },
            None => NextLongWeekendResponse::NoneUpcoming {
                message: NO_UPCOMING_MESSAGE.to_string(),
            },
        }
    }
}
