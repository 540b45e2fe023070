use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::AppError,
    models::long_weekend::{LongWeekendWindow, LongWeekendsResponse, NextLongWeekendResponse},
    services::{
        holiday_source::{fetch_holiday_dates, HolidaySource, HolidaySourceError},
        long_weekend,
    },
    state::AppState,
    utils::time,
    validation::LongWeekendLookup,
};

#[derive(Debug, Default, Deserialize, Serialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct LongWeekendsQuery {
    /// Calendar year to scan; defaults to the current year.
    pub year: Option<i32>,
}

/// Fetches the country's holidays and scans them for long weekends.
///
/// `Ok(None)` means the provider has no data for the lookup.
pub async fn long_weekends_for(
    source: &dyn HolidaySource,
    lookup: &LongWeekendLookup,
) -> Result<Option<Vec<LongWeekendWindow>>, HolidaySourceError> {
    let Some(holidays) = fetch_holiday_dates(source, &lookup.country_code, lookup.year).await? else {
        tracing::info!(
            country = %lookup.country_code,
            year = lookup.year,
            "No holiday data for lookup"
        );
        return Ok(None);
    };

    let windows = long_weekend::sorted(long_weekend::scan(&holidays, lookup.year));
    tracing::debug!(
        country = %lookup.country_code,
        year = lookup.year,
        holidays = holidays.len(),
        windows = windows.len(),
        "Scanned long weekends"
    );
    Ok(Some(windows))
}

pub async fn get_long_weekends(
    State(state): State<AppState>,
    Path(country_code): Path<String>,
    query: Result<Query<LongWeekendsQuery>, QueryRejection>,
) -> Result<Json<LongWeekendsResponse>, AppError> {
    let Query(query) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let year = query
        .year
        .unwrap_or_else(|| time::current_year(&state.config.time_zone));
    let lookup = LongWeekendLookup::new(&country_code, year)?;

    let long_weekends = long_weekends_for(state.holiday_source.as_ref(), &lookup)
        .await?
        .ok_or_else(|| AppError::no_holiday_data(&lookup.country_code))?;

    Ok(Json(LongWeekendsResponse {
        year: lookup.year,
        country: lookup.country_code,
        long_weekends,
    }))
}

pub async fn get_next_long_weekend(
    State(state): State<AppState>,
    Path(country_code): Path<String>,
) -> Result<Json<NextLongWeekendResponse>, AppError> {
    let today = state.today();
    let lookup = LongWeekendLookup::new(&country_code, today.year())?;

    let windows = long_weekends_for(state.holiday_source.as_ref(), &lookup)
        .await?
        .ok_or_else(|| AppError::no_holiday_data(&lookup.country_code))?;

    Ok(Json(long_weekend::select_next(&windows, today).into()))
}
