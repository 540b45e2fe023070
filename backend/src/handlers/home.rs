//! Server-rendered form for browsing long weekends without the JSON API.

use std::str::FromStr;

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use chrono::Datelike;
use serde::Deserialize;

use crate::{
    error::AppError,
    handlers::long_weekends::long_weekends_for,
    models::long_weekend::LongWeekendWindow,
    services::{holiday_source::HolidaySourceError, long_weekend},
    state::AppState,
    validation::LongWeekendLookup,
};

#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    pub country_code: Option<String>,
    pub action: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeAction {
    All,
    Next,
}

impl FromStr for HomeAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(HomeAction::All),
            "next" => Ok(HomeAction::Next),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq, Template)]
#[template(path = "index.html")]
pub struct HomePage {
    pub country_code: Option<String>,
    pub long_weekends: Vec<LongWeekendWindow>,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl HomePage {
    fn error(country_code: Option<String>, error: String) -> Self {
        Self {
            country_code,
            error: Some(error),
            ..Self::default()
        }
    }

    fn message(country_code: Option<String>, message: &str) -> Self {
        Self {
            country_code,
            message: Some(message.to_string()),
            ..Self::default()
        }
    }
}

pub async fn homepage(
    State(state): State<AppState>,
    Query(query): Query<HomeQuery>,
) -> Result<Html<String>, AppError> {
    let country_code = non_empty(query.country_code);
    let action = non_empty(query.action);

    let page = match (country_code, action) {
        (Some(country_code), Some(action)) => build_page(&state, country_code, &action).await,
        (country_code, _) => HomePage {
            country_code,
            ..HomePage::default()
        },
    };

    page.render().map(Html).map_err(|err| {
        tracing::error!("Failed to render home page template: {:?}", err);
        AppError::InternalServerError(anyhow::anyhow!("Failed to render page"))
    })
}

async fn build_page(state: &AppState, country_code: String, action: &str) -> HomePage {
    let display_code = country_code.trim().to_ascii_uppercase();

    let Ok(action) = action.parse::<HomeAction>() else {
        return HomePage::error(Some(display_code), format!("Unknown action '{}'", action));
    };

    let today = state.today();
    let Ok(lookup) = LongWeekendLookup::new(&country_code, today.year()) else {
        return HomePage::error(
            Some(display_code.clone()),
            format!("Invalid country code '{}'", display_code),
        );
    };

    let windows = match long_weekends_for(state.holiday_source.as_ref(), &lookup).await {
        Ok(Some(windows)) => windows,
        Ok(None) => {
            return HomePage::error(
                Some(display_code),
                format!("No holiday data for '{}'", lookup.country_code),
            )
        }
        Err(err) => return HomePage::error(Some(display_code), fetch_error_message(&err)),
    };

    let selected = match action {
        HomeAction::All => windows,
        HomeAction::Next => long_weekend::select_next(&windows, today)
            .into_iter()
            .collect(),
    };

    if selected.is_empty() {
        let message = match action {
            HomeAction::All => "No long weekends found.",
            HomeAction::Next => "No upcoming long weekends.",
        };
        return HomePage::message(Some(display_code), message);
    }

    HomePage {
        country_code: Some(display_code),
        long_weekends: selected,
        ..HomePage::default()
    }
}

fn fetch_error_message(err: &HolidaySourceError) -> String {
    match err {
        HolidaySourceError::Unavailable { status } => {
            format!("Error fetching holidays (status {})", status)
        }
        HolidaySourceError::Transport(_) => {
            "Error fetching holidays (provider unreachable)".to_string()
        }
        other => format!("Unexpected error: {}", other),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
