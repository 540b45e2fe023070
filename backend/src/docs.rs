#![allow(dead_code)] // OpenAPI doc stubs are only referenced by utoipa macros.

use crate::{
    error::ErrorResponse,
    handlers::{health::HealthResponse, long_weekends::LongWeekendsQuery},
    models::{
        holiday::PublicHoliday,
        long_weekend::{LongWeekendWindow, LongWeekendsResponse, NextLongWeekendResponse},
    },
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Long Weekend API Service",
        description = "Returns long weekends for a given country and year"
    ),
    paths(long_weekends_doc, next_long_weekend_doc, health_doc),
    components(
        schemas(
            LongWeekendWindow,
            LongWeekendsResponse,
            NextLongWeekendResponse,
            LongWeekendsQuery,
            PublicHoliday,
            HealthResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "LongWeekends", description = "Long weekend lookups by country"),
        (name = "System", description = "Service health")
    )
)]
pub struct ApiDoc;

#[utoipa::path(
    get,
    path = "/long-weekends/{country_code}",
    params(
        ("country_code" = String, Path, description = "ISO 3166-1 alpha-2 country code"),
        LongWeekendsQuery
    ),
    responses(
        (status = 200, description = "Long weekends of the year", body = LongWeekendsResponse),
        (status = 400, description = "Invalid country code or year", body = ErrorResponse),
        (status = 404, description = "No holiday data for the country", body = ErrorResponse),
        (status = 502, description = "Holiday provider failed", body = ErrorResponse)
    ),
    tag = "LongWeekends"
)]
fn long_weekends_doc() {}

#[utoipa::path(
    get,
    path = "/next-long-weekend/{country_code}",
    params(
        ("country_code" = String, Path, description = "ISO 3166-1 alpha-2 country code")
    ),
    responses(
        (status = 200, description = "Next upcoming long weekend, or a message when none is left", body = NextLongWeekendResponse),
        (status = 400, description = "Invalid country code", body = ErrorResponse),
        (status = 404, description = "No holiday data for the country", body = ErrorResponse),
        (status = 502, description = "Holiday provider failed", body = ErrorResponse)
    ),
    tag = "LongWeekends"
)]
fn next_long_weekend_doc() {}

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse)),
    tag = "System"
)]
fn health_doc() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_long_weekend_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/long-weekends/{country_code}"));
        assert!(doc.paths.paths.contains_key("/next-long-weekend/{country_code}"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
