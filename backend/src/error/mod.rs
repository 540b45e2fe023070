use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::services::holiday_source::HolidaySourceError;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<Value>,
}

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Validation(Vec<String>),
    /// The holiday provider failed or answered with something unusable.
    BadGateway {
        code: &'static str,
        message: String,
        details: Option<Value>,
    },
    InternalServerError(anyhow::Error),
}

impl AppError {
    pub fn no_holiday_data(country_code: &str) -> Self {
        AppError::NotFound(format!("No holiday data for {}", country_code))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, code, details) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, "NOT_FOUND".to_string(), None),
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                msg,
                "BAD_REQUEST".to_string(),
                None,
            ),
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "Validation failed".to_string(),
                "VALIDATION_ERROR".to_string(),
                Some(serde_json::json!({ "errors": errors })),
            ),
            AppError::BadGateway {
                code,
                message,
                details,
            } => (StatusCode::BAD_GATEWAY, message, code.to_string(), details),
            AppError::InternalServerError(err) => {
                tracing::error!("Internal server error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    "INTERNAL_SERVER_ERROR".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
            code,
            details,
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalServerError(err)
    }
}

impl From<HolidaySourceError> for AppError {
    fn from(err: HolidaySourceError) -> Self {
        match err {
            HolidaySourceError::Unavailable { status } => AppError::BadGateway {
                code: "UPSTREAM_UNAVAILABLE",
                message: "Error fetching holidays".to_string(),
                details: Some(serde_json::json!({ "upstream_status": status })),
            },
            HolidaySourceError::Transport(err) => {
                tracing::warn!(error = %err, "Holiday provider unreachable");
                AppError::BadGateway {
                    code: "UPSTREAM_UNAVAILABLE",
                    message: "Error fetching holidays".to_string(),
                    details: None,
                }
            }
            err @ (HolidaySourceError::Decode(_) | HolidaySourceError::InvalidDate(_)) => {
                AppError::BadGateway {
                    code: "UPSTREAM_INVALID_PAYLOAD",
                    message: err.to_string(),
                    details: None,
                }
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let code = e.code.as_ref();
                    format!("{}: {}", field, code)
                })
            })
            .collect();
        messages.sort();
        AppError::Validation(messages)
    }
}
