use axum::{
    http::{HeaderValue, Method},
    middleware as axum_middleware,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod validation;

use state::AppState;

/// Builds the HTTP application: JSON API, HTML form, docs and shared layers.
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_allow_origins);

    Router::new()
        .route("/", get(handlers::home::homepage))
        .route(
            "/long-weekends/{country_code}",
            get(handlers::long_weekends::get_long_weekends),
        )
        .route(
            "/next-long-weekend/{country_code}",
            get(handlers::long_weekends::get_next_long_weekend),
        )
        .route("/health", get(handlers::health::health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(axum_middleware::from_fn(middleware::request_id::request_id))
                .layer(TraceLayer::new_for_http())
                .layer(axum_middleware::from_fn(middleware::logging::log_error_responses))
                .layer(cors),
        )
        .with_state(state)
}

fn cors_layer(allow_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(24 * 60 * 60));

    let origins: Vec<HeaderValue> = allow_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}
