use std::time::Duration;

use axum::{
    Router,
    http::{StatusCode, Uri},
    middleware::map_response,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::timeout::TimeoutLayer;

use crate::{
    error::AppError,
    state::AppState,
};

pub mod doc;
pub mod health;
pub mod params;
pub mod products;
pub mod users;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/products", products::router())
        .nest("/users", users::router())
}

/// Full application router with state bound, without transport layers.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .nest("/api", create_api_router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    tracing::debug!(path = uri.path(), "no route");
    AppError::NotFound("Not Found".to_string())
}

/// Bounds request duration; timed-out requests get a 408 with the usual error body.
pub fn with_request_timeout(app: Router, timeout: Duration) -> Router {
    app.layer(TimeoutLayer::with_status_code(
        StatusCode::REQUEST_TIMEOUT,
        timeout,
    ))
    .layer(map_response(timeout_body))
}

// The timeout layer answers with an empty body.
async fn timeout_body(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        tracing::warn!("request timed out");
        return AppError::Timeout.into_response();
    }
    response
}
