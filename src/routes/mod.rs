use axum::{Router, http::Uri, routing::get};

use crate::{error::AppError, state::AppState};

pub mod catalog;
pub mod customers;
pub mod doc;
pub mod health;
pub mod params;
pub mod patients;
pub mod prescriptions;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(patients::router())
        .merge(customers::router())
        .merge(prescriptions::router())
        .merge(catalog::router())
}

/// Full application router with state bound. Transport layers (tracing,
/// request ids, limits, CORS) are added by the binary.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", create_api_router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "no route matched");
    AppError::NotFound("Not Found".to_string())
}
