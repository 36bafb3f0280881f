pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::errors::AppError;
use crate::market::handlers::handle_market_insights;
use crate::state::AppState;

/// Resumes are small; anything past this is not a resume.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume analysis
        .route(
            "/api/v1/resumes/analyze",
            post(handlers::handle_analyze).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/api/v1/resumes/score", post(handlers::handle_score))
        // Market reference data
        .route("/api/v1/market", get(handle_market_insights))
        .fallback(not_found)
        .with_state(state)
}
