use axum::{extract::State, Json};

use crate::market::{build_insights, MarketInsights};
use crate::state::AppState;

/// GET /api/v1/market
pub async fn handle_market_insights(State(state): State<AppState>) -> Json<MarketInsights> {
    Json(build_insights(&state.market))
}
