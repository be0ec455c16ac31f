use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;

use crate::db::market_repo;
use crate::errors::AppError;
use crate::models::{GetMarketsParams, MarketId};
use crate::AppState;

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

/// GET /api/markets: market ids matching the filter, in sort order
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<GetMarketsParams>,
) -> Result<Json<ApiResponse<Vec<MarketId>>>, AppError> {
    params.validate(state.config.max_page_size)?;

    let market_ids = market_repo::get_markets(&state.db, state.search.as_deref(), &params).await?;

    Ok(Json(ApiResponse {
        success: true,
        data: Some(market_ids),
        error: None,
    }))
}
