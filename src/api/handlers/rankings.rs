use axum::{
    extract::{Path, Query, State},
    response::Response,
};
use serde::Deserialize;
use std::sync::Arc;

use super::{found, AppState};
use crate::errors::ApiError;

#[derive(Deserialize)]
pub struct SearchParams {
    query: Option<String>,
}

pub async fn get_wta_rankings(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let rankings = state.rankings.wta_rankings().await?;
    Ok(found(rankings))
}

pub async fn search_tennis_data(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Response, ApiError> {
    let query = params
        .query
        .ok_or_else(|| ApiError::BadRequest("Required parameter 'query' is missing".to_string()))?;

    let results = state.rankings.search(&query).await?;
    Ok(found(results))
}

pub async fn get_player_details(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<String>,
) -> Result<Response, ApiError> {
    let details = state.rankings.player_details(&player_id).await?;
    Ok(found(details))
}

pub async fn get_tournament_calendar(
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let calendar = state.rankings.tournament_calendar().await?;
    Ok(found(calendar))
}
