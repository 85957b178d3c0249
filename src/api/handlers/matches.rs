use axum::{
    extract::{Path, State},
    response::Response,
};
use std::sync::Arc;

use super::{ok_or_empty, AppState};
use crate::errors::ApiError;

pub async fn get_live_matches(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let matches = state.match_stats.ongoing_matches().await?;
    Ok(ok_or_empty(matches))
}

pub async fn get_live_match_stats(
    State(state): State<Arc<AppState>>,
    Path(match_id): Path<String>,
) -> Result<Response, ApiError> {
    let stats = state.match_stats.live_match_stats(&match_id).await?;
    Ok(ok_or_empty(stats))
}

pub async fn get_tournament_stats(
    State(state): State<Arc<AppState>>,
    Path(tournament_id): Path<String>,
) -> Result<Response, ApiError> {
    let stats = state.match_stats.tournament_stats(&tournament_id).await?;
    Ok(ok_or_empty(stats))
}
