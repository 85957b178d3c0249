use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use crate::services::{MatchStatsService, RankingsService};

pub mod matches;
pub mod rankings;

pub struct AppState {
    pub rankings: RankingsService,
    pub match_stats: MatchStatsService,
}

/// 200 with the payload, or a bare 404 when the provider sent nothing
fn found<T: Serialize>(payload: Option<T>) -> Response {
    match payload {
        Some(body) => Json(body).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// 200 with the payload, or 200 with no body when the provider sent nothing
fn ok_or_empty<T: Serialize>(payload: Option<T>) -> Response {
    match payload {
        Some(body) => Json(body).into_response(),
        None => StatusCode::OK.into_response(),
    }
}
