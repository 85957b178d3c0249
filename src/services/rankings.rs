use log::{debug, info};
use serde_json::Value;
use std::sync::Arc;

use super::decode_optional;
use crate::domain::models::RankingEntry;
use crate::errors::ApiError;
use crate::http::{segment, Upstream};

const WTA_RANKINGS_PATH: &str = "/tennis/rankings/wta/live";
const SEARCH_PATH: &str = "/tennis/search";
const CALENDAR_PATH: &str = "/tennis/calendar";

/// Rankings, search, player and calendar pass-through reads.
///
/// Each operation is a single upstream GET. `Ok(None)` means the provider
/// returned an empty body.
pub struct RankingsService {
    upstream: Arc<dyn Upstream>,
}

impl RankingsService {
    pub fn new(upstream: Arc<dyn Upstream>) -> Self {
        Self { upstream }
    }

    /// Live WTA table, in provider order
    pub async fn wta_rankings(&self) -> Result<Option<Vec<RankingEntry>>, ApiError> {
        let body = self.upstream.get(WTA_RANKINGS_PATH, &[]).await?;
        let rankings: Option<Vec<RankingEntry>> = decode_optional(&body)?;

        if let Some(rows) = &rankings {
            info!("Fetched {} WTA ranking entries", rows.len());
        }
        Ok(rankings)
    }

    pub async fn search(&self, query: &str) -> Result<Option<Vec<Value>>, ApiError> {
        debug!("Searching tennis data for {:?}", query);
        let body = self.upstream.get(SEARCH_PATH, &[("q", query)]).await?;
        decode_optional(&body)
    }

    pub async fn player_details(&self, player_id: &str) -> Result<Option<Value>, ApiError> {
        let path = format!("/tennis/player/{}", segment(player_id));
        let body = self.upstream.get(&path, &[]).await?;
        decode_optional(&body)
    }

    pub async fn tournament_calendar(&self) -> Result<Option<Value>, ApiError> {
        let body = self.upstream.get(CALENDAR_PATH, &[]).await?;
        decode_optional(&body)
    }
}
