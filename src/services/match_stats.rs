use log::debug;
use std::sync::Arc;

use super::decode_optional;
use crate::cache::MemoStore;
use crate::config::settings::CacheSettings;
use crate::domain::models::MatchStats;
use crate::errors::ApiError;
use crate::http::{segment, Upstream};

const LIVE_MATCHES_PATH: &str = "/matches/live";

/// Match and tournament statistics.
///
/// Single-match and tournament stats are memoized per identifier. With the
/// default settings a memoized entry is never refreshed, so live scores
/// served from it can be arbitrarily stale.
///
/// `Ok(None)` means the provider returned an empty body. Absent results are
/// never memoized.
pub struct MatchStatsService {
    upstream: Arc<dyn Upstream>,
    live_matches: MemoStore<MatchStats>,
    tournament_stats: MemoStore<Vec<MatchStats>>,
}

impl MatchStatsService {
    pub fn new(upstream: Arc<dyn Upstream>, cache: &CacheSettings) -> Self {
        Self {
            upstream,
            live_matches: MemoStore::new("liveMatches", cache.ttl),
            tournament_stats: MemoStore::new("tournamentStats", cache.ttl),
        }
    }

    /// Matches currently in play. Never cached.
    pub async fn ongoing_matches(&self) -> Result<Option<Vec<MatchStats>>, ApiError> {
        let body = self.upstream.get(LIVE_MATCHES_PATH, &[]).await?;
        decode_optional(&body)
    }

    /// Stats for one match; memoized unless `match_id` is empty
    pub async fn live_match_stats(&self, match_id: &str) -> Result<Option<MatchStats>, ApiError> {
        let cacheable = !match_id.is_empty();

        if cacheable {
            if let Some(hit) = self.lookup(&self.live_matches, match_id) {
                return Ok(Some(hit));
            }
        }

        let path = format!("/matches/{}/stats", segment(match_id));
        let body = self.upstream.get(&path, &[]).await?;
        let stats: Option<MatchStats> = decode_optional(&body)?;

        if let Some(stats) = stats.as_ref().filter(|_| cacheable) {
            self.live_matches.put_if_absent(match_id, stats.clone());
        }
        Ok(stats)
    }

    /// Stats for every match of a tournament; memoized for any id
    pub async fn tournament_stats(
        &self,
        tournament_id: &str,
    ) -> Result<Option<Vec<MatchStats>>, ApiError> {
        if let Some(hit) = self.lookup(&self.tournament_stats, tournament_id) {
            return Ok(Some(hit));
        }

        let path = format!("/tournaments/{}/stats", segment(tournament_id));
        let body = self.upstream.get(&path, &[]).await?;
        let stats: Option<Vec<MatchStats>> = decode_optional(&body)?;

        if let Some(stats) = &stats {
            self.tournament_stats.put_if_absent(tournament_id, stats.clone());
        }
        Ok(stats)
    }

    fn lookup<V: Clone>(&self, store: &MemoStore<V>, key: &str) -> Option<V> {
        let hit = store.get(key);
        debug!(
            "{} cache {} for {:?}",
            store.name(),
            if hit.is_some() { "hit" } else { "miss" },
            key
        );
        hit
    }
}
