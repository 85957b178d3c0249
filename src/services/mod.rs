pub mod match_stats;
pub mod rankings;
pub mod server;

pub use match_stats::MatchStatsService;
pub use rankings::RankingsService;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::ApiError;

/// Decode a body that the provider may legitimately leave empty.
fn decode_optional<T: DeserializeOwned>(body: &str) -> Result<Option<T>, ApiError> {
    if body.trim().is_empty() {
        return Ok(None);
    }

    let value: Value = serde_json::from_str(body)?;
    if value.is_null() {
        return Ok(None);
    }

    Ok(Some(serde_json::from_value(value)?))
}
