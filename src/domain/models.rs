use serde::{Deserialize, Deserializer, Serialize};

/// One row of the live WTA ranking table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    pub rank: Option<u32>,
    pub player_name: Option<String>,
    pub country: Option<String>,
    pub points: Option<i64>,
    pub tournaments_played: Option<i32>,
    /// Provider-formatted, kept verbatim
    pub points_to_defend: Option<String>,
}

/// Snapshot of a match as reported by the provider.
///
/// Absent and `null` fields both decode to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchStats {
    #[serde(deserialize_with = "null_as_default")]
    pub match_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tournament_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub player1_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub player2_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub player1_score: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub player2_score: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub current_set: String,
    #[serde(deserialize_with = "null_as_default")]
    pub current_game: String,
    #[serde(deserialize_with = "null_as_default")]
    pub player1_stats: PlayerStatDetails,
    #[serde(deserialize_with = "null_as_default")]
    pub player2_stats: PlayerStatDetails,
}

/// Per-player counters inside a [`MatchStats`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerStatDetails {
    #[serde(deserialize_with = "null_as_default")]
    pub aces: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub double_faults: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub first_serve_percentage: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub winning_on_first_serve: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub winning_on_second_serve: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub break_points_converted: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub net_points_won: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub total_points_won: u32,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
