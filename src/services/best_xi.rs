use crate::dto::player_dto::PlayerRecord;

pub const BEST_XI_SIZE: usize = 11;

/// League-wide lineup: available players with positive expected points,
/// optionally requiring a minimum chance of playing (missing chance counts
/// as fully fit).
pub fn rank(players: &[PlayerRecord], min_chance: Option<u8>) -> Vec<PlayerRecord> {
    let mut eligible: Vec<&PlayerRecord> = players
        .iter()
        .filter(|p| p.is_available() && p.expected_points() > 0.0)
        .filter(|p| match min_chance {
            Some(min) => p.chance_of_playing_next_round.unwrap_or(100) >= min,
            None => true,
        })
        .collect();

    eligible.sort_by(|a, b| b.expected_points().total_cmp(&a.expected_points()));
    eligible.into_iter().take(BEST_XI_SIZE).cloned().collect()
}
