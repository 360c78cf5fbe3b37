use crate::dto::{
    player_dto::PlayerRecord,
    roster_dto::{ResolvedPick, TransferSuggestions},
};

pub const DROP_BELOW_POINTS: f64 = 3.0;
pub const ACQUIRE_ABOVE_POINTS: f64 = 5.0;
pub const ACQUIRE_LIMIT: usize = 10;

/// Acquire candidates are not filtered against the current roster.
pub fn suggest(picks: &[ResolvedPick], players: &[PlayerRecord]) -> TransferSuggestions {
    let drop = picks
        .iter()
        .filter_map(ResolvedPick::player)
        .filter(|p| p.expected_points() < DROP_BELOW_POINTS || !p.is_available())
        .cloned()
        .collect();

    TransferSuggestions { drop, acquire: top_acquisitions(players) }
}

fn top_acquisitions(players: &[PlayerRecord]) -> Vec<PlayerRecord> {
    let mut candidates: Vec<&PlayerRecord> = players
        .iter()
        .filter(|p| p.is_available() && p.expected_points() > ACQUIRE_ABOVE_POINTS)
        .collect();

    // sort_by is stable, so equal scores keep dataset order.
    candidates.sort_by(|a, b| b.expected_points().total_cmp(&a.expected_points()));
    candidates.into_iter().take(ACQUIRE_LIMIT).cloned().collect()
}
