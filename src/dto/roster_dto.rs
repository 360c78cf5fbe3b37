use crate::dto::player_dto::PlayerRecord;

/// Minimum number of lines a roster submission needs.
pub const MIN_ROSTER_SIZE: usize = 11;

/// A user's roster line resolved against the player snapshot.
#[derive(Debug, Clone)]
pub enum ResolvedPick {
    Found { input: String, player: PlayerRecord },
    NotFound { input: String },
}

impl ResolvedPick {
    pub fn input(&self) -> &str {
        match self {
            ResolvedPick::Found { input, .. } | ResolvedPick::NotFound { input } => input,
        }
    }

    pub fn player(&self) -> Option<&PlayerRecord> {
        match self {
            ResolvedPick::Found { player, .. } => Some(player),
            ResolvedPick::NotFound { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Leader {
    pub name: String,
    pub points: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaptaincyResult {
    pub captain: Option<Leader>,
    pub vice: Option<Leader>,
}

#[derive(Debug, Clone)]
pub struct ScoredPick {
    pub pick: ResolvedPick,
    pub points: f64,
}

#[derive(Debug, Clone)]
pub struct RosterReport {
    pub picks: Vec<ScoredPick>,
    pub captaincy: CaptaincyResult,
    pub total: f64,
}

#[derive(Debug, Clone, Default)]
pub struct TransferSuggestions {
    pub drop: Vec<PlayerRecord>,
    pub acquire: Vec<PlayerRecord>,
}
