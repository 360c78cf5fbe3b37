use serde::{Deserialize, Serialize};

use crate::dto::player_dto::PlayerRecord;

/// One element of `bootstrap-static`'s `teams` array.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TeamRecord {
    pub id: i64,
    pub name: String,
    pub short_name: String,
}

/// The parts of `bootstrap-static` the bot reads.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Bootstrap {
    pub elements: Vec<PlayerRecord>,
    #[serde(default)]
    pub teams: Vec<TeamRecord>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Fixture {
    pub id: i64,
    pub event: Option<i64>,
    pub team_h: i64,
    pub team_a: i64,
    #[serde(default)]
    pub kickoff_time: Option<String>,
}
