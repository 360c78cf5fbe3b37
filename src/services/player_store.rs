use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::dto::{player_dto::PlayerRecord, team_dto::TeamRecord};
use crate::error::BotResult;
use crate::services::fpl_client::PlayerSource;

/// Immutable view of the reference data at one point in time.
#[derive(Debug, Default)]
pub struct PlayerSnapshot {
    pub players: Vec<PlayerRecord>,
    pub teams: Vec<TeamRecord>,
    pub fetched_at: Option<DateTime<Utc>>,
}

impl PlayerSnapshot {
    pub fn team_short_name(&self, team_id: i64) -> Option<&str> {
        self.teams
            .iter()
            .find(|t| t.id == team_id)
            .map(|t| t.short_name.as_str())
    }
}

/// Holds the current snapshot. A refresh builds a new snapshot and swaps the
/// `Arc`; readers holding the old one keep a consistent view.
pub struct PlayerStore {
    source: Arc<dyn PlayerSource>,
    current: RwLock<Arc<PlayerSnapshot>>,
}

impl PlayerStore {
    pub fn new(source: Arc<dyn PlayerSource>) -> Self {
        Self {
            source,
            current: RwLock::new(Arc::new(PlayerSnapshot::default())),
        }
    }

    pub fn source(&self) -> &dyn PlayerSource {
        self.source.as_ref()
    }

    pub async fn snapshot(&self) -> Arc<PlayerSnapshot> {
        self.current.read().await.clone()
    }

    pub async fn refresh(&self) -> BotResult<Arc<PlayerSnapshot>> {
        let bootstrap = self.source.fetch_bootstrap().await?;
        let snapshot = Arc::new(PlayerSnapshot {
            players: bootstrap.elements,
            teams: bootstrap.teams,
            fetched_at: Some(Utc::now()),
        });

        {
            let mut guard = self.current.write().await;
            *guard = snapshot.clone();
        }

        info!(
            "Player snapshot replaced with {} players at {:?}.",
            snapshot.players.len(),
            snapshot.fetched_at
        );
        Ok(snapshot)
    }
}
