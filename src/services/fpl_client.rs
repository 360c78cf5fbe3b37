use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

use crate::dto::team_dto::{Bootstrap, Fixture};
use crate::error::BotResult;

const FPL_API_BASE: &str = "https://fantasy.premierleague.com/api";

/// Read-only access to the reference data the bot scores against.
#[async_trait]
pub trait PlayerSource: Send + Sync {
    async fn fetch_bootstrap(&self) -> BotResult<Bootstrap>;
    async fn fetch_fixtures(&self) -> BotResult<Vec<Fixture>>;
}

pub struct FplClient {
    client: Client,
    base_url: String,
}

impl FplClient {
    pub fn new(client: Client) -> Self {
        Self { client, base_url: FPL_API_BASE.to_string() }
    }
}

#[async_trait]
impl PlayerSource for FplClient {
    async fn fetch_bootstrap(&self) -> BotResult<Bootstrap> {
        let url = format!("{}/bootstrap-static/", self.base_url);
        info!("Fetching FPL bootstrap data.");

        let bootstrap: Bootstrap = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        info!("Fetched {} players and {} teams.", bootstrap.elements.len(), bootstrap.teams.len());
        Ok(bootstrap)
    }

    async fn fetch_fixtures(&self) -> BotResult<Vec<Fixture>> {
        let url = format!("{}/fixtures/?future=1", self.base_url);
        info!("Fetching upcoming fixtures.");

        let fixtures = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(fixtures)
    }
}

/// Fixtures of the earliest upcoming gameweek, in API order.
pub fn next_gameweek(fixtures: &[Fixture]) -> Vec<&Fixture> {
    let Some(next) = fixtures.iter().filter_map(|f| f.event).min() else {
        return vec![];
    };
    fixtures.iter().filter(|f| f.event == Some(next)).collect()
}
