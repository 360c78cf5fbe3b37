use std::sync::Arc;

use crate::services::{
    matcher::NameMatcher, player_store::PlayerStore, price_scraper::PricePageSource,
    session_store::SessionStore, sheets::SubmissionLog, subscribers::SubscriberStore,
    telegram::Messenger,
};

/// Everything a handler needs, passed explicitly instead of living in globals.
#[derive(Clone)]
pub struct AppState {
    pub players: Arc<PlayerStore>,
    pub sessions: Arc<SessionStore>,
    pub subscribers: SubscriberStore,
    pub sheet: Arc<dyn SubmissionLog>,
    pub prices: Arc<dyn PricePageSource>,
    pub messenger: Arc<dyn Messenger>,
    pub matcher: Arc<dyn NameMatcher>,
    pub best_xi_min_chance: Option<u8>,
    pub webhook_secret: Option<String>,
}
