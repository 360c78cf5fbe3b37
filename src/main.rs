use anyhow::Context;
use std::sync::Arc;
use tracing::{error, info, warn};

mod config;
mod error;
mod state;

mod dto {
    pub mod player_dto;
    pub mod price_dto;
    pub mod roster_dto;
    pub mod submission_dto;
    pub mod team_dto;
    pub mod telegram_dto;
}

mod routes {
    pub mod history;
    pub mod language;
    pub mod league;
    pub mod prices;
    pub mod roster;
    pub mod transfers;
    pub mod webhook;
}

mod services {
    pub mod best_xi;
    pub mod dispatcher;
    pub mod formatter;
    pub mod fpl_client;
    pub mod matcher;
    pub mod player_store;
    pub mod polling;
    pub mod price_scraper;
    pub mod roster_evaluator;
    pub mod scheduler;
    pub mod session_store;
    pub mod sheets;
    pub mod subscribers;
    pub mod telegram;
    pub mod transfer_suggester;
    pub mod translations;
    pub mod webhook_secret;
}

#[cfg(test)]
mod test_support;

use config::Config;
use services::{
    fpl_client::FplClient,
    matcher::SubstringMatcher,
    player_store::PlayerStore,
    price_scraper::HttpPricePage,
    session_store::SessionStore,
    sheets::{DisabledSheet, GoogleSheet, SubmissionLog},
    subscribers::SubscriberStore,
    telegram::TelegramClient,
};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env().context("Invalid configuration")?;
    let http = reqwest::Client::new();

    let subscribers = SubscriberStore::connect(&config.database_url)
        .await
        .context("Could not connect to SQLite")?;

    let sheet: Arc<dyn SubmissionLog> = match &config.sheet {
        Some(sheet_config) => match GoogleSheet::from_config(http.clone(), sheet_config).await {
            Ok(sheet) => Arc::new(sheet),
            Err(e) => {
                error!("Persistence sheet disabled: {}", e);
                Arc::new(DisabledSheet)
            }
        },
        None => {
            warn!("GOOGLE_SPREADSHEET_ID not set; submissions will not be persisted.");
            Arc::new(DisabledSheet)
        }
    };

    let telegram = Arc::new(TelegramClient::new(http.clone(), config.bot_token.clone()));

    let state = AppState {
        players: Arc::new(PlayerStore::new(Arc::new(FplClient::new(http.clone())))),
        sessions: Arc::new(SessionStore::new()),
        subscribers,
        sheet,
        prices: Arc::new(HttpPricePage::new(http.clone(), config.price_change_url.clone())),
        messenger: telegram.clone(),
        matcher: Arc::new(SubstringMatcher),
        best_xi_min_chance: config.best_xi_min_chance,
        webhook_secret: config.webhook_secret.clone(),
    };

    tokio::spawn(services::scheduler::run_daily_price_alerts(
        state.clone(),
        config.price_alert_time,
    ));

    match &config.webhook_url {
        Some(url) => telegram
            .set_webhook(url, config.webhook_secret.as_deref())
            .await
            .context("Failed to register webhook")?,
        None => {
            tokio::spawn(services::polling::run_polling(telegram.clone(), state.clone()));
        }
    }

    let app = routes::webhook::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Could not bind {}", config.bind_addr))?;
    info!("Started server on {}.", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shut down.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}
