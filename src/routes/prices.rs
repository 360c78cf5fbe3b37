use tracing::{error, info, warn};

use crate::error::BotResult;
use crate::services::{formatter, price_scraper};
use crate::state::AppState;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct FanOutSummary {
    pub delivered: usize,
    pub failed: usize,
}

/**
 * /prices: on-demand price report for the requesting chat.
 */
pub async fn send_price_report(state: &AppState, chat_id: i64) -> BotResult<()> {
    let texts = state.sessions.language(chat_id).await.texts();
    let report = price_scraper::scrape(state.prices.as_ref()).await?;
    state.messenger.send_text(chat_id, &formatter::price_report(&report, texts)).await
}

/**
 * /subscribe: register for the daily report and get today's right away.
 */
pub async fn subscribe(state: &AppState, chat_id: i64) -> BotResult<()> {
    let texts = state.sessions.language(chat_id).await.texts();

    if state.subscribers.subscribe(chat_id).await? {
        info!("Chat {} subscribed to price alerts.", chat_id);
    }
    state.messenger.send_text(chat_id, texts.subscribed).await?;

    send_price_report(state, chat_id).await
}

/**
 * /unsubscribe
 */
pub async fn unsubscribe(state: &AppState, chat_id: i64) -> BotResult<()> {
    let texts = state.sessions.language(chat_id).await.texts();

    if state.subscribers.unsubscribe(chat_id).await? {
        info!("Chat {} unsubscribed from price alerts.", chat_id);
    }
    state.messenger.send_text(chat_id, texts.unsubscribed).await
}

/// Scrapes once, then delivers to each subscriber in turn. A failed scrape
/// sends every subscriber the apology; a failed delivery only affects that
/// subscriber.
pub async fn fan_out(state: &AppState) -> FanOutSummary {
    let mut summary = FanOutSummary::default();

    let subscribers = match state.subscribers.all().await {
        Ok(subscribers) => subscribers,
        Err(e) => {
            error!("Could not load subscribers: {}", e);
            return summary;
        }
    };

    if subscribers.is_empty() {
        info!("No price alert subscribers.");
        return summary;
    }

    let report = price_scraper::scrape(state.prices.as_ref()).await;
    if let Err(e) = &report {
        error!("Price scrape failed: {}", e);
    }

    for chat_id in subscribers {
        let texts = state.sessions.language(chat_id).await.texts();
        let text = match &report {
            Ok(report) => formatter::price_report(report, texts),
            Err(_) => texts.generic_error.to_string(),
        };

        match state.messenger.send_text(chat_id, &text).await {
            Ok(()) => summary.delivered += 1,
            Err(e) => {
                warn!("Failed to deliver price report to {}: {}", chat_id, e);
                summary.failed += 1;
            }
        }
    }

    info!("Price fan-out finished: {} delivered, {} failed.", summary.delivered, summary.failed);
    summary
}
