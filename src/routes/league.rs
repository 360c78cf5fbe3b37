use tracing::info;

use crate::error::BotResult;
use crate::services::{best_xi, formatter, fpl_client::next_gameweek};
use crate::state::AppState;

/**
 * /bestxi: league-wide lineup, independent of the user's roster.
 */
pub async fn show_best_xi(state: &AppState, chat_id: i64) -> BotResult<()> {
    let texts = state.sessions.language(chat_id).await.texts();
    let snapshot = state.players.refresh().await?;

    let lineup = best_xi::rank(&snapshot.players, state.best_xi_min_chance);
    info!("Best XI built from {} players.", snapshot.players.len());

    state.messenger.send_text(chat_id, &formatter::best_xi(&lineup, texts)).await
}

/**
 * /fixtures: matches of the next gameweek.
 */
pub async fn show_fixtures(state: &AppState, chat_id: i64) -> BotResult<()> {
    let texts = state.sessions.language(chat_id).await.texts();
    let snapshot = state.players.refresh().await?;
    let fixtures = state.players.source().fetch_fixtures().await?;

    let upcoming = next_gameweek(&fixtures);
    state
        .messenger
        .send_text(chat_id, &formatter::fixtures(&upcoming, &snapshot, texts))
        .await
}
