use tracing::info;

use crate::dto::roster_dto::MIN_ROSTER_SIZE;
use crate::error::BotResult;
use crate::services::{formatter, roster_evaluator::resolve_all, transfer_suggester};
use crate::state::AppState;

/**
 * /transfer: drop and acquire suggestions for the stored roster.
 */
pub async fn suggest_transfers(state: &AppState, chat_id: i64) -> BotResult<()> {
    let texts = state.sessions.language(chat_id).await.texts();

    let roster = match state.sessions.roster(chat_id).await {
        Some(roster) if roster.len() >= MIN_ROSTER_SIZE => roster,
        _ => return state.messenger.send_text(chat_id, texts.too_short).await,
    };

    info!("Building transfer suggestions for {}.", chat_id);
    let snapshot = state.players.refresh().await?;
    let picks = resolve_all(state.matcher.as_ref(), &roster, &snapshot.players);
    let suggestions = transfer_suggester::suggest(&picks, &snapshot.players);

    state
        .messenger
        .send_text(chat_id, &formatter::transfer_suggestions(&suggestions, texts))
        .await
}
