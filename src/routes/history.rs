use crate::error::BotResult;
use crate::services::formatter;
use crate::state::AppState;

/**
 * /last: the user's most recent submission, read back from the sheet.
 */
pub async fn show_last_submission(state: &AppState, chat_id: i64) -> BotResult<()> {
    let texts = state.sessions.language(chat_id).await.texts();

    let text = match state.sheet.latest_for(chat_id).await? {
        Some(row) => formatter::last_submission(&row, texts),
        None => texts.no_history.to_string(),
    };

    state.messenger.send_text(chat_id, &text).await
}
