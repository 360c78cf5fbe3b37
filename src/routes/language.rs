use tracing::{debug, info};

use crate::error::BotResult;
use crate::services::translations::Language;
use crate::state::AppState;

/**
 * /start
 */
pub async fn start(state: &AppState, chat_id: i64) -> BotResult<()> {
    let texts = state.sessions.language(chat_id).await.texts();
    state.messenger.send_text(chat_id, texts.welcome).await
}

/**
 * /lang <code>: unknown or missing codes are ignored.
 */
pub async fn set_language(state: &AppState, chat_id: i64, code: Option<&str>) -> BotResult<()> {
    let Some(language) = code.and_then(Language::from_code) else {
        debug!("Ignoring /lang with {:?} from {}.", code, chat_id);
        return Ok(());
    };

    state.sessions.set_language(chat_id, language).await;
    info!("Chat {} switched language to {}.", chat_id, language.code());
    state.messenger.send_text(chat_id, language.texts().lang_set).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::harness;

    #[tokio::test]
    async fn switches_language_and_confirms_in_it() {
        let h = harness().await;

        set_language(&h.state, 2, Some("fr")).await.unwrap();
        start(&h.state, 2).await.unwrap();

        let sent = h.messenger.sent_to(2);
        assert_eq!(sent[0], "✅ Langue changée en français");
        assert!(sent[1].starts_with("👋 Bienvenue"));
    }

    #[tokio::test]
    async fn unknown_code_is_ignored() {
        let h = harness().await;

        set_language(&h.state, 2, Some("de")).await.unwrap();
        set_language(&h.state, 2, None).await.unwrap();

        assert!(h.messenger.sent().is_empty());
        assert_eq!(h.state.sessions.language(2).await, Language::Ar);
    }
}
