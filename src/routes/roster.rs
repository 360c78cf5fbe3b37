use chrono::Utc;
use tracing::{error, info};

use crate::dto::{roster_dto::MIN_ROSTER_SIZE, submission_dto::SubmissionRow};
use crate::error::BotResult;
use crate::services::{
    formatter, roster_evaluator::{evaluate, parse_roster}, sheets::SubmissionLog,
};
use crate::state::AppState;

/**
 * A bare text message: one player per line.
 */
pub async fn submit_roster(state: &AppState, chat_id: i64, text: &str) -> BotResult<()> {
    let texts = state.sessions.language(chat_id).await.texts();
    let entries = parse_roster(text);

    if entries.len() < MIN_ROSTER_SIZE {
        info!("Rejected roster of {} lines from {}.", entries.len(), chat_id);
        return state.messenger.send_text(chat_id, texts.too_short).await;
    }

    let snapshot = state.players.refresh().await?;
    state.sessions.replace_roster(chat_id, entries.clone()).await;

    let report = evaluate(state.matcher.as_ref(), &entries, &snapshot.players);
    let sent = state
        .messenger
        .send_text(chat_id, &formatter::roster_report(&report, texts))
        .await;

    // An accepted roster is persisted even when the reply cannot be delivered.
    let row = SubmissionRow::new(chat_id, &entries, Utc::now());
    if let Err(e) = record_submission(state.sheet.as_ref(), &row).await {
        error!("Failed to persist submission for {}: {}", chat_id, e);
    }

    sent
}

/// The caller decides what to do with a failed write; the user never sees it.
pub async fn record_submission(sheet: &dyn SubmissionLog, row: &SubmissionRow) -> BotResult<()> {
    sheet.append(row).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{harness, squad_message};

    #[tokio::test]
    async fn short_roster_is_rejected_without_side_effects() {
        let h = harness().await;
        let ten = squad_message().lines().take(10).collect::<Vec<_>>().join("\n");

        submit_roster(&h.state, 5, &ten).await.unwrap();

        assert_eq!(h.messenger.sent_to(5), vec!["⚠️ أرسل على الأقل 11 لاعب."]);
        assert!(h.sheet.rows().is_empty());
        assert!(h.state.sessions.roster(5).await.is_none());
        assert_eq!(h.source.fetches.load(std::sync::atomic::Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn accepted_roster_is_scored_stored_and_persisted() {
        let h = harness().await;
        h.state.sessions.set_language(5, crate::services::translations::Language::En).await;

        submit_roster(&h.state, 5, &format!("{}\n\n  ", squad_message())).await.unwrap();

        let sent = h.messenger.sent_to(5);
        assert_eq!(sent.len(), 1);
        assert!(sent[0].contains("⭐ Suggested Captain: Salah"));
        assert!(sent[0].ends_with("📊 Total Expected Points: 60.3"));

        assert_eq!(h.state.sessions.roster(5).await.map(|r| r.len()), Some(11));
        let rows = h.sheet.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].user_id, 5);
        assert!(rows[0].roster.starts_with("Salah,Haaland,"));
    }

    #[tokio::test]
    async fn persistence_failure_is_not_surfaced() {
        let h = harness().await;
        h.sheet.fail_writes();

        submit_roster(&h.state, 5, &squad_message()).await.unwrap();

        let sent = h.messenger.sent_to(5);
        assert_eq!(sent.len(), 1);
        assert!(sent[0].contains("Salah"));
    }

    #[tokio::test]
    async fn undeliverable_reply_still_persists_submission() {
        let h = harness().await;
        h.messenger.fail_for(5);

        assert!(submit_roster(&h.state, 5, &squad_message()).await.is_err());

        let rows = h.sheet.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].user_id, 5);
        assert_eq!(h.state.sessions.roster(5).await.map(|r| r.len()), Some(11));
    }

    #[tokio::test]
    async fn reference_data_failure_propagates() {
        let h = harness().await;
        h.source.fail_next(true);

        assert!(submit_roster(&h.state, 5, &squad_message()).await.is_err());
        assert!(h.sheet.rows().is_empty());
        assert!(h.state.sessions.roster(5).await.is_none());
    }
}
