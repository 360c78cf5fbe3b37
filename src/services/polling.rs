use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

use crate::services::{dispatcher::dispatch, telegram::TelegramClient};
use crate::state::AppState;

const ERROR_BACKOFF: Duration = Duration::from_secs(5);

/// Long-polling transport, used when no webhook URL is configured. Updates
/// are handled one at a time in arrival order.
pub async fn run_polling(telegram: Arc<TelegramClient>, state: AppState) {
    if let Err(e) = telegram.delete_webhook().await {
        error!("Failed to clear webhook before polling: {}", e);
    }

    info!("Polling Telegram for updates.");
    let mut offset = 0;

    loop {
        let updates = match telegram.get_updates(offset).await {
            Ok(updates) => updates,
            Err(e) => {
                error!("getUpdates failed: {}", e);
                tokio::time::sleep(ERROR_BACKOFF).await;
                continue;
            }
        };

        for update in updates {
            offset = offset.max(update.update_id + 1);
            dispatch(&state, update).await;
        }
    }
}
