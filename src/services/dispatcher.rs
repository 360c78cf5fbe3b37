use tracing::{debug, error, info};

use crate::dto::telegram_dto::Update;
use crate::error::BotResult;
use crate::routes::{history, language, league, prices, roster, transfers};
use crate::state::AppState;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Lang(Option<String>),
    Transfer,
    BestXi,
    Fixtures,
    Last,
    Prices,
    Subscribe,
    Unsubscribe,
    Unknown(String),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Incoming {
    Command(Command),
    Roster(String),
}

pub fn parse_incoming(text: &str) -> Incoming {
    let Some(rest) = text.strip_prefix('/') else {
        return Incoming::Roster(text.to_string());
    };

    let mut parts = rest.split_whitespace();
    let name = parts.next().unwrap_or_default();
    // Group chats address commands as /cmd@bot_name.
    let name = name.split('@').next().unwrap_or_default().to_lowercase();
    let argument = parts.next().map(str::to_string);

    let command = match name.as_str() {
        "start" | "help" => Command::Start,
        "lang" => Command::Lang(argument),
        "transfer" => Command::Transfer,
        "bestxi" => Command::BestXi,
        "fixtures" => Command::Fixtures,
        "last" => Command::Last,
        "prices" => Command::Prices,
        "subscribe" => Command::Subscribe,
        "unsubscribe" => Command::Unsubscribe,
        _ => Command::Unknown(name),
    };
    Incoming::Command(command)
}

/// Handle one update. Errors are logged and answered with the apology text;
/// they never escape.
pub async fn dispatch(state: &AppState, update: Update) {
    let Some(message) = update.message else {
        debug!("Skipping update {} without a message.", update.update_id);
        return;
    };
    let Some(text) = message.text else {
        return;
    };
    let chat_id = message.chat.id;

    if let Err(e) = route(state, chat_id, &text).await {
        error!("Failed to handle message from {}: {}", chat_id, e);
        let texts = state.sessions.language(chat_id).await.texts();
        if let Err(e) = state.messenger.send_text(chat_id, texts.generic_error).await {
            error!("Failed to send error reply to {}: {}", chat_id, e);
        }
    }
}

async fn route(state: &AppState, chat_id: i64, text: &str) -> BotResult<()> {
    match parse_incoming(text) {
        Incoming::Roster(text) => roster::submit_roster(state, chat_id, &text).await,
        Incoming::Command(command) => {
            info!("Command {:?} from {}.", command, chat_id);
            match command {
                Command::Start => language::start(state, chat_id).await,
                Command::Lang(code) => language::set_language(state, chat_id, code.as_deref()).await,
                Command::Transfer => transfers::suggest_transfers(state, chat_id).await,
                Command::BestXi => league::show_best_xi(state, chat_id).await,
                Command::Fixtures => league::show_fixtures(state, chat_id).await,
                Command::Last => history::show_last_submission(state, chat_id).await,
                Command::Prices => prices::send_price_report(state, chat_id).await,
                Command::Subscribe => prices::subscribe(state, chat_id).await,
                Command::Unsubscribe => prices::unsubscribe(state, chat_id).await,
                Command::Unknown(_) => Ok(()),
            }
        }
    }
}
