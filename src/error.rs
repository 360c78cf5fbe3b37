use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("telegram api error: {0}")]
    Telegram(String),

    #[error("google sheets error: {0}")]
    Sheets(String),

    #[error("google auth error: {0}")]
    Auth(String),

    #[error("failed to parse price page: {0}")]
    Scrape(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0} is not configured")]
    NotConfigured(&'static str),
}

pub type BotResult<T> = Result<T, BotError>;
