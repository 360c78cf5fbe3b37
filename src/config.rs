// Environment configuration. Values may come from a `.env` file.

use chrono::NaiveTime;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://./data/fpl_bot.db";
pub const DEFAULT_SHEET_RANGE: &str = "Sheet1";
pub const DEFAULT_PRICE_CHANGE_URL: &str = "https://www.livefpl.net/prices";
pub const DEFAULT_PRICE_ALERT_TIME: &str = "09:00";
pub const DEFAULT_BEST_XI_MIN_CHANCE: u8 = 75;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable `{0}`")]
    Missing(&'static str),

    #[error("invalid value for `{field}`: {message}")]
    Invalid { field: &'static str, message: String },
}

/// Where the service-account key for the persistence sheet comes from.
#[derive(Debug, Clone)]
pub enum GoogleCredentials {
    File(PathBuf),
    Inline { client_email: String, private_key: String },
}

#[derive(Debug, Clone)]
pub struct SheetConfig {
    pub spreadsheet_id: String,
    pub range: String,
    pub credentials: GoogleCredentials,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub webhook_url: Option<String>,
    pub webhook_secret: Option<String>,
    pub bind_addr: SocketAddr,
    pub database_url: String,
    pub sheet: Option<SheetConfig>,
    pub price_change_url: String,
    pub price_alert_time: NaiveTime,
    pub best_xi_min_chance: Option<u8>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is fine; real deployments set variables directly.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bot_token = get("TELEGRAM_BOT_TOKEN").ok_or(ConfigError::Missing("TELEGRAM_BOT_TOKEN"))?;

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid { field: "BIND_ADDR", message: e.to_string() })?;

        let price_alert_time = parse_alert_time(
            &get("PRICE_ALERT_TIME").unwrap_or_else(|| DEFAULT_PRICE_ALERT_TIME.to_string()),
        )?;

        let best_xi_min_chance = match get("BEST_XI_MIN_CHANCE") {
            None => Some(DEFAULT_BEST_XI_MIN_CHANCE),
            Some(raw) => {
                let value = raw.parse::<u8>().map_err(|e| ConfigError::Invalid {
                    field: "BEST_XI_MIN_CHANCE",
                    message: e.to_string(),
                })?;
                if value > 100 {
                    return Err(ConfigError::Invalid {
                        field: "BEST_XI_MIN_CHANCE",
                        message: "must be between 0 and 100".into(),
                    });
                }
                (value > 0).then_some(value)
            }
        };

        let sheet = match get("GOOGLE_SPREADSHEET_ID") {
            None => None,
            Some(spreadsheet_id) => {
                let credentials = match get("GOOGLE_CREDENTIALS_FILE") {
                    Some(path) => GoogleCredentials::File(PathBuf::from(path)),
                    None => GoogleCredentials::Inline {
                        client_email: get("GOOGLE_SERVICE_ACCOUNT_EMAIL")
                            .ok_or(ConfigError::Missing("GOOGLE_SERVICE_ACCOUNT_EMAIL"))?,
                        private_key: normalize_private_key(
                            &get("GOOGLE_PRIVATE_KEY").ok_or(ConfigError::Missing("GOOGLE_PRIVATE_KEY"))?,
                        ),
                    },
                };
                Some(SheetConfig {
                    spreadsheet_id,
                    range: get("GOOGLE_SHEET_RANGE").unwrap_or_else(|| DEFAULT_SHEET_RANGE.to_string()),
                    credentials,
                })
            }
        };

        Ok(Config {
            bot_token,
            webhook_url: get("WEBHOOK_URL"),
            webhook_secret: get("WEBHOOK_SECRET"),
            bind_addr,
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            sheet,
            price_change_url: get("PRICE_CHANGE_URL").unwrap_or_else(|| DEFAULT_PRICE_CHANGE_URL.to_string()),
            price_alert_time,
            best_xi_min_chance,
        })
    }
}

/// Keys pasted into env files usually carry literal `\n` sequences.
pub fn normalize_private_key(raw: &str) -> String {
    raw.trim_matches('"').replace("\\n", "\n")
}

fn parse_alert_time(raw: &str) -> Result<NaiveTime, ConfigError> {
    NaiveTime::parse_from_str(raw, "%H:%M").map_err(|e| ConfigError::Invalid {
        field: "PRICE_ALERT_TIME",
        message: format!("expected HH:MM, {}", e),
    })
}
