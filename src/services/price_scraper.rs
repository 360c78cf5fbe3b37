use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{info, warn};

use crate::dto::price_dto::{PriceChangeRow, PriceDirection, PriceReport};
use crate::error::{BotError, BotResult};

pub const RISING_THRESHOLD: f64 = 90.0;
pub const FALLING_THRESHOLD: f64 = 80.0;

// Positional column contract of the prediction table.
const NAME_COLUMN: usize = 1;
const DIRECTION_COLUMN: usize = 4;
const PERCENT_COLUMN: usize = 6;

#[async_trait]
pub trait PricePageSource: Send + Sync {
    async fn fetch_page(&self) -> BotResult<String>;
}

pub struct HttpPricePage {
    client: Client,
    url: String,
}

impl HttpPricePage {
    pub fn new(client: Client, url: String) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl PricePageSource for HttpPricePage {
    async fn fetch_page(&self) -> BotResult<String> {
        info!("Fetching price predictions from {}", self.url);
        let body = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(body)
    }
}

pub async fn scrape(source: &dyn PricePageSource) -> BotResult<PriceReport> {
    let html = source.fetch_page().await?;
    parse_report(&html)
}

/// Rows that do not meet a threshold, or whose percentage is not a finite number,
/// are dropped without error.
pub fn parse_report(html: &str) -> BotResult<PriceReport> {
    let row_selector = Selector::parse("table tr").map_err(|e| BotError::Scrape(e.to_string()))?;
    let cell_selector = Selector::parse("td").map_err(|e| BotError::Scrape(e.to_string()))?;

    let document = Html::parse_document(html);
    let mut report = PriceReport::default();
    let mut seen_rows = 0usize;

    for row in document.select(&row_selector) {
        let cells: Vec<String> = row
            .select(&cell_selector)
            .map(|cell| cell.text().collect::<String>().trim().to_string())
            .collect();

        if cells.len() <= PERCENT_COLUMN {
            continue;
        }
        seen_rows += 1;

        let Some(parsed) = classify(&cells[NAME_COLUMN], &cells[DIRECTION_COLUMN], &cells[PERCENT_COLUMN]) else {
            continue;
        };

        match parsed.direction {
            PriceDirection::Rising => report.rising.push(parsed),
            PriceDirection::Falling => report.falling.push(parsed),
        }
    }

    if seen_rows == 0 {
        warn!("Price page contained no data rows; the table layout may have changed.");
    }

    Ok(report)
}

pub fn classify(name: &str, direction: &str, percentage: &str) -> Option<PriceChangeRow> {
    let percentage = parse_percentage(percentage)?;
    let direction = direction.to_lowercase();

    let direction = if direction.contains("up") && percentage >= RISING_THRESHOLD {
        PriceDirection::Rising
    } else if direction.contains("down") && percentage >= FALLING_THRESHOLD {
        PriceDirection::Falling
    } else {
        return None;
    };

    Some(PriceChangeRow {
        name: name.to_string(),
        direction,
        percentage,
    })
}

fn parse_percentage(raw: &str) -> Option<f64> {
    raw.trim()
        .trim_end_matches('%')
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|pct| pct.is_finite())
}
