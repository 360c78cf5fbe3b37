// Fakes for the integration traits and small data builders shared by tests.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::dto::{
    player_dto::PlayerRecord,
    submission_dto::SubmissionRow,
    team_dto::{Bootstrap, Fixture, TeamRecord},
};
use crate::error::{BotError, BotResult};
use crate::services::{
    fpl_client::PlayerSource, matcher::SubstringMatcher, player_store::PlayerStore,
    price_scraper::PricePageSource, session_store::SessionStore, sheets::SubmissionLog,
    subscribers::SubscriberStore, telegram::Messenger,
};
use crate::state::AppState;

pub fn player(id: i64, first: &str, second: &str, ep_next: &str, status: &str) -> PlayerRecord {
    PlayerRecord {
        id,
        first_name: first.to_string(),
        second_name: second.to_string(),
        web_name: second.to_string(),
        ep_next: Some(ep_next.to_string()),
        status: status.to_string(),
        now_cost: 50,
        chance_of_playing_next_round: None,
        team: 1,
    }
}

/// Eleven available players with distinct expected points summing to 60.3.
pub fn squad() -> Vec<PlayerRecord> {
    [
        ("Mohamed", "Salah", "8.1"),
        ("Erling", "Haaland", "7.9"),
        ("Bukayo", "Saka", "6.2"),
        ("Cole", "Palmer", "6.8"),
        ("Alexander", "Isak", "5.5"),
        ("Bruno", "Fernandes", "4.7"),
        ("Jordan", "Pickford", "3.9"),
        ("William", "Saliba", "4.1"),
        ("Trent", "Alexander-Arnold", "4.4"),
        ("Ollie", "Watkins", "5.1"),
        ("Declan", "Rice", "3.6"),
    ]
    .iter()
    .enumerate()
    .map(|(i, (first, second, ep))| player(i as i64 + 1, first, second, ep, "a"))
    .collect()
}

pub fn squad_message() -> String {
    squad().iter().map(|p| p.second_name.clone()).collect::<Vec<_>>().join("\n")
}

pub struct FakePlayerSource {
    players: Mutex<Vec<PlayerRecord>>,
    fixtures: Mutex<Vec<Fixture>>,
    fail: AtomicBool,
    pub fetches: AtomicUsize,
}

impl FakePlayerSource {
    pub fn new(players: Vec<PlayerRecord>) -> Self {
        Self {
            players: Mutex::new(players),
            fixtures: Mutex::new(vec![]),
            fail: AtomicBool::new(false),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn set_players(&self, players: Vec<PlayerRecord>) {
        *self.players.lock().unwrap() = players;
    }

    pub fn set_fixtures(&self, fixtures: Vec<Fixture>) {
        *self.fixtures.lock().unwrap() = fixtures;
    }

    pub fn fail_next(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl PlayerSource for FakePlayerSource {
    async fn fetch_bootstrap(&self) -> BotResult<Bootstrap> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(BotError::Telegram("bootstrap unavailable".into()));
        }
        Ok(Bootstrap {
            elements: self.players.lock().unwrap().clone(),
            teams: vec![
                TeamRecord { id: 1, name: "Arsenal".into(), short_name: "ARS".into() },
                TeamRecord { id: 2, name: "Liverpool".into(), short_name: "LIV".into() },
            ],
        })
    }

    async fn fetch_fixtures(&self) -> BotResult<Vec<Fixture>> {
        Ok(self.fixtures.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct RecordingMessenger {
    sent: Mutex<Vec<(i64, String)>>,
    failing_chats: Mutex<HashSet<i64>>,
}

impl RecordingMessenger {
    pub fn sent(&self) -> Vec<(i64, String)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_to(&self, chat_id: i64) -> Vec<String> {
        self.sent().into_iter().filter(|(id, _)| *id == chat_id).map(|(_, text)| text).collect()
    }

    pub fn fail_for(&self, chat_id: i64) {
        self.failing_chats.lock().unwrap().insert(chat_id);
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_text(&self, chat_id: i64, text: &str) -> BotResult<()> {
        if self.failing_chats.lock().unwrap().contains(&chat_id) {
            return Err(BotError::Telegram("Forbidden: bot was blocked by the user".into()));
        }
        self.sent.lock().unwrap().push((chat_id, text.to_string()));
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingSheet {
    rows: Mutex<Vec<SubmissionRow>>,
    fail: AtomicBool,
}

impl RecordingSheet {
    pub fn rows(&self) -> Vec<SubmissionRow> {
        self.rows.lock().unwrap().clone()
    }

    pub fn fail_writes(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl SubmissionLog for RecordingSheet {
    async fn append(&self, row: &SubmissionRow) -> BotResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(BotError::Sheets("quota exceeded".into()));
        }
        self.rows.lock().unwrap().push(row.clone());
        Ok(())
    }

    async fn latest_for(&self, user_id: i64) -> BotResult<Option<SubmissionRow>> {
        Ok(self.rows.lock().unwrap().iter().rev().find(|r| r.user_id == user_id).cloned())
    }
}

pub struct FakePricePage {
    html: Mutex<Option<String>>,
    pub fetches: AtomicUsize,
}

impl FakePricePage {
    pub fn new(html: Option<&str>) -> Self {
        Self { html: Mutex::new(html.map(str::to_string)), fetches: AtomicUsize::new(0) }
    }

    pub fn set(&self, html: Option<&str>) {
        *self.html.lock().unwrap() = html.map(str::to_string);
    }
}

#[async_trait]
impl PricePageSource for FakePricePage {
    async fn fetch_page(&self) -> BotResult<String> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.html
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| BotError::Scrape("site unreachable".into()))
    }
}

pub const PRICE_PAGE: &str = "<table>\
    <tr><th>#</th><th>Name</th><th></th><th></th><th>Dir</th><th></th><th>%</th></tr>\
    <tr><td>1</td><td>Salah</td><td></td><td></td><td>Up</td><td></td><td>95%</td></tr>\
    <tr><td>2</td><td>Saka</td><td></td><td></td><td>Down</td><td></td><td>79.9%</td></tr>\
    </table>";

pub struct Harness {
    pub state: AppState,
    pub source: Arc<FakePlayerSource>,
    pub messenger: Arc<RecordingMessenger>,
    pub sheet: Arc<RecordingSheet>,
    pub prices: Arc<FakePricePage>,
}

pub async fn harness() -> Harness {
    let source = Arc::new(FakePlayerSource::new(squad()));
    let messenger = Arc::new(RecordingMessenger::default());
    let sheet = Arc::new(RecordingSheet::default());
    let prices = Arc::new(FakePricePage::new(Some(PRICE_PAGE)));

    let state = AppState {
        players: Arc::new(PlayerStore::new(source.clone())),
        sessions: Arc::new(SessionStore::new()),
        subscribers: SubscriberStore::in_memory().await.unwrap(),
        sheet: sheet.clone(),
        prices: prices.clone(),
        messenger: messenger.clone(),
        matcher: Arc::new(SubstringMatcher),
        best_xi_min_chance: Some(75),
        webhook_secret: None,
    };

    Harness { state, source, messenger, sheet, prices }
}
