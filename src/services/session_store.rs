use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::services::translations::Language;

/// Per-user roster and language, replaced wholesale on every update.
#[derive(Default)]
pub struct SessionStore {
    rosters: RwLock<HashMap<i64, Vec<String>>>,
    languages: RwLock<HashMap<i64, Language>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn language(&self, user_id: i64) -> Language {
        self.languages.read().await.get(&user_id).copied().unwrap_or_default()
    }

    pub async fn set_language(&self, user_id: i64, language: Language) {
        self.languages.write().await.insert(user_id, language);
    }

    pub async fn roster(&self, user_id: i64) -> Option<Vec<String>> {
        self.rosters.read().await.get(&user_id).cloned()
    }

    pub async fn replace_roster(&self, user_id: i64, roster: Vec<String>) {
        self.rosters.write().await.insert(user_id, roster);
    }
}
