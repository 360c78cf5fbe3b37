use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One row of the persistence sheet: `[user_id, timestamp, roster]`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SubmissionRow {
    pub user_id: i64,
    pub submitted_at: String,
    pub roster: String,
}

impl SubmissionRow {
    pub fn new(user_id: i64, roster: &[String], at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            submitted_at: at.to_rfc3339_opts(SecondsFormat::Secs, true),
            roster: roster.join(","),
        }
    }

    pub fn to_values(&self) -> Vec<String> {
        vec![
            self.user_id.to_string(),
            self.submitted_at.clone(),
            self.roster.clone(),
        ]
    }

    /// Rows shorter than three cells or with a non-numeric id are skipped.
    pub fn from_values(cells: &[String]) -> Option<Self> {
        let user_id = cells.first()?.trim().parse::<i64>().ok()?;
        Some(Self {
            user_id,
            submitted_at: cells.get(1)?.clone(),
            roster: cells.get(2)?.clone(),
        })
    }

    pub fn players(&self) -> Vec<&str> {
        self.roster
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}
