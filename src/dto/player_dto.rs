use serde::{Deserialize, Serialize};

/// Availability flag as published by the FPL API (`a`, `d`, `i`, `s`, `u`, `n`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    Doubtful,
    Unavailable,
    Other,
}

impl Availability {
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "a" => Availability::Available,
            "d" => Availability::Doubtful,
            "i" | "s" | "u" | "n" => Availability::Unavailable,
            _ => Availability::Other,
        }
    }
}

/// One element of `bootstrap-static`'s `elements` array.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlayerRecord {
    pub id: i64,
    pub first_name: String,
    pub second_name: String,
    pub web_name: String,

    /// Expected points for the next gameweek. The API sends this as text.
    #[serde(default)]
    pub ep_next: Option<String>,

    #[serde(default)]
    pub status: String,

    /// Price in tenths of a million.
    #[serde(default)]
    pub now_cost: i64,

    #[serde(default)]
    pub chance_of_playing_next_round: Option<u8>,

    #[serde(default)]
    pub team: i64,
}

impl PlayerRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.second_name)
    }

    /// Unparseable or missing values count as zero, never as an error.
    pub fn expected_points(&self) -> f64 {
        self.ep_next
            .as_deref()
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|pts| pts.is_finite())
            .unwrap_or(0.0)
    }

    pub fn availability(&self) -> Availability {
        Availability::from_code(&self.status)
    }

    pub fn is_available(&self) -> bool {
        self.availability() == Availability::Available
    }

    pub fn price_label(&self) -> String {
        format_price(self.now_cost)
    }
}

/// `125` -> `"12.5"`, `50` -> `"5"`.
pub fn format_price(tenths: i64) -> String {
    let whole = tenths / 10;
    let frac = (tenths % 10).abs();
    if frac == 0 {
        format!("{}", whole)
    } else {
        format!("{}.{}", whole, frac)
    }
}
