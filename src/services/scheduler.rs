use chrono::{DateTime, Local, NaiveTime, TimeDelta, TimeZone};
use std::fmt::Display;
use std::time::Duration;
use tracing::info;

use crate::routes::prices::fan_out;
use crate::state::AppState;

/// Runs the price fan-out once a day at `at` local time. Never returns.
pub async fn run_daily_price_alerts(state: AppState, at: NaiveTime) {
    let state = &state;
    run_daily(at, Local::now, move || async move {
        fan_out(state).await;
    })
    .await
}

/// Calls `job` every time `clock` reaches `at`. Never returns.
pub async fn run_daily<Tz, C, J, F>(at: NaiveTime, clock: C, mut job: J)
where
    Tz: TimeZone,
    Tz::Offset: Display,
    C: Fn() -> DateTime<Tz>,
    J: FnMut() -> F,
    F: Future<Output = ()>,
{
    loop {
        let now = clock();
        let next = next_occurrence(&now, at);
        let wait = (next.clone() - now).to_std().unwrap_or(Duration::ZERO);

        info!("Next price alert run at {}.", next);
        tokio::time::sleep(wait).await;

        job().await;
    }
}

/// First instant strictly after `now` whose local wall-clock time is `at`.
/// Skips days where `at` does not exist (DST gaps).
pub fn next_occurrence<Tz: TimeZone>(now: &DateTime<Tz>, at: NaiveTime) -> DateTime<Tz> {
    let tz = now.timezone();
    let today = now.date_naive();

    for offset in 0..=2 {
        let Some(date) = today.checked_add_days(chrono::Days::new(offset)) else {
            break;
        };
        if let Some(candidate) = tz.from_local_datetime(&date.and_time(at)).earliest() {
            if candidate > *now {
                return candidate;
            }
        }
    }

    now.clone() + TimeDelta::days(1)
}
