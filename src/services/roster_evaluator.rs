use crate::dto::{
    player_dto::PlayerRecord,
    roster_dto::{CaptaincyResult, Leader, ResolvedPick, RosterReport, ScoredPick},
};
use crate::services::matcher::NameMatcher;

/// Split a message into roster lines: trimmed, blank lines dropped.
pub fn parse_roster(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn resolve_all(
    matcher: &dyn NameMatcher,
    entries: &[String],
    players: &[PlayerRecord],
) -> Vec<ResolvedPick> {
    entries
        .iter()
        .map(|entry| matcher.resolve(entry, players))
        .collect()
}

pub fn evaluate(matcher: &dyn NameMatcher, entries: &[String], players: &[PlayerRecord]) -> RosterReport {
    let picks: Vec<ScoredPick> = resolve_all(matcher, entries, players)
        .into_iter()
        .map(|pick| {
            let points = pick.player().map(PlayerRecord::expected_points).unwrap_or(0.0);
            ScoredPick { pick, points }
        })
        .collect();

    let total: f64 = picks.iter().map(|p| p.points).sum();
    let captaincy = select_captains(
        picks
            .iter()
            .filter_map(|p| p.pick.player().map(|player| (player.web_name.as_str(), p.points))),
    );

    RosterReport { picks, captaincy, total }
}

/// Streaming top-2 over `(name, points)` in encounter order.
///
/// Comparisons are strict, so among equal scores the earlier entry keeps the
/// higher slot.
pub fn select_captains<'a, I>(scored: I) -> CaptaincyResult
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut result = CaptaincyResult::default();

    for (name, points) in scored {
        let leader = Leader { name: name.to_string(), points };
        match result.captain.as_ref().map(|c| c.points) {
            None => result.captain = Some(leader),
            Some(captain_points) if points > captain_points => {
                result.vice = result.captain.replace(leader);
            }
            Some(_) => {
                if result.vice.as_ref().is_none_or(|vice| points > vice.points) {
                    result.vice = Some(leader);
                }
            }
        }
    }

    result
}
