// Renders results into the chat messages users see.

use crate::dto::{
    player_dto::PlayerRecord,
    price_dto::{PriceChangeRow, PriceReport},
    roster_dto::{Leader, ResolvedPick, RosterReport, TransferSuggestions},
    submission_dto::SubmissionRow,
    team_dto::Fixture,
};
use crate::services::{player_store::PlayerSnapshot, translations::Texts};

const EMPTY_PLACEHOLDER: &str = "-";

pub fn roster_report(report: &RosterReport, texts: &Texts) -> String {
    let mut lines: Vec<String> = report
        .picks
        .iter()
        .map(|scored| match &scored.pick {
            ResolvedPick::Found { player, .. } => format!("✅ {} ({:.1})", player.web_name, scored.points),
            ResolvedPick::NotFound { .. } => format!("{} \"{}\"", texts.not_found, scored.pick.input()),
        })
        .collect();

    lines.push(format!("\n{} {}", texts.captain, leader_name(report.captaincy.captain.as_ref())));
    lines.push(format!("{} {}", texts.vice, leader_name(report.captaincy.vice.as_ref())));
    lines.push(format!("{} {:.1}", texts.total_points, report.total));
    lines.join("\n")
}

fn leader_name(leader: Option<&Leader>) -> &str {
    leader.map(|l| l.name.as_str()).unwrap_or(EMPTY_PLACEHOLDER)
}

pub fn transfer_suggestions(suggestions: &TransferSuggestions, texts: &Texts) -> String {
    let mut lines = vec![texts.transfer_header.to_string()];

    lines.push(format!("\n{}", texts.transfer_out));
    lines.extend(suggestions.drop.iter().map(|p| format!("- {} ({}m)", p.web_name, p.price_label())));

    lines.push(format!("\n{}", texts.transfer_in));
    lines.extend(suggestions.acquire.iter().map(|p| format!("+ {} ({}m)", p.web_name, p.price_label())));

    lines.join("\n")
}

pub fn best_xi(players: &[PlayerRecord], texts: &Texts) -> String {
    let mut lines = vec![texts.best_xi_header.to_string()];
    if players.is_empty() {
        lines.push(EMPTY_PLACEHOLDER.to_string());
    }
    lines.extend(
        players
            .iter()
            .enumerate()
            .map(|(i, p)| format!("{}. {} ({:.1})", i + 1, p.web_name, p.expected_points())),
    );
    lines.join("\n")
}

pub fn price_report(report: &PriceReport, texts: &Texts) -> String {
    format!(
        "{}\n\n{}\n{}\n\n{}\n{}",
        texts.price_header,
        texts.rising,
        price_rows(&report.rising),
        texts.falling,
        price_rows(&report.falling)
    )
}

fn price_rows(rows: &[PriceChangeRow]) -> String {
    if rows.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }
    rows.iter().map(PriceChangeRow::label).collect::<Vec<_>>().join("\n")
}

pub fn fixtures(fixtures: &[&Fixture], snapshot: &PlayerSnapshot, texts: &Texts) -> String {
    if fixtures.is_empty() {
        return texts.no_fixtures.to_string();
    }

    let team = |id: i64| snapshot.team_short_name(id).map(str::to_string).unwrap_or_else(|| id.to_string());

    let mut lines = vec![texts.fixtures_header.to_string()];
    lines.extend(fixtures.iter().map(|f| match &f.kickoff_time {
        Some(kickoff) => format!("{} vs {} ({})", team(f.team_h), team(f.team_a), kickoff),
        None => format!("{} vs {}", team(f.team_h), team(f.team_a)),
    }));
    lines.join("\n")
}

pub fn last_submission(row: &SubmissionRow, texts: &Texts) -> String {
    let mut lines = vec![format!("{} {}", texts.last_header, row.submitted_at)];
    lines.extend(row.players().into_iter().map(|name| format!("• {}", name)));
    lines.join("\n")
}
