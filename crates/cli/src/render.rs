// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text views of a league snapshot.

use league_domain::{
    LeagueYearData, Match, Season, SeasonRecord, recent_results, season_record, season_split,
    upcoming_matches,
};
use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Number of matches listed in each dashboard section.
pub const DASHBOARD_LIMIT: usize = 3;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");

fn format_date(date: OffsetDateTime) -> String {
    date.format(DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

fn match_line(fixture: &Match) -> String {
    let summary = fixture.availability_summary();
    format!(
        "{}  vs {} ({})  {} available, {} if needed",
        format_date(fixture.date),
        fixture.opponent,
        fixture.location,
        summary.available,
        summary.reserves
    )
}

fn result_line(data: &LeagueYearData, fixture: &Match) -> String {
    let mut line: String = format!("{}  vs {}", format_date(fixture.date), fixture.opponent);
    if let Some(results) = &fixture.results {
        let verdict: &str = if results.team_score.is_win() { "W" } else { "L" };
        line.push_str(&format!("  {}  {verdict}", results.team_score));
    }
    if let Some(mvp) = &fixture.mvp {
        line.push_str(&format!("  MVP: {}", data.player_name(mvp)));
    }
    line
}

/// Renders the roster in rank order.
#[must_use]
pub fn roster(data: &LeagueYearData) -> String {
    let mut out: String = format!("Roster {} ({} players)\n", data.year, data.players.len());
    for player in &data.players {
        out.push_str(&format!(
            "{:>4}  {:<20} {}\n",
            player.rank, player.name, player.id
        ));
    }
    out
}

/// Renders the team record with the next and most recent matches.
#[must_use]
pub fn dashboard(data: &LeagueYearData, season: Season, now: OffsetDateTime) -> String {
    let record: SeasonRecord = season_record(data, now);
    let mut out: String = format!("League year {} ({season} season)\n", data.year);
    out.push_str(&format!(
        "Record: {}-{} ({}% wins)\n",
        record.wins,
        record.losses,
        record.win_rate_percent()
    ));

    out.push_str("\nUpcoming matches:\n");
    let upcoming: Vec<&Match> = upcoming_matches(data, now, DASHBOARD_LIMIT);
    if upcoming.is_empty() {
        out.push_str("  none scheduled\n");
    }
    for fixture in upcoming {
        out.push_str(&format!("  {}\n", match_line(fixture)));
    }

    out.push_str("\nRecent results:\n");
    let recent: Vec<&Match> = recent_results(data, now);
    if recent.is_empty() {
        out.push_str("  none recorded\n");
    }
    for fixture in recent.into_iter().take(DASHBOARD_LIMIT) {
        out.push_str(&format!("  {}\n", result_line(data, fixture)));
    }
    out
}

/// Renders one season's upcoming and past matches.
#[must_use]
pub fn schedule(data: &LeagueYearData, season: Season, now: OffsetDateTime) -> String {
    let (upcoming, past) = season_split(data.season_matches(season), now);
    let mut out: String = format!("{season} {} schedule\n", data.year);

    out.push_str("\nUpcoming:\n");
    if upcoming.is_empty() {
        out.push_str("  none\n");
    }
    for fixture in upcoming {
        out.push_str(&format!("  [{}] {}\n", fixture.id, match_line(fixture)));
    }

    out.push_str("\nPast:\n");
    if past.is_empty() {
        out.push_str("  none\n");
    }
    for fixture in past {
        out.push_str(&format!("  [{}] {}\n", fixture.id, result_line(data, fixture)));
    }
    out
}
