use crate::sleeper::model::{LeagueRecord, RosterRecord, RosterSettings, UserRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const UNKNOWN_OWNER: &str = "Unknown Owner";

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct StandingsEntry {
    pub roster_id: i64,
    pub owner: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub total_points: f64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Standings {
    pub season: String,
    pub league_name: String,
    pub standings: Vec<StandingsEntry>,
}

/// Joins `fpts` and `fpts_decimal` as `"{fpts}.{fpts_decimal}"` and parses the text.
///
/// The provider prints the decimal digits directly after the point, so `fpts_decimal = 5`
/// reads as `.5`, not `.05`.
pub fn total_points(settings: &RosterSettings) -> f64 {
    let whole = settings
        .fpts
        .as_ref()
        .map(|fpts| fpts.to_string())
        .unwrap_or_else(|| String::from("0"));
    let fraction = settings
        .fpts_decimal
        .as_ref()
        .map(|fpts_decimal| fpts_decimal.to_string())
        .unwrap_or_else(|| String::from("0"));

    let joined = format!("{}.{}", whole, fraction);
    parse_leading_number(&joined).unwrap_or_else(|| {
        tracing::warn!("couldn't parse points {}", joined);
        0.0
    })
}

/// Parses the longest prefix of `text` that reads as a finite number.
fn parse_leading_number(text: &str) -> Option<f64> {
    text.char_indices()
        .map(|(start, c)| start + c.len_utf8())
        .rev()
        .find_map(|end| text[..end].parse::<f64>().ok())
        .filter(|number| number.is_finite())
}

/// Ranks rosters by wins, then by total points, both descending.
///
/// Rosters with equal wins and points keep the order they were given in.
pub fn rank_rosters(rosters: &[RosterRecord], users: &[UserRecord]) -> Vec<StandingsEntry> {
    let owners: HashMap<&str, &UserRecord> = users
        .iter()
        .map(|user| (user.user_id.as_str(), user))
        .collect();

    let mut entries: Vec<StandingsEntry> = rosters
        .iter()
        .map(|roster| StandingsEntry {
            roster_id: roster.roster_id,
            owner: roster
                .owner_id
                .as_deref()
                .and_then(|owner_id| owners.get(owner_id))
                .map(|user| user.label().to_string())
                .unwrap_or_else(|| String::from(UNKNOWN_OWNER)),
            wins: roster.settings.wins.unwrap_or(0),
            losses: roster.settings.losses.unwrap_or(0),
            ties: roster.settings.ties.unwrap_or(0),
            total_points: total_points(&roster.settings),
        })
        .collect();

    entries.sort_by(|a, b| {
        b.wins
            .cmp(&a.wins)
            .then_with(|| b.total_points.total_cmp(&a.total_points))
    });

    entries
}

pub fn aggregate(league: &LeagueRecord, rosters: &[RosterRecord], users: &[UserRecord]) -> Standings {
    Standings {
        season: league.season.clone(),
        league_name: league.name.clone(),
        standings: rank_rosters(rosters, users),
    }
}
