use crate::{
    history::{
        season::{fetch_season, next_league_id, SeasonData},
        standings::rank_rosters,
    },
    sleeper::client::{LeagueDataClient, SleeperClientError},
};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, collections::HashSet, future::Future};

pub const UNKNOWN_CHAMPION: &str = "Unknown";

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct ChampionHistoryEntry {
    pub season: String,
    pub league_id: String,
    pub name: String,
    pub champion: String,
    pub total_rosters: u32,
}

impl ChampionHistoryEntry {
    /// The champion is the roster ranked first by wins, then total points.
    pub fn from_season(season: &SeasonData) -> Self {
        let champion = rank_rosters(&season.rosters, &season.users)
            .into_iter()
            .next()
            .map(|entry| entry.owner)
            .unwrap_or_else(|| String::from(UNKNOWN_CHAMPION));

        Self {
            season: season.league.season.clone(),
            league_id: season.league.league_id.clone(),
            name: season.league.name.clone(),
            champion,
            total_rosters: season.league.total_rosters,
        }
    }
}

/// Newest season first. Seasons compare as numbers when both are numeric.
fn by_season_descending(a: &ChampionHistoryEntry, b: &ChampionHistoryEntry) -> Ordering {
    match (a.season.parse::<i64>(), b.season.parse::<i64>()) {
        (Ok(a), Ok(b)) => b.cmp(&a),
        _ => b.season.cmp(&a.season),
    }
}

/// Walks the league history backwards from `start_league_id`, one season per hop.
///
/// The walk ends at the first league without a previous league, at the first failed fetch, or
/// when a league id comes up a second time. Seasons collected up to that point are returned,
/// newest first.
pub async fn walk<F, Fut>(start_league_id: &str, mut fetch: F) -> Vec<ChampionHistoryEntry>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<SeasonData, SleeperClientError>>,
{
    let mut history: Vec<ChampionHistoryEntry> = Vec::new();
    let mut visited: HashSet<String> = HashSet::new();
    let mut current = next_league_id(Some(start_league_id));

    while let Some(league_id) = current {
        if !visited.insert(league_id.clone()) {
            tracing::warn!("league {} was already visited, stop walking history", league_id);
            break;
        }

        let season = match fetch(league_id.clone()).await {
            Ok(season) => season,
            Err(SleeperClientError::NotFound(resource)) => {
                tracing::info!("{} not found, history ends at league {}", resource, league_id);
                break;
            }
            Err(e) => {
                tracing::warn!("failed to fetch league {}, history is partial: {}", league_id, e);
                break;
            }
        };

        let entry = ChampionHistoryEntry::from_season(&season);
        tracing::info!("season {} champion: {}", entry.season, entry.champion);
        history.push(entry);

        current = next_league_id(season.league.previous_league_id.as_deref());
    }

    history.sort_by(by_season_descending);
    history
}

pub async fn champion_history<C>(client: &C, start_league_id: &str) -> Vec<ChampionHistoryEntry>
where
    C: LeagueDataClient,
{
    walk(start_league_id, |league_id| async move {
        fetch_season(client, &league_id).await
    })
    .await
}
