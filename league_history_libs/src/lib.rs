pub mod history;
pub mod sleeper;

pub use history::{
    champions::{champion_history, walk, ChampionHistoryEntry},
    season::{fetch_season, find_season, next_league_id, SeasonData},
    standings::{aggregate, rank_rosters, total_points, Standings, StandingsEntry},
    HistoryError,
};
pub use sleeper::{
    client::{LeagueDataClient, Resource, SleeperClient, SleeperClientError},
    model::{LeagueRecord, RosterRecord, RosterSettings, UserRecord},
};
