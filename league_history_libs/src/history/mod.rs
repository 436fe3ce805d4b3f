pub mod champions;
pub mod season;
pub mod standings;

use crate::sleeper::client::SleeperClientError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error(transparent)]
    ClientError(#[from] SleeperClientError),
    #[error("season {season} not found in history of league {league_id}")]
    SeasonNotFound { league_id: String, season: String },
    #[error("league {0} appears twice in league history")]
    CyclicHistory(String),
}
