use crate::modules::error::ApiError;
use axum::async_trait;
use axum::extract::FromRequestParts;
use http::request::Parts;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    League,
    Users,
    Rosters,
    Matchups,
    Drafts,
    Standings,
    Champions,
}

impl FromStr for DataType {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "league" => Ok(DataType::League),
            "users" => Ok(DataType::Users),
            "rosters" => Ok(DataType::Rosters),
            "matchups" => Ok(DataType::Matchups),
            "drafts" => Ok(DataType::Drafts),
            "standings" => Ok(DataType::Standings),
            "champions" => Ok(DataType::Champions),
            _ => Err(ApiError::BadRequest(String::from(
                "Invalid data type requested.",
            ))),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, PartialEq, Eq, Default)]
pub struct LeagueDataQueryParameters {
    #[validate(length(max = 64))]
    #[serde(rename = "leagueId")]
    pub league_id: Option<String>,
    #[serde(rename = "dataType")]
    pub data_type: Option<String>,
    pub week: Option<String>,
    pub season: Option<String>,
}

#[derive(Debug, Validate)]
struct MatchupWeek {
    #[validate(range(min = 1, max = 18))]
    week: u32,
}

#[derive(Debug, Validate)]
struct StandingsSeason {
    #[validate(length(equal = 4))]
    season: String,
}

fn validation_error(rejection: validator::ValidationErrors) -> ApiError {
    ApiError::BadRequest(format!("Validation error: [{}]", rejection).replace('\n', ", "))
}

fn matchup_week(week: Option<&str>) -> Result<u32, ApiError> {
    let week = match week.map(str::trim) {
        Some(week) if !week.is_empty() => week,
        _ => return Err(ApiError::BadRequest(String::from("Week is required for matchups."))),
    };
    let week = week
        .parse::<u32>()
        .map_err(|e| ApiError::BadRequest(format!("Validation error: [week: {}]", e)))?;
    MatchupWeek { week }.validate().map_err(validation_error)?;

    Ok(week)
}

fn standings_season(season: Option<&str>) -> Result<String, ApiError> {
    let season = match season.map(str::trim) {
        Some(season) if !season.is_empty() => season,
        _ => {
            return Err(ApiError::BadRequest(String::from(
                "Season is required for standings.",
            )))
        }
    };
    let season = StandingsSeason {
        season: season.to_string(),
    };
    season.validate().map_err(validation_error)?;

    Ok(season.season)
}

/// A query that passed validation, with the parameters its data type needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeagueDataRequest {
    League { league_id: String },
    Users { league_id: String },
    Rosters { league_id: String },
    Matchups { league_id: String, week: u32 },
    Drafts { league_id: String },
    Standings { league_id: String, season: String },
    Champions { league_id: String },
}

impl TryFrom<LeagueDataQueryParameters> for LeagueDataRequest {
    type Error = ApiError;

    fn try_from(params: LeagueDataQueryParameters) -> Result<Self, Self::Error> {
        let league_id = match params.league_id.as_deref() {
            Some(league_id) if !league_id.trim().is_empty() => league_id.trim().to_string(),
            _ => return Err(ApiError::BadRequest(String::from("League ID is required."))),
        };
        let data_type: DataType = params.data_type.as_deref().unwrap_or_default().parse()?;

        params.validate().map_err(validation_error)?;

        let request = match data_type {
            DataType::League => LeagueDataRequest::League { league_id },
            DataType::Users => LeagueDataRequest::Users { league_id },
            DataType::Rosters => LeagueDataRequest::Rosters { league_id },
            DataType::Matchups => LeagueDataRequest::Matchups {
                week: matchup_week(params.week.as_deref())?,
                league_id,
            },
            DataType::Drafts => LeagueDataRequest::Drafts { league_id },
            DataType::Standings => LeagueDataRequest::Standings {
                season: standings_season(params.season.as_deref())?,
                league_id,
            },
            DataType::Champions => LeagueDataRequest::Champions { league_id },
        };

        Ok(request)
    }
}

pub struct ValidatedLeagueDataRequest(pub LeagueDataRequest);

#[async_trait]
impl<S> FromRequestParts<S> for ValidatedLeagueDataRequest
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = parts.uri.query().unwrap_or_default();
        let params: LeagueDataQueryParameters =
            serde_urlencoded::from_str(query).map_err(|rejection| {
                tracing::error!("Parsing error: {}", rejection);
                ApiError::BadRequest(format!("invalid format query string: [{}]", rejection))
            })?;

        let request = LeagueDataRequest::try_from(params).map_err(|rejection| {
            tracing::error!("Validation error: {}", rejection);
            rejection
        })?;

        Ok(ValidatedLeagueDataRequest(request))
    }
}
