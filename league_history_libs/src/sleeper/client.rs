use crate::sleeper::model::*;
use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::fmt;
use thiserror::Error;

type Result<T> = std::result::Result<T, SleeperClientError>;

pub const DEFAULT_SLEEPER_API_URL: &str = "https://api.sleeper.app/v1/";

#[derive(Debug, Error)]
pub enum SleeperClientError {
    #[error("failed to request to league data provider: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("failed to deserialize JSON data: {0}")]
    DeserializeError(#[from] serde_json::Error),
    #[error("invalid league data provider url given: {0}")]
    InvalidUrlError(#[from] url::ParseError),
    #[error("resource not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    UnexpectedError(String),
}

/// Read endpoints of the league data provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource<'a> {
    League(&'a str),
    Users(&'a str),
    Rosters(&'a str),
    Matchups(&'a str, u32),
    Drafts(&'a str),
    NflState,
}

impl Resource<'_> {
    /// Path relative to the provider base url. Identifiers are percent-encoded.
    pub fn path(&self) -> String {
        let encode = |id: &str| utf8_percent_encode(id, NON_ALPHANUMERIC).to_string();
        match self {
            Resource::League(id) => format!("league/{}", encode(id)),
            Resource::Users(id) => format!("league/{}/users", encode(id)),
            Resource::Rosters(id) => format!("league/{}/rosters", encode(id)),
            Resource::Matchups(id, week) => format!("league/{}/matchups/{}", encode(id), week),
            Resource::Drafts(id) => format!("league/{}/drafts", encode(id)),
            Resource::NflState => String::from("state/nfl"),
        }
    }
}

impl fmt::Display for Resource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[async_trait]
pub trait LeagueDataClient: Sync {
    async fn fetch<T>(&self, resource: Resource<'_>) -> Result<T>
    where
        T: DeserializeOwned + Send;

    /// The provider answers an unknown league with `null`, which is reported as `NotFound`.
    async fn league(&self, league_id: &str) -> Result<LeagueRecord> {
        self.fetch::<Option<LeagueRecord>>(Resource::League(league_id))
            .await?
            .ok_or_else(|| SleeperClientError::NotFound(format!("league {}", league_id)))
    }

    async fn users(&self, league_id: &str) -> Result<Vec<UserRecord>> {
        let users: Option<Vec<UserRecord>> = self.fetch(Resource::Users(league_id)).await?;
        Ok(users.unwrap_or_default())
    }

    async fn rosters(&self, league_id: &str) -> Result<Vec<RosterRecord>> {
        let rosters: Option<Vec<RosterRecord>> = self.fetch(Resource::Rosters(league_id)).await?;
        Ok(rosters.unwrap_or_default())
    }
}

pub struct SleeperClient {
    base_url: Url,
    client: Client,
}

impl SleeperClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{}/", base_url))?
        };
        if base_url.cannot_be_a_base() {
            return Err(SleeperClientError::UnexpectedError(format!(
                "{} cannot be used as a base url",
                base_url
            )));
        }

        let client = Client::builder().gzip(true).build()?;
        Ok(SleeperClient { base_url, client })
    }

    pub fn url(&self, resource: Resource<'_>) -> Result<Url> {
        Ok(self.base_url.join(&resource.path())?)
    }
}

#[async_trait]
impl LeagueDataClient for SleeperClient {
    async fn fetch<T>(&self, resource: Resource<'_>) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        let url = self.url(resource)?;
        tracing::debug!("GET {}", url);

        let res = self.client.get(url.clone()).send().await?;
        match res.status() {
            status if status.is_success() => {
                let body = res.text().await?;
                let value: T = serde_json::from_str(&body)?;
                Ok(value)
            }
            StatusCode::NOT_FOUND => Err(SleeperClientError::NotFound(resource.to_string())),
            status => Err(SleeperClientError::UnexpectedError(format!(
                "unexpected status [{}] from [{}]",
                status, url
            ))),
        }
    }
}
