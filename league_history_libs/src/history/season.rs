use crate::{
    history::HistoryError,
    sleeper::{
        client::{LeagueDataClient, SleeperClientError},
        model::{LeagueRecord, RosterRecord, UserRecord},
    },
};
use std::collections::HashSet;

/// Records of one season of a league, fetched together.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonData {
    pub league: LeagueRecord,
    pub rosters: Vec<RosterRecord>,
    pub users: Vec<UserRecord>,
}

/// Returns the league id to visit, or `None` when `league_id` ends the history chain
/// (missing, empty, or `"0"`).
pub fn next_league_id(league_id: Option<&str>) -> Option<String> {
    match league_id {
        Some(id) if !id.is_empty() && id != "0" => Some(id.to_string()),
        _ => None,
    }
}

/// Fetches league, rosters and users of one league in parallel. Any failure fails the whole batch.
pub async fn fetch_season<C>(client: &C, league_id: &str) -> Result<SeasonData, SleeperClientError>
where
    C: LeagueDataClient,
{
    let (league, rosters, users) = futures::try_join!(
        client.league(league_id),
        client.rosters(league_id),
        client.users(league_id)
    )?;

    Ok(SeasonData {
        league,
        rosters,
        users,
    })
}

/// Follows `previous_league_id` from `start_league_id` until the league of `season` is found,
/// then fetches its rosters and users.
pub async fn find_season<C>(
    client: &C,
    start_league_id: &str,
    season: &str,
) -> Result<SeasonData, HistoryError>
where
    C: LeagueDataClient,
{
    let mut visited: HashSet<String> = HashSet::new();
    let mut current = next_league_id(Some(start_league_id));

    while let Some(league_id) = current {
        if !visited.insert(league_id.clone()) {
            tracing::error!(
                "league {} was visited twice while looking up season {}",
                league_id,
                season
            );
            return Err(HistoryError::CyclicHistory(league_id));
        }

        let league = client.league(&league_id).await?;
        if league.season == season {
            tracing::info!("season {} belongs to league {}", season, league_id);
            let (rosters, users) =
                futures::try_join!(client.rosters(&league_id), client.users(&league_id))?;
            return Ok(SeasonData {
                league,
                rosters,
                users,
            });
        }

        current = next_league_id(league.previous_league_id.as_deref());
    }

    Err(HistoryError::SeasonNotFound {
        league_id: start_league_id.to_string(),
        season: season.to_string(),
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::sleeper::client::SleeperClient;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn terminal_league_ids() {
        assert_eq!(next_league_id(None), None);
        assert_eq!(next_league_id(Some("")), None);
        assert_eq!(next_league_id(Some("0")), None);
        assert_eq!(next_league_id(Some("611")), Some(String::from("611")));
    }

    async fn mock_league(
        server: &MockServer,
        league_id: &str,
        season: &str,
        previous: Option<&str>,
    ) {
        let body = json!({
            "league_id": league_id,
            "name": format!("League {}", season),
            "season": season,
            "total_rosters": 2,
            "previous_league_id": previous
        });
        server
            .mock_async(|when, then| {
                when.method(GET).path(format!("/league/{}", league_id));
                then.status(200).json_body(body);
            })
            .await;
    }

    #[tokio::test]
    async fn fetch_season_joins_three_requests() {
        let server = MockServer::start_async().await;
        mock_league(&server, "300", "2023", Some("200")).await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/league/300/rosters");
                then.status(200).json_body(json!([
                    {"roster_id": 1, "owner_id": "u1", "settings": {"wins": 9}}
                ]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/league/300/users");
                then.status(200)
                    .json_body(json!([{"user_id": "u1", "display_name": "Alpha"}]));
            })
            .await;

        let client = SleeperClient::new(&server.base_url()).unwrap();
        let season = fetch_season(&client, "300").await.unwrap();

        assert_eq!(season.league.season, "2023");
        assert_eq!(season.rosters.len(), 1);
        assert_eq!(season.users[0].label(), "Alpha");
    }

    #[tokio::test]
    async fn fetch_season_fails_when_any_request_fails() {
        let server = MockServer::start_async().await;
        mock_league(&server, "300", "2023", None).await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/league/300/rosters");
                then.status(500);
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/league/300/users");
                then.status(200).json_body(json!([]));
            })
            .await;

        let client = SleeperClient::new(&server.base_url()).unwrap();
        let result = fetch_season(&client, "300").await;

        assert!(matches!(result, Err(SleeperClientError::UnexpectedError(_))));
    }

    #[tokio::test]
    async fn find_season_follows_previous_leagues() {
        let server = MockServer::start_async().await;
        mock_league(&server, "300", "2023", Some("200")).await;
        mock_league(&server, "200", "2022", Some("100")).await;
        mock_league(&server, "100", "2021", Some("0")).await;
        let rosters = server
            .mock_async(|when, then| {
                when.method(GET).path("/league/200/rosters");
                then.status(200).json_body(json!([]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/league/200/users");
                then.status(200).json_body(json!([]));
            })
            .await;

        let client = SleeperClient::new(&server.base_url()).unwrap();
        let season = find_season(&client, "300", "2022").await.unwrap();

        rosters.assert_async().await;
        assert_eq!(season.league.league_id, "200");
    }

    #[tokio::test]
    async fn find_season_reports_missing_season() {
        let server = MockServer::start_async().await;
        mock_league(&server, "300", "2023", Some("200")).await;
        mock_league(&server, "200", "2022", None).await;

        let client = SleeperClient::new(&server.base_url()).unwrap();
        let result = find_season(&client, "300", "2019").await;

        assert!(matches!(result, Err(HistoryError::SeasonNotFound { .. })));
    }

    #[tokio::test]
    async fn find_season_stops_on_cycle() {
        let server = MockServer::start_async().await;
        mock_league(&server, "300", "2023", Some("200")).await;
        mock_league(&server, "200", "2022", Some("300")).await;

        let client = SleeperClient::new(&server.base_url()).unwrap();
        let result = find_season(&client, "300", "2019").await;

        assert!(matches!(result, Err(HistoryError::CyclicHistory(id)) if id == "300"));
    }
}
