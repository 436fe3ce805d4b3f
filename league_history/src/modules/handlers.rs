use crate::modules::{
    error::ApiResult,
    models::request::{LeagueDataRequest, ValidatedLeagueDataRequest},
};
use axum::{extract::Extension, http::StatusCode, Json};
use league_history_libs::{
    history::{champions::champion_history, season::find_season, standings::aggregate},
    sleeper::client::{LeagueDataClient, Resource, SleeperClient},
};
use serde_json::Value;
use std::sync::Arc;
use tokio::time::Instant;

pub async fn league_data(
    ValidatedLeagueDataRequest(request): ValidatedLeagueDataRequest,
    Extension(client): Extension<Arc<SleeperClient>>,
) -> ApiResult<Json<Value>> {
    let start_process = Instant::now();

    let body: Value = match &request {
        LeagueDataRequest::League { league_id } => {
            client.fetch(Resource::League(league_id)).await?
        }
        LeagueDataRequest::Users { league_id } => client.fetch(Resource::Users(league_id)).await?,
        LeagueDataRequest::Rosters { league_id } => {
            client.fetch(Resource::Rosters(league_id)).await?
        }
        LeagueDataRequest::Matchups { league_id, week } => {
            client.fetch(Resource::Matchups(league_id, *week)).await?
        }
        LeagueDataRequest::Drafts { league_id } => {
            client.fetch(Resource::Drafts(league_id)).await?
        }
        LeagueDataRequest::Standings { league_id, season } => {
            let season = find_season(client.as_ref(), league_id, season).await?;
            let standings = aggregate(&season.league, &season.rosters, &season.users);
            serde_json::to_value(standings)?
        }
        LeagueDataRequest::Champions { league_id } => {
            let history = champion_history(client.as_ref(), league_id).await;
            serde_json::to_value(history)?
        }
    };

    let time = Instant::now().duration_since(start_process).as_millis();
    tracing::info!(
        target: "querylog",
        "elapsed_time={} request={:?}",
        time, request
    );

    Ok(Json(body))
}

pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

pub async fn readiness(Extension(client): Extension<Arc<SleeperClient>>) -> StatusCode {
    match client.fetch::<Value>(Resource::NflState).await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!("league data provider is not available: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
