use crate::cmd::{league_id, sleeper_client};
use anyhow::{Context, Result};
use clap::Args;
use league_history_libs::history::{
    season::{fetch_season, find_season},
    standings::aggregate,
};

#[derive(Debug, Args)]
pub struct StandingsArgs {
    #[arg(long)]
    league_id: Option<String>,
    /// Season to look up in the league history. The given league itself is used when omitted.
    #[arg(long)]
    season: Option<String>,
}

pub async fn run(args: StandingsArgs) -> Result<()> {
    let league_id = league_id(args.league_id)?;
    let client = sleeper_client()?;

    let season = match &args.season {
        Some(season) => find_season(&client, &league_id, season)
            .await
            .with_context(|| {
                let message = format!("failed to find season {} of league {}", season, league_id);
                tracing::error!(message);
                message
            })?,
        None => fetch_season(&client, &league_id).await.with_context(|| {
            let message = format!("failed to fetch league {}", league_id);
            tracing::error!(message);
            message
        })?,
    };

    let standings = aggregate(&season.league, &season.rosters, &season.users);
    tracing::info!(
        "{} rosters ranked for season {} of {}",
        standings.standings.len(),
        standings.season,
        standings.league_name
    );

    let output =
        serde_json::to_string_pretty(&standings).context("failed to serialize standings")?;
    println!("{}", output);

    Ok(())
}
