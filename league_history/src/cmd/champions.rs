use crate::cmd::{league_id, sleeper_client};
use anyhow::{Context, Result};
use clap::Args;
use league_history_libs::history::champions::champion_history;

#[derive(Debug, Args)]
pub struct ChampionsArgs {
    #[arg(long)]
    league_id: Option<String>,
}

pub async fn run(args: ChampionsArgs) -> Result<()> {
    let league_id = league_id(args.league_id)?;
    let client = sleeper_client()?;

    tracing::info!("Start to walk champion history from league {}", league_id);
    let history = champion_history(&client, &league_id).await;
    tracing::info!("{} seasons collected.", history.len());

    let output = serde_json::to_string_pretty(&history)
        .context("failed to serialize champion history")?;
    println!("{}", output);

    Ok(())
}
