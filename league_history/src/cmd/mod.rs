pub mod champions;
pub mod server;
pub mod standings;

use anyhow::{Context, Result};
use league_history_libs::sleeper::client::{SleeperClient, DEFAULT_SLEEPER_API_URL};
use std::env;

/// Creates the league data client from `SLEEPER_API_URL`.
pub fn sleeper_client() -> Result<SleeperClient> {
    let api_url = env::var("SLEEPER_API_URL").unwrap_or_else(|_| {
        tracing::warn!(
            "SLEEPER_API_URL environment variable is not set. Default value `{}` will be used.",
            DEFAULT_SLEEPER_API_URL
        );
        String::from(DEFAULT_SLEEPER_API_URL)
    });

    SleeperClient::new(&api_url).with_context(|| {
        let message = format!("couldn't create league data client for {}", api_url);
        tracing::error!(message);
        message
    })
}

/// League id given on the command line, or `LEAGUE_ID` from the environment.
pub fn league_id(arg: Option<String>) -> Result<String> {
    match arg {
        Some(league_id) => Ok(league_id),
        None => match env::var("LEAGUE_ID") {
            Ok(league_id) if !league_id.is_empty() => Ok(league_id),
            _ => {
                let message = "either --league-id or LEAGUE_ID must be set";
                tracing::error!(message);
                anyhow::bail!(message)
            }
        },
    }
}
