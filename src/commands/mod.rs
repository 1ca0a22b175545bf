//! Command implementations for the league history CLI

pub mod fetch_history;
pub mod list_outputs;
pub mod run_fetcher;

#[cfg(test)]
mod tests;

use crate::{error::EspnError, LeagueId, Result, LEAGUE_ID_ENV_VAR};

/// The league id from the flag, else from `ESPN_FFL_LEAGUE_ID`.
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    league_id
        .or_else(|| {
            std::env::var(LEAGUE_ID_ENV_VAR)
                .ok()
                .and_then(|s| s.parse::<LeagueId>().ok())
        })
        .ok_or_else(|| EspnError::MissingLeagueId {
            env_var: LEAGUE_ID_ENV_VAR.to_string(),
        })
}
