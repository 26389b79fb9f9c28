//! Roster fetching: current players and team names from the bootstrap endpoint

use reqwest::Client;
use std::collections::HashMap;
use tracing::{info, warn};

use super::fetch_utils::fetch;
use super::urls::build_bootstrap_url;
use crate::config::Config;
use crate::data_fetcher::models::{BootstrapResponse, Player};
use crate::error::AppError;

/// Fetches the current roster from the bootstrap endpoint.
///
/// Returns the players in API order with birth dates unresolved, plus the
/// team-id to team-name mapping the fixture fetch needs to resolve sides.
/// A player row referencing an unknown team id is skipped with a warning;
/// it could never match a fixture side anyway.
///
/// # Arguments
/// * `client` - HTTP client for making requests
/// * `config` - Application configuration carrying the API base URL
///
/// # Returns
/// * `Result<(Vec<Player>, HashMap<i64, String>), AppError>` - Players and
///   the team map, or the first fetch/parse error
pub async fn fetch_roster(
    client: &Client,
    config: &Config,
) -> Result<(Vec<Player>, HashMap<i64, String>), AppError> {
    let url = build_bootstrap_url(&config.api_base);
    let response: BootstrapResponse = fetch(client, &url).await?;

    let teams: HashMap<i64, String> = response
        .teams
        .into_iter()
        .map(|team| (team.id, team.name))
        .collect();

    let mut players = Vec::with_capacity(response.elements.len());
    for element in response.elements {
        let Some(team_name) = teams.get(&element.team) else {
            warn!(
                "Skipping player {} {}: unknown team id {}",
                element.first_name, element.second_name, element.team
            );
            continue;
        };
        players.push(Player {
            full_name: format!("{} {}", element.first_name, element.second_name),
            web_name: element.web_name,
            team: team_name.clone(),
            birth_date: None,
        });
    }

    info!(
        "Fetched {} players across {} teams",
        players.len(),
        teams.len()
    );
    Ok((players, teams))
}
