//! Fixture fetching: the season's match schedule with resolved team names

use chrono::{DateTime, NaiveDate};
use reqwest::Client;
use std::collections::HashMap;
use tracing::{debug, info, warn};

use super::fetch_utils::fetch;
use super::urls::build_fixtures_url;
use crate::config::Config;
use crate::data_fetcher::models::{ApiFixture, Fixture};
use crate::error::AppError;

/// Fetches the season's fixture list.
///
/// Rows without a parseable kickoff date (unscheduled fixtures carry a null
/// kickoff) are dropped, as are rows referencing a team id that is not in
/// the roster's team map.
///
/// # Arguments
/// * `client` - HTTP client for making requests
/// * `config` - Application configuration carrying the API base URL
/// * `teams` - Team-id to team-name mapping from the roster fetch
///
/// # Returns
/// * `Result<Vec<Fixture>, AppError>` - Dated fixtures in API order, or the
///   first fetch/parse error
pub async fn fetch_fixtures(
    client: &Client,
    config: &Config,
    teams: &HashMap<i64, String>,
) -> Result<Vec<Fixture>, AppError> {
    let url = build_fixtures_url(&config.api_base);
    let rows: Vec<ApiFixture> = fetch(client, &url).await?;
    let total_rows = rows.len();

    let mut fixtures = Vec::new();
    for row in rows {
        let Some(kickoff) = row.kickoff_time else {
            continue;
        };
        let Some(date) = parse_kickoff_date(&kickoff) else {
            debug!("Dropping fixture with unparseable kickoff time: {kickoff}");
            continue;
        };
        let (Some(home_team), Some(away_team)) = (teams.get(&row.team_h), teams.get(&row.team_a))
        else {
            warn!(
                "Dropping fixture with unknown team ids {} / {}",
                row.team_h, row.team_a
            );
            continue;
        };
        fixtures.push(Fixture {
            date,
            home_team: home_team.clone(),
            away_team: away_team.clone(),
        });
    }

    info!(
        "Fetched {} dated fixtures ({} rows in feed)",
        fixtures.len(),
        total_rows
    );
    Ok(fixtures)
}

/// Calendar date of an ISO 8601 kickoff timestamp, e.g. "2025-08-16T14:00:00Z".
fn parse_kickoff_date(raw: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kickoff_date() {
        assert_eq!(
            parse_kickoff_date("2025-08-16T14:00:00Z"),
            NaiveDate::from_ymd_opt(2025, 8, 16)
        );
        assert_eq!(
            parse_kickoff_date("2026-01-03T17:30:00+00:00"),
            NaiveDate::from_ymd_opt(2026, 1, 3)
        );
    }

    #[test]
    fn test_parse_kickoff_date_rejects_garbage() {
        assert_eq!(parse_kickoff_date(""), None);
        assert_eq!(parse_kickoff_date("not a date"), None);
        assert_eq!(parse_kickoff_date("2025-08-16"), None);
    }
}
