//! Run orchestration: the fetch stages in order, with the failure-to-empty
//! policy that keeps the rendered report whole.

use chrono::NaiveDate;
use reqwest::Client;
use tracing::{info, warn};

use crate::config::Config;
use crate::data_fetcher::api::{fetch_birthday_index, fetch_fixtures, fetch_roster};
use crate::matcher::{MatchRecord, find_birthday_fixtures};

/// Runs the three fetch stages sequentially and joins the results.
///
/// A failure in any stage aborts the remaining stages and yields an empty
/// list, so the caller always renders a complete document: real matches or
/// the "no matches" placeholder, never a partial list. Individual bad
/// records were already skipped inside the fetch stages.
pub async fn collect_birthday_matches(
    client: &Client,
    config: &Config,
    today: NaiveDate,
) -> Vec<MatchRecord> {
    let (players, teams) = match fetch_roster(client, config).await {
        Ok(roster) => roster,
        Err(e) => {
            warn!("Roster fetch failed, reporting zero matches: {e}");
            return Vec::new();
        }
    };
    if players.is_empty() {
        warn!("Roster is empty, nothing to match");
        return Vec::new();
    }

    let fixtures = match fetch_fixtures(client, config, &teams).await {
        Ok(fixtures) => fixtures,
        Err(e) => {
            warn!("Fixtures fetch failed, reporting zero matches: {e}");
            return Vec::new();
        }
    };

    let birthdays = match fetch_birthday_index(client, config).await {
        Ok(index) => index,
        Err(e) => {
            warn!("Birthday index query failed, reporting zero matches: {e}");
            return Vec::new();
        }
    };
    if birthdays.is_empty() {
        warn!("Birthday index is empty, reporting zero matches");
        return Vec::new();
    }

    let records = find_birthday_fixtures(&players, &fixtures, &birthdays, today);
    info!("Matched {} birthday fixtures", records.len());
    records
}
