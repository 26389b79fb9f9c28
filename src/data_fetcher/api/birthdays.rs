//! Birthday index building from the knowledge-base query service

use chrono::NaiveDate;
use reqwest::Client;
use tracing::{debug, info};

use super::fetch_utils::fetch;
use super::urls::{build_sparql_query, build_sparql_url};
use crate::config::Config;
use crate::data_fetcher::models::SparqlResponse;
use crate::error::AppError;
use crate::matcher::BirthdayIndex;

/// Builds the birthday index with one SPARQL query covering every team in
/// the allow-list. The service returns all rows in a single response; no
/// pagination is attempted.
///
/// Bindings missing a label or date, or carrying an unparseable date, are
/// skipped silently (logged at debug). Duplicate names keep the last value
/// written.
///
/// # Arguments
/// * `client` - HTTP client for making requests
/// * `config` - Application configuration carrying the SPARQL endpoint
///
/// # Returns
/// * `Result<BirthdayIndex, AppError>` - The name to birth-date index, or
///   the first fetch/parse error
pub async fn fetch_birthday_index(
    client: &Client,
    config: &Config,
) -> Result<BirthdayIndex, AppError> {
    let query = build_sparql_query();
    let url = build_sparql_url(&config.sparql_endpoint, &query)?;
    let response: SparqlResponse = fetch(client, &url).await?;
    let total_bindings = response.results.bindings.len();

    let mut index = BirthdayIndex::new();
    for binding in response.results.bindings {
        let (Some(label), Some(dob)) = (binding.player_label, binding.dob) else {
            debug!("Skipping binding with missing label or date of birth");
            continue;
        };
        let Some(birth_date) = parse_dob(&dob.value) else {
            debug!(
                "Skipping binding for '{}': unparseable date of birth '{}'",
                label.value, dob.value
            );
            continue;
        };
        index.insert(&label.value, birth_date);
    }

    info!(
        "Birthday index holds {} names ({} bindings returned)",
        index.len(),
        total_bindings
    );
    Ok(index)
}

/// Knowledge-base dates arrive as full timestamps, e.g. "1998-05-10T00:00:00Z";
/// only the calendar date part is kept.
fn parse_dob(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
