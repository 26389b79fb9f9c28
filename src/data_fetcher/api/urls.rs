//! URL building utilities for API endpoints

use crate::error::AppError;

/// Builds the bootstrap URL for fetching the current roster and team list.
///
/// # Arguments
/// * `api_base` - The base URL of the fantasy league API
///
/// # Returns
/// * `String` - The complete bootstrap URL
///
/// # Example
/// ```
/// use birthday_fixtures::data_fetcher::api::build_bootstrap_url;
///
/// let url = build_bootstrap_url("https://fantasy.example.com/api");
/// assert_eq!(url, "https://fantasy.example.com/api/bootstrap-static/");
/// ```
pub fn build_bootstrap_url(api_base: &str) -> String {
    format!("{api_base}/bootstrap-static/")
}

/// Builds the fixtures URL for fetching the full season schedule.
///
/// # Arguments
/// * `api_base` - The base URL of the fantasy league API
///
/// # Returns
/// * `String` - The complete fixtures URL
///
/// # Example
/// ```
/// use birthday_fixtures::data_fetcher::api::build_fixtures_url;
///
/// let url = build_fixtures_url("https://fantasy.example.com/api");
/// assert_eq!(url, "https://fantasy.example.com/api/fixtures/");
/// ```
pub fn build_fixtures_url(api_base: &str) -> String {
    format!("{api_base}/fixtures/")
}

/// Builds the SPARQL query for the birthday index: every player whose team
/// membership (P54) is in the configured allow-list, with their date of
/// birth (P569) and an auto-language label.
///
/// # Returns
/// * `String` - The SPARQL query text, unencoded
pub fn build_sparql_query() -> String {
    let team_values = crate::constants::wikidata::TEAM_QIDS
        .iter()
        .map(|qid| format!("wd:{qid}"))
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        r#"SELECT ?playerLabel ?dob WHERE {{
  VALUES ?team {{ {team_values} }}
  ?player wdt:P54 ?team ; wdt:P569 ?dob .
  SERVICE wikibase:label {{ bd:serviceParam wikibase:language "[AUTO_LANGUAGE],en". }}
}}"#
    )
}

/// Builds the complete query-service URL with the SPARQL query and JSON
/// format as encoded query parameters.
///
/// # Arguments
/// * `endpoint` - The SPARQL query service endpoint
/// * `query` - The SPARQL query text
///
/// # Returns
/// * `Result<String, AppError>` - The complete URL, or an error if the
///   endpoint does not parse as a URL
///
/// # Example
/// ```
/// use birthday_fixtures::data_fetcher::api::build_sparql_url;
///
/// let url = build_sparql_url("https://sparql.example.com/query", "SELECT ?x WHERE {}").unwrap();
/// assert!(url.starts_with("https://sparql.example.com/query?format=json&query=SELECT"));
/// ```
pub fn build_sparql_url(endpoint: &str, query: &str) -> Result<String, AppError> {
    let url = reqwest::Url::parse_with_params(endpoint, &[("format", "json"), ("query", query)])
        .map_err(|e| AppError::invalid_url(format!("'{endpoint}': {e}")))?;
    Ok(url.into())
}
