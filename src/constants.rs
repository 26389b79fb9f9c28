//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and fixed identifiers
//! to improve maintainability and make the codebase more configurable.

#![allow(dead_code)]

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// User-Agent sent with every request. Both the fantasy API and the
/// Wikidata query service reject requests without one.
pub const USER_AGENT: &str =
    "birthday_fixtures/0.3 (+https://github.com/birthday-fixtures/birthday_fixtures)";

/// Default relative path of the generated report
pub const DEFAULT_OUTPUT_FILE: &str = "index.html";

/// Default API endpoints, overridable via config file or environment
pub mod endpoints {
    /// Base URL of the fantasy league API (bootstrap + fixtures)
    pub const FANTASY_API_BASE: &str = "https://fantasy.premierleague.com/api";

    /// Wikidata SPARQL query service endpoint
    pub const SPARQL_ENDPOINT: &str = "https://query.wikidata.org/sparql";
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for fantasy API base URL override
    pub const FANTASY_API_BASE: &str = "BIRTHDAY_FIXTURES_API_BASE";

    /// Environment variable for SPARQL endpoint override
    pub const SPARQL_ENDPOINT: &str = "BIRTHDAY_FIXTURES_SPARQL_ENDPOINT";

    /// Environment variable for report output path override
    pub const OUTPUT_FILE: &str = "BIRTHDAY_FIXTURES_OUTPUT";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "BIRTHDAY_FIXTURES_LOG_FILE";

    /// Environment variable for HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "BIRTHDAY_FIXTURES_HTTP_TIMEOUT";
}

/// Wikidata identifiers for the birthday index query
pub mod wikidata {
    /// QIDs of the 20 clubs in the 2025-26 season. The birthday index
    /// query is restricted to players whose team membership (P54) is in
    /// this list.
    pub const TEAM_QIDS: [&str; 20] = [
        "Q9617", "Q965", "Q7156", "Q19571", "Q19422", "Q7141", "Q19424", "Q5794", "Q18755",
        "Q19651", "Q8100", "Q1130849", "Q50602", "Q18656", "Q18716", "Q19490", "Q18048", "Q18724",
        "Q18747", "Q5330",
    ];
}

/// Month in which a new season starts, used to derive the season label
/// shown in the report summary (July rollover).
pub const SEASON_START_MONTH: u32 = 7;
