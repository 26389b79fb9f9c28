//! Birthday Fixture Report Generator Library
//!
//! This library fetches a league's live roster and fixture list, joins them
//! against a Wikidata birthday index by normalized player name, and renders
//! every fixture that lands on a player's birthday as a static HTML report.
//!
//! # Examples
//!
//! ```rust,no_run
//! use birthday_fixtures::app::collect_birthday_matches;
//! use birthday_fixtures::config::Config;
//! use birthday_fixtures::data_fetcher::api::create_http_client_with_timeout;
//! use birthday_fixtures::error::AppError;
//! use birthday_fixtures::report;
//! use chrono::NaiveDate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
//!     let today = NaiveDate::from_ymd_opt(2026, 5, 10).unwrap();
//!
//!     // Fetch, join and render
//!     let matches = collect_birthday_matches(&client, &config, today).await;
//!     let html = report::render_report(&matches, today);
//!     report::write_report(&html, &config.output_path).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod matcher;
pub mod report;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::models::{Fixture, Player};
pub use error::AppError;
pub use matcher::{BirthdayIndex, MatchRecord, MatchStatus, Venue, find_birthday_fixtures};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
