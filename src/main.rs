// src/main.rs
use birthday_fixtures::app::collect_birthday_matches;
use birthday_fixtures::cli::Args;
use birthday_fixtures::config::Config;
use birthday_fixtures::data_fetcher::api::create_http_client_with_timeout;
use birthday_fixtures::error::AppError;
use birthday_fixtures::logging::setup_logging;
use birthday_fixtures::report;
use chrono::{Local, NaiveDate, Utc};
use clap::Parser;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Handle configuration display without touching the network
    if args.list_config {
        Config::display().await?;
        return Ok(());
    }

    let (log_file_path, _guard) = setup_logging(&args).await?;
    info!("Logs are being written to: {log_file_path}");

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;

    // Status classification date: --date override, otherwise the local
    // calendar date at run time
    let today = match &args.date {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| {
            AppError::datetime_parse_error(format!("Invalid --date '{raw}': {e}"))
        })?,
        None => Utc::now().with_timezone(&Local).date_naive(),
    };

    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;

    let matches = collect_birthday_matches(&client, &config, today).await;
    if matches.is_empty() {
        warn!("No birthday fixtures found for the season");
    }

    let html = report::render_report(&matches, today);
    let output_path = args.output.as_deref().unwrap_or(&config.output_path);
    report::write_report(&html, output_path).await?;

    Ok(())
}
