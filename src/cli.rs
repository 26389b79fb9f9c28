use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Birthday fixture report generator
///
/// Fetches the league's live roster and full season fixture list, joins them
/// against a Wikidata birthday index by player name, and writes a static HTML
/// report of every fixture that lands on a player's birthday.
///
/// Runs once, top to bottom, and exits. With no flags the report is written
/// to ./index.html.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Write the report to this path instead of the configured output path.
    #[arg(short = 'o', long = "output", help_heading = "Output Options")]
    pub output: Option<String>,

    /// Classify fixtures as played/upcoming relative to this date (YYYY-MM-DD)
    /// instead of today. Useful for reproducible runs and testing.
    #[arg(short = 'd', long = "date", help_heading = "Output Options")]
    pub date: Option<String>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug logging on stdout in addition to the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
