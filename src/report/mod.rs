//! HTML report rendering and writing.
//!
//! The report is a single self-contained document: a summary line and one
//! card per birthday fixture, or a placeholder when there are none. Played
//! and upcoming fixtures get different card styling.

use chrono::{Datelike, NaiveDate};
use tracing::info;

use crate::error::AppError;
use crate::matcher::{MatchRecord, MatchStatus};

/// Escapes text for interpolation into HTML. Player and team names come
/// from external services and go straight into markup, so every
/// interpolated field passes through here.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Season label for the report summary, e.g. "2025-26" for any date from
/// July 2025 through June 2026.
pub fn season_label(today: NaiveDate) -> String {
    let start_year = if today.month() >= crate::constants::SEASON_START_MONTH {
        today.year()
    } else {
        today.year() - 1
    };
    format!("{}-{:02}", start_year, (start_year + 1) % 100)
}

fn status_css_class(status: MatchStatus) -> &'static str {
    match status {
        MatchStatus::Played => "played",
        MatchStatus::Upcoming => "upcoming",
    }
}

fn status_tag(status: MatchStatus) -> &'static str {
    match status {
        MatchStatus::Played => "✅ PLAYED",
        MatchStatus::Upcoming => "🔜 UPCOMING",
    }
}

const STYLE: &str = r#"        body { font-family: -apple-system, sans-serif; max-width: 800px; margin: 2rem auto; padding: 1rem; background: #f0f2f5; }
        h1 { text-align: center; color: #38003c; }
        .summary { text-align: center; margin-bottom: 2rem; color: #555; }
        .card { background: white; padding: 1.2rem; margin-bottom: 1rem; border-radius: 8px; display: flex; align-items: center; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }

        .played { border-left: 5px solid #aaa; opacity: 0.8; }
        .upcoming { border-left: 5px solid #00ff85; }

        .date-col { width: 80px; text-align: center; margin-right: 1rem; }
        .day { font-size: 1.4rem; font-weight: 800; color: #333; }
        .month { font-size: 0.8rem; text-transform: uppercase; font-weight: 700; color: #777; }

        .info-col { flex-grow: 1; }
        .player { font-size: 1.2rem; font-weight: 700; }
        .details { color: #555; }

        .status-tag { font-size: 0.7rem; padding: 2px 6px; border-radius: 4px; vertical-align: middle; margin-left: 10px; }
        .played .status-tag { background: #eee; color: #555; }
        .upcoming .status-tag { background: #00ff85; color: #38003c; font-weight: bold; }
"#;

fn render_card(record: &MatchRecord) -> String {
    format!(
        r#"    <div class="card {css_class}">
        <div class="date-col">
            <div class="day">{day}</div>
            <div class="month">{month}</div>
        </div>
        <div class="info-col">
            <div class="player">{player} <span class="status-tag">{tag}</span></div>
            <div class="details">Turn {age} • <b>{team}</b> {opponent}</div>
        </div>
    </div>
"#,
        css_class = status_css_class(record.status),
        day = record.date.day(),
        month = record.date.format("%b"),
        player = escape_html(&record.player),
        tag = status_tag(record.status),
        age = record.turning_age,
        team = escape_html(&record.team),
        opponent = escape_html(&record.opponent_descriptor()),
    )
}

/// Renders the full report document. An empty record list produces the
/// "no matches" placeholder instead of cards.
pub fn render_report(records: &[MatchRecord], today: NaiveDate) -> String {
    let mut html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Birthday Fixtures (Full Season)</title>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <style>
{STYLE}    </style>
</head>
<body>
    <h1>📅 Full Season Birthday Fixtures</h1>
    <div class="summary">Found {count} matches for the {season} Season</div>
"#,
        count = records.len(),
        season = season_label(today),
    );

    if records.is_empty() {
        html.push_str("    <p style='text-align:center'>No matches found.</p>\n");
    } else {
        for record in records {
            html.push_str(&render_card(record));
        }
    }

    html.push_str("</body></html>\n");
    html
}

/// Writes the report to `path`, overwriting any existing file.
pub async fn write_report(html: &str, path: &str) -> Result<(), AppError> {
    tokio::fs::write(path, html).await?;
    info!("Report written to {path}");
    Ok(())
}
