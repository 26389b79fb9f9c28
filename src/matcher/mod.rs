//! Joins roster, fixtures and the birthday index into birthday fixtures.
//!
//! The join is a two-key lookup with a fallback: a player's full name is
//! tried against the index first, then their short display name. Players
//! that resolve get every fixture of their team compared by calendar
//! month and day against their birth date.

use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;
use tracing::debug;

use crate::data_fetcher::models::{Fixture, Player};

/// Name-keyed birthday lookup built from the knowledge-base query.
///
/// Keys are lowercased, trimmed player names. A name appearing twice in the
/// source data keeps the last value written; attribution between two distinct
/// players sharing one name is ambiguous and deliberately left unresolved.
#[derive(Debug, Clone, Default)]
pub struct BirthdayIndex {
    entries: HashMap<String, NaiveDate>,
}

impl BirthdayIndex {
    pub fn new() -> Self {
        Self::default()
    }

    fn normalize(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// Inserts a birth date under the normalized form of `name`.
    /// Last write wins on key collisions.
    pub fn insert(&mut self, name: &str, birth_date: NaiveDate) {
        let key = Self::normalize(name);
        if let Some(previous) = self.entries.insert(key, birth_date)
            && previous != birth_date
        {
            debug!(
                "Birthday index collision for '{}': {} replaced by {}",
                name.trim(),
                previous,
                birth_date
            );
        }
    }

    /// Looks up a single name after normalization.
    pub fn get(&self, name: &str) -> Option<NaiveDate> {
        self.entries.get(&Self::normalize(name)).copied()
    }

    /// Two-step name resolution: the full name is tried first, the short
    /// display name is the fallback.
    pub fn resolve(&self, full_name: &str, web_name: &str) -> Option<NaiveDate> {
        self.get(full_name).or_else(|| self.get(web_name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Whether a fixture counts as already played relative to the run date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    Played,
    Upcoming,
}

impl MatchStatus {
    /// A fixture dated exactly on the run date is still upcoming; only a
    /// strictly earlier date counts as played.
    pub fn for_date(date: NaiveDate, today: NaiveDate) -> Self {
        if date < today {
            MatchStatus::Played
        } else {
            MatchStatus::Upcoming
        }
    }
}

/// Which side of the fixture the player's team is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Venue {
    Home,
    Away,
}

/// An output row: one fixture that falls on one player's birthday.
/// Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub date: NaiveDate,
    pub status: MatchStatus,
    pub player: String,
    pub team: String,
    /// Age the player turns on the day of the fixture. The fixture already
    /// shares the birth date's month and day, so the year difference is exact.
    pub turning_age: i32,
    pub venue: Venue,
    pub opponent: String,
}

impl MatchRecord {
    /// Venue marker plus opponent, e.g. "vs Arsenal" at home, "@ Arsenal" away.
    pub fn opponent_descriptor(&self) -> String {
        match self.venue {
            Venue::Home => format!("vs {}", self.opponent),
            Venue::Away => format!("@ {}", self.opponent),
        }
    }
}

/// Finds every fixture that lands on a player's birthday.
///
/// For each player, the birth date is taken from the player record if
/// already present, otherwise resolved through the index (full name, then
/// short display name). Players with no resolved birth date are skipped
/// without error. Each fixture involving the player's team is compared by
/// (month, day); both legs of a home/away pairing can match independently.
///
/// The result is sorted ascending by fixture date; the sort is stable, so
/// ties keep roster-then-fixture input order.
pub fn find_birthday_fixtures(
    players: &[Player],
    fixtures: &[Fixture],
    birthdays: &BirthdayIndex,
    today: NaiveDate,
) -> Vec<MatchRecord> {
    let mut records = Vec::new();

    for player in players {
        let Some(birth_date) = player
            .birth_date
            .or_else(|| birthdays.resolve(&player.full_name, &player.web_name))
        else {
            continue;
        };

        for fixture in fixtures {
            let venue = if fixture.home_team == player.team {
                Venue::Home
            } else if fixture.away_team == player.team {
                Venue::Away
            } else {
                continue;
            };

            if fixture.date.month() != birth_date.month()
                || fixture.date.day() != birth_date.day()
            {
                continue;
            }

            let opponent = match venue {
                Venue::Home => fixture.away_team.clone(),
                Venue::Away => fixture.home_team.clone(),
            };

            records.push(MatchRecord {
                date: fixture.date,
                status: MatchStatus::for_date(fixture.date, today),
                player: player.full_name.clone(),
                team: player.team.clone(),
                turning_age: fixture.date.year() - birth_date.year(),
                venue,
                opponent,
            });
        }
    }

    records.sort_by_key(|record| record.date);
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn player(full_name: &str, web_name: &str, team: &str) -> Player {
        Player {
            full_name: full_name.to_string(),
            web_name: web_name.to_string(),
            team: team.to_string(),
            birth_date: None,
        }
    }

    fn fixture(d: NaiveDate, home: &str, away: &str) -> Fixture {
        Fixture {
            date: d,
            home_team: home.to_string(),
            away_team: away.to_string(),
        }
    }

    #[test]
    fn test_index_normalizes_keys() {
        let mut index = BirthdayIndex::new();
        index.insert("  John Smith ", date(1998, 5, 10));

        assert_eq!(index.get("john smith"), Some(date(1998, 5, 10)));
        assert_eq!(index.get("JOHN SMITH"), Some(date(1998, 5, 10)));
        assert_eq!(index.get("John Smyth"), None);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_index_last_write_wins() {
        let mut index = BirthdayIndex::new();
        index.insert("John Smith", date(1990, 1, 1));
        index.insert("john smith", date(1998, 5, 10));

        assert_eq!(index.len(), 1);
        assert_eq!(index.get("John Smith"), Some(date(1998, 5, 10)));
    }

    #[test]
    fn test_resolve_prefers_full_name() {
        let mut index = BirthdayIndex::new();
        index.insert("John Smith", date(1998, 5, 10));
        index.insert("J. Smith", date(1990, 1, 1));

        assert_eq!(
            index.resolve("John Smith", "J. Smith"),
            Some(date(1998, 5, 10))
        );
    }

    #[test]
    fn test_resolve_falls_back_to_web_name() {
        let mut index = BirthdayIndex::new();
        index.insert("J. Smith", date(1998, 5, 10));

        assert_eq!(
            index.resolve("John Smith", "J. Smith"),
            Some(date(1998, 5, 10))
        );
        assert_eq!(index.resolve("Jane Doe", "J. Doe"), None);
    }

    #[test]
    fn test_status_boundary_today_is_upcoming() {
        let today = date(2026, 5, 10);
        assert_eq!(MatchStatus::for_date(today, today), MatchStatus::Upcoming);
        assert_eq!(
            MatchStatus::for_date(date(2026, 5, 9), today),
            MatchStatus::Played
        );
        assert_eq!(
            MatchStatus::for_date(date(2026, 5, 11), today),
            MatchStatus::Upcoming
        );
    }

    #[test]
    fn test_home_birthday_fixture_matches() {
        // Scenario: home fixture on the player's birthday, run date well before
        let players = vec![player("John Smith", "J. Smith", "Alpha FC")];
        let fixtures = vec![fixture(date(2026, 5, 10), "Alpha FC", "Beta FC")];
        let mut index = BirthdayIndex::new();
        index.insert("john smith", date(1998, 5, 10));

        let records = find_birthday_fixtures(&players, &fixtures, &index, date(2025, 1, 1));

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.date, date(2026, 5, 10));
        assert_eq!(record.player, "John Smith");
        assert_eq!(record.team, "Alpha FC");
        assert_eq!(record.turning_age, 28);
        assert_eq!(record.status, MatchStatus::Upcoming);
        assert_eq!(record.venue, Venue::Home);
        assert_eq!(record.opponent_descriptor(), "vs Beta FC");
    }

    #[test]
    fn test_away_birthday_fixture_uses_at_marker() {
        let players = vec![player("John Smith", "J. Smith", "Alpha FC")];
        let fixtures = vec![fixture(date(2026, 5, 10), "Beta FC", "Alpha FC")];
        let mut index = BirthdayIndex::new();
        index.insert("john smith", date(1998, 5, 10));

        let records = find_birthday_fixtures(&players, &fixtures, &index, date(2025, 1, 1));

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].venue, Venue::Away);
        assert_eq!(records[0].opponent_descriptor(), "@ Beta FC");
    }

    #[test]
    fn test_web_name_fallback_still_produces_record() {
        let players = vec![player("John Smith", "J. Smith", "Alpha FC")];
        let fixtures = vec![fixture(date(2026, 5, 10), "Alpha FC", "Beta FC")];
        let mut index = BirthdayIndex::new();
        index.insert("J. Smith", date(1998, 5, 10));

        let records = find_birthday_fixtures(&players, &fixtures, &index, date(2025, 1, 1));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].player, "John Smith");
    }

    #[test]
    fn test_unresolved_player_is_skipped_silently() {
        let players = vec![player("John Smith", "J. Smith", "Alpha FC")];
        let fixtures = vec![fixture(date(2026, 5, 10), "Alpha FC", "Beta FC")];
        let index = BirthdayIndex::new();

        let records = find_birthday_fixtures(&players, &fixtures, &index, date(2025, 1, 1));
        assert!(records.is_empty());
    }

    #[test]
    fn test_player_without_team_fixtures_produces_no_records() {
        let players = vec![player("John Smith", "J. Smith", "Gamma FC")];
        let fixtures = vec![fixture(date(2026, 5, 10), "Alpha FC", "Beta FC")];
        let mut index = BirthdayIndex::new();
        index.insert("john smith", date(1998, 5, 10));

        let records = find_birthday_fixtures(&players, &fixtures, &index, date(2025, 1, 1));
        assert!(records.is_empty());
    }

    #[test]
    fn test_both_legs_on_birthday_match_independently() {
        // Scenario: the reverse fixture also lands on the birthday month/day
        let players = vec![player("John Smith", "J. Smith", "Alpha FC")];
        let fixtures = vec![
            fixture(date(2025, 5, 10), "Alpha FC", "Beta FC"),
            fixture(date(2026, 5, 10), "Beta FC", "Alpha FC"),
        ];
        let mut index = BirthdayIndex::new();
        index.insert("john smith", date(1998, 5, 10));

        let records = find_birthday_fixtures(&players, &fixtures, &index, date(2026, 1, 1));

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, date(2025, 5, 10));
        assert_eq!(records[0].status, MatchStatus::Played);
        assert_eq!(records[0].turning_age, 27);
        assert_eq!(records[1].date, date(2026, 5, 10));
        assert_eq!(records[1].status, MatchStatus::Upcoming);
        assert_eq!(records[1].turning_age, 28);
    }

    #[test]
    fn test_month_day_must_both_match() {
        let players = vec![player("John Smith", "J. Smith", "Alpha FC")];
        let fixtures = vec![
            fixture(date(2026, 5, 11), "Alpha FC", "Beta FC"),
            fixture(date(2026, 6, 10), "Alpha FC", "Beta FC"),
        ];
        let mut index = BirthdayIndex::new();
        index.insert("john smith", date(1998, 5, 10));

        let records = find_birthday_fixtures(&players, &fixtures, &index, date(2025, 1, 1));
        assert!(records.is_empty());
    }

    #[test]
    fn test_records_come_out_sorted_by_date() {
        let players = vec![
            player("John Smith", "J. Smith", "Alpha FC"),
            player("Erik Jones", "E. Jones", "Beta FC"),
        ];
        let fixtures = vec![
            fixture(date(2026, 5, 10), "Alpha FC", "Gamma FC"),
            fixture(date(2025, 9, 2), "Delta FC", "Beta FC"),
        ];
        let mut index = BirthdayIndex::new();
        index.insert("john smith", date(1998, 5, 10));
        index.insert("erik jones", date(2001, 9, 2));

        let records = find_birthday_fixtures(&players, &fixtures, &index, date(2025, 1, 1));

        assert_eq!(records.len(), 2);
        assert!(records[0].date <= records[1].date);
        assert_eq!(records[0].player, "Erik Jones");
        assert_eq!(records[1].player, "John Smith");
    }

    #[test]
    fn test_matcher_is_deterministic() {
        let players = vec![
            player("John Smith", "J. Smith", "Alpha FC"),
            player("Erik Jones", "E. Jones", "Alpha FC"),
        ];
        let fixtures = vec![
            fixture(date(2025, 9, 2), "Alpha FC", "Beta FC"),
            fixture(date(2026, 5, 10), "Gamma FC", "Alpha FC"),
        ];
        let mut index = BirthdayIndex::new();
        index.insert("john smith", date(1998, 5, 10));
        index.insert("erik jones", date(2001, 9, 2));

        let today = date(2025, 10, 1);
        let first = find_birthday_fixtures(&players, &fixtures, &index, today);
        let second = find_birthday_fixtures(&players, &fixtures, &index, today);

        assert_eq!(first, second);
    }

    #[test]
    fn test_presupplied_birth_date_skips_index() {
        let mut p = player("John Smith", "J. Smith", "Alpha FC");
        p.birth_date = Some(date(1998, 5, 10));
        let fixtures = vec![fixture(date(2026, 5, 10), "Alpha FC", "Beta FC")];
        let index = BirthdayIndex::new();

        let records = find_birthday_fixtures(&[p], &fixtures, &index, date(2025, 1, 1));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].turning_age, 28);
    }
}
