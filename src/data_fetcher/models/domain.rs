use chrono::NaiveDate;

/// A rostered player with the team name already resolved from the bootstrap
/// `teams` list. `birth_date` is unset after the roster fetch; the matcher
/// resolves it through the birthday index. A player constructed with a
/// birth date already present skips index resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub full_name: String,
    /// Short display name, the fallback lookup key.
    pub web_name: String,
    pub team: String,
    pub birth_date: Option<NaiveDate>,
}

/// A scheduled match with both sides resolved to team names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub date: NaiveDate,
    pub home_team: String,
    pub away_team: String,
}
