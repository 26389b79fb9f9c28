use serde::{Deserialize, Serialize};

/// One row from the fixtures endpoint. Team sides are numeric ids resolved
/// through the bootstrap `teams` list; `kickoff_time` is null for fixtures
/// that have not been scheduled yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiFixture {
    pub team_h: i64,
    pub team_a: i64,
    #[serde(default)]
    pub kickoff_time: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_list_deserialization() {
        let json = r#"[
            {"team_h": 1, "team_a": 2, "kickoff_time": "2025-08-16T14:00:00Z", "event": 1},
            {"team_h": 3, "team_a": 4, "kickoff_time": null}
        ]"#;

        let fixtures: Vec<ApiFixture> = serde_json::from_str(json).unwrap();
        assert_eq!(fixtures.len(), 2);
        assert_eq!(fixtures[0].team_h, 1);
        assert_eq!(fixtures[0].team_a, 2);
        assert_eq!(
            fixtures[0].kickoff_time.as_deref(),
            Some("2025-08-16T14:00:00Z")
        );
        assert_eq!(fixtures[1].kickoff_time, None);
    }

    #[test]
    fn test_fixture_missing_kickoff_field_defaults_to_none() {
        let json = r#"{"team_h": 5, "team_a": 6}"#;
        let fixture: ApiFixture = serde_json::from_str(json).unwrap();
        assert_eq!(fixture.kickoff_time, None);
    }
}
