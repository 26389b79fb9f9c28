use serde::{Deserialize, Serialize};

/// One club row from the bootstrap endpoint's `teams` list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiTeam {
    pub id: i64,
    pub name: String,
}

/// One player row from the bootstrap endpoint's `elements` list.
/// `team` is a numeric id resolved through the `teams` list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiElement {
    pub first_name: String,
    pub second_name: String,
    /// Short display name, e.g. "J. Smith". Used as the fallback key when
    /// the full name has no entry in the birthday index.
    pub web_name: String,
    pub team: i64,
}

/// Response shape of the bootstrap endpoint. The endpoint returns far more
/// than this; only the fields this tool consumes are modeled and the rest
/// are ignored on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapResponse {
    pub teams: Vec<ApiTeam>,
    pub elements: Vec<ApiElement>,
}
