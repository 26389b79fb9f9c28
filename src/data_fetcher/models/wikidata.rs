use serde::{Deserialize, Serialize};

/// A single typed value inside a SPARQL binding. The query service wraps
/// every value in an object carrying type metadata; only `value` matters here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SparqlValue {
    pub value: String,
}

/// One result binding: a player label and a date of birth. Either side can
/// be absent in malformed rows, which the index builder skips.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerBinding {
    #[serde(rename = "playerLabel", default)]
    pub player_label: Option<SparqlValue>,
    #[serde(default)]
    pub dob: Option<SparqlValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SparqlResults {
    pub bindings: Vec<PlayerBinding>,
}

/// Response envelope of the SPARQL query service (`results.bindings`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SparqlResponse {
    pub results: SparqlResults,
}
