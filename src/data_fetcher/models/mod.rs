pub mod bootstrap;
pub mod domain;
pub mod fixtures;
pub mod wikidata;

pub use bootstrap::{ApiElement, ApiTeam, BootstrapResponse};
pub use domain::{Fixture, Player};
pub use fixtures::ApiFixture;
pub use wikidata::{PlayerBinding, SparqlResponse, SparqlResults, SparqlValue};
