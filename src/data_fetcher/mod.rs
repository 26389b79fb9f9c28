pub mod api;
pub mod models;

pub use api::{fetch_birthday_index, fetch_fixtures, fetch_roster};
pub use models::{Fixture, Player};
