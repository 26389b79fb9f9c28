pub mod urls;
pub mod http_client;
mod fetch_utils;

mod birthdays;
mod fixtures;
mod roster;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
#[allow(unused_imports)]
pub use http_client::*;
// Re-export the fetch stages
pub use birthdays::fetch_birthday_index;
pub use fixtures::fetch_fixtures;
pub use roster::fetch_roster;
