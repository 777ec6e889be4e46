pub mod date;
pub mod odds;

pub use date::normalize_date;
pub use odds::{probability_to_american_odds, round_to};
