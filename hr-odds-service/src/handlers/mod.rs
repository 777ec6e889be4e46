pub mod health;
pub mod home_runs;

pub use health::{health_check, metrics, readiness_check};
pub use home_runs::{get_hr_probs_for_day, index};
