pub mod home_runs;

pub use home_runs::{DayParams, HomeRunProjection};
