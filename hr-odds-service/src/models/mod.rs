pub mod home_run_record;

pub use home_run_record::{HitStatus, HomeRunRecord};
