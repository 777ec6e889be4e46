use mongodb::bson::Bson;
use serde::{Deserialize, Serialize};
use service_core::error::AppError;

/// One player's home-run prediction for one day, as written by the modelling
/// pipeline. This service only ever reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeRunRecord {
    /// `YYYY-MM-DD`
    pub date: String,
    pub player_name: String,
    pub model: String,
    /// Probability in [0, 1] despite the name.
    pub home_run_odds: f64,
    /// 0, 1 or 2. Kept as raw BSON because the producer may write it as a
    /// double.
    pub did_hit_hr: Bson,
    pub stats: Bson,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub odds_data: Option<Bson>,
}

/// Outcome of the game for the player, stored as 0, 1 or 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitStatus {
    No,
    Yes,
    Pending,
}

impl HitStatus {
    pub fn label(self) -> &'static str {
        match self {
            HitStatus::No => "No",
            HitStatus::Yes => "Yes",
            HitStatus::Pending => "---",
        }
    }
}

impl TryFrom<i64> for HitStatus {
    type Error = AppError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(HitStatus::No),
            1 => Ok(HitStatus::Yes),
            2 => Ok(HitStatus::Pending),
            other => Err(AppError::DataIntegrity(format!(
                "did_hit_hr must be 0, 1 or 2, found {}",
                other
            ))),
        }
    }
}

/// Accepts integer BSON and integral doubles (`1.0`), which is how the
/// producer writes the column once it has held a missing value.
impl TryFrom<&Bson> for HitStatus {
    type Error = AppError;

    fn try_from(value: &Bson) -> Result<Self, Self::Error> {
        match value {
            Bson::Int32(v) => HitStatus::try_from(i64::from(*v)),
            Bson::Int64(v) => HitStatus::try_from(*v),
            Bson::Double(v) if v.fract() == 0.0 => HitStatus::try_from(*v as i64),
            other => Err(AppError::DataIntegrity(format!(
                "did_hit_hr must be 0, 1 or 2, found {}",
                other
            ))),
        }
    }
}
