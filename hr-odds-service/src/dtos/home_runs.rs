use crate::models::{HitStatus, HomeRunRecord};
use crate::utils::{probability_to_american_odds, round_to};
use mongodb::bson::Bson;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use service_core::error::AppError;

#[derive(Debug, Deserialize)]
pub struct DayParams {
    pub date: Option<String>,
}

/// Display shape of a [`HomeRunRecord`]. Field names are what the web client
/// renders as column headers.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HomeRunProjection {
    #[serde(rename = "Player name")]
    pub player_name: String,
    #[serde(rename = "Model")]
    pub model: String,
    #[serde(rename = "Home run probability")]
    pub home_run_probability: f64,
    #[serde(rename = "Home run odds")]
    pub home_run_odds: String,
    #[serde(rename = "Did hit HR")]
    pub did_hit_hr: String,
    pub stats: Value,
    pub odds_data: Value,
}

impl TryFrom<HomeRunRecord> for HomeRunProjection {
    type Error = AppError;

    fn try_from(record: HomeRunRecord) -> Result<Self, Self::Error> {
        let did_hit_hr = HitStatus::try_from(&record.did_hit_hr).map_err(|e| {
            AppError::DataIntegrity(format!(
                "{} ({} on {}, model {})",
                e, record.player_name, record.date, record.model
            ))
        })?;

        let odds_data = match record.odds_data {
            None | Some(Bson::Null) => Value::Object(serde_json::Map::new()),
            Some(bson) => bson.into_relaxed_extjson(),
        };

        Ok(Self {
            home_run_probability: round_to(record.home_run_odds, 3),
            home_run_odds: probability_to_american_odds(record.home_run_odds),
            did_hit_hr: did_hit_hr.label().to_string(),
            stats: record.stats.into_relaxed_extjson(),
            odds_data,
            player_name: record.player_name,
            model: record.model,
        })
    }
}
