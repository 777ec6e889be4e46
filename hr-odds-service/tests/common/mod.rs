#![allow(dead_code)]

use hr_odds_service::config::{CorsConfig, HrOddsConfig, MongoConfig};
use hr_odds_service::models::HomeRunRecord;
use hr_odds_service::services::{HomeRunStore, InMemoryHomeRunStore};
use hr_odds_service::startup::Application;
use hr_odds_service::{build_router, AppState};
use mongodb::bson::{bson, Bson};
use service_core::config::Config as CoreConfig;
use std::sync::Arc;

pub const TEST_DATE: &str = "2023-07-04";

pub fn test_config() -> HrOddsConfig {
    HrOddsConfig {
        common: CoreConfig {
            port: 0, // Random port for testing
            log_level: "error".to_string(),
        },
        mongodb: MongoConfig {
            uri: "mongodb://localhost:27017".to_string(),
            database: "home_run_data_test".to_string(),
            collection: "data".to_string(),
            username: None,
            password: None,
        },
        cors: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
        otlp_endpoint: None,
    }
}

pub fn record(
    date: &str,
    player_name: &str,
    home_run_odds: f64,
    did_hit_hr: i32,
    odds_data: Option<Bson>,
) -> HomeRunRecord {
    HomeRunRecord {
        date: date.to_string(),
        player_name: player_name.to_string(),
        model: "gbm_2023".to_string(),
        home_run_odds,
        did_hit_hr: Bson::Int32(did_hit_hr),
        stats: bson!({ "season_hr": 21, "barrel_pct": 0.192, "last_10": [0, 1, 0, 0, 1] }),
        odds_data,
    }
}

/// Two records for [`TEST_DATE`], stored lowest probability first, plus one
/// record on the following day.
pub fn fixture_records() -> Vec<HomeRunRecord> {
    vec![
        record(TEST_DATE, "Luis Arraez", 0.30, 0, None),
        record(
            TEST_DATE,
            "Shohei Ohtani",
            0.62,
            1,
            Some(bson!({ "fanduel": "+280", "draftkings": "+300" })),
        ),
        record("2023-07-05", "Matt Olson", 0.41, 2, None),
    ]
}

pub fn router_with(records: Vec<HomeRunRecord>) -> axum::Router {
    router_with_store(Arc::new(InMemoryHomeRunStore::new(records)))
}

pub fn router_with_store(store: Arc<dyn HomeRunStore>) -> axum::Router {
    build_router(AppState::new(store), &test_config().cors)
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    pub async fn spawn(records: Vec<HomeRunRecord>) -> Self {
        let store: Arc<dyn HomeRunStore> = Arc::new(InMemoryHomeRunStore::new(records));

        let app = Application::build_with_store(test_config(), store)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, port }
    }
}
