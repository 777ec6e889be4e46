use crate::models::HomeRunRecord;
use crate::services::MongoDb;
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{bson::doc, options::FindOptions, Collection};
use service_core::error::AppError;
use std::cmp::Ordering;
use std::sync::RwLock;

/// Read access to stored home-run predictions.
#[async_trait]
pub trait HomeRunStore: Send + Sync {
    /// All records whose `date` equals `date` exactly, highest
    /// `home_run_odds` first.
    async fn records_for_date(&self, date: &str) -> Result<Vec<HomeRunRecord>, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}

pub struct MongoHomeRunStore {
    db: MongoDb,
    records: Collection<HomeRunRecord>,
}

impl MongoHomeRunStore {
    pub fn new(db: MongoDb, collection: &str) -> Self {
        let records = db.collection(collection);
        Self { db, records }
    }
}

#[async_trait]
impl HomeRunStore for MongoHomeRunStore {
    async fn records_for_date(&self, date: &str) -> Result<Vec<HomeRunRecord>, AppError> {
        let find_options = FindOptions::builder()
            .projection(doc! {
                "_id": 0,
                "date": 1,
                "player_name": 1,
                "model": 1,
                "did_hit_hr": 1,
                "home_run_odds": 1,
                "stats": 1,
                "odds_data": 1,
            })
            .sort(doc! { "home_run_odds": -1 })
            .build();

        let cursor = self
            .records
            .find(doc! { "date": date }, find_options)
            .await
            .map_err(|e| {
                tracing::error!(date = %date, "Home run query failed: {}", e);
                AppError::from(e)
            })?;

        let records: Vec<HomeRunRecord> = cursor.try_collect().await.map_err(|e| {
            tracing::error!(date = %date, "Failed to read home run records: {}", e);
            AppError::from(e)
        })?;

        Ok(records)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.db.health_check().await
    }
}

/// Store backed by a vector, for tests and local runs without MongoDB.
#[derive(Default)]
pub struct InMemoryHomeRunStore {
    records: RwLock<Vec<HomeRunRecord>>,
    unavailable: bool,
}

impl InMemoryHomeRunStore {
    pub fn new(records: Vec<HomeRunRecord>) -> Self {
        Self {
            records: RwLock::new(records),
            unavailable: false,
        }
    }

    /// A store whose every call fails, as an unreachable database would.
    pub fn unavailable() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            unavailable: true,
        }
    }

    pub fn insert(&self, record: HomeRunRecord) -> Result<(), AppError> {
        self.records
            .write()
            .map_err(|e| AppError::InternalError(anyhow::anyhow!("Store lock poisoned: {}", e)))?
            .push(record);
        Ok(())
    }

    fn check_available(&self) -> Result<(), AppError> {
        if self.unavailable {
            return Err(AppError::DatabaseError(anyhow::anyhow!(
                "in-memory store marked unavailable"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl HomeRunStore for InMemoryHomeRunStore {
    async fn records_for_date(&self, date: &str) -> Result<Vec<HomeRunRecord>, AppError> {
        self.check_available()?;

        let mut matching: Vec<HomeRunRecord> = self
            .records
            .read()
            .map_err(|e| AppError::InternalError(anyhow::anyhow!("Store lock poisoned: {}", e)))?
            .iter()
            .filter(|r| r.date == date)
            .cloned()
            .collect();

        matching.sort_by(|a, b| by_odds_descending(a.home_run_odds, b.home_run_odds));
        Ok(matching)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check_available()
    }
}

/// MongoDB orders NaN below every number, so a descending sort puts it last.
fn by_odds_descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.total_cmp(&a),
    }
}
