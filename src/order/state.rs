//! In-memory order history

use super::models::OrderRecord;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct OrderLog {
    records: RwLock<Vec<OrderRecord>>,
}

impl OrderLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn append(&self, record: OrderRecord) {
        self.records.write().await.push(record);
    }

    /// Oldest first
    pub async fn list(&self) -> Vec<OrderRecord> {
        self.records.read().await.clone()
    }

    /// Empties the log, returning how many records were dropped.
    pub async fn clear(&self) -> usize {
        let mut records = self.records.write().await;
        let dropped = records.len();
        records.clear();
        dropped
    }
}
