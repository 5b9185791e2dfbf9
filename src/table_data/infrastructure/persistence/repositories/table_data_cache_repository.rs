use std::sync::Arc;

use async_trait::async_trait;

use crate::table_data::domain::model::entities::table_record::TableRecord;

/// Process-wide rows cache keyed by `{database}.{table}`.
///
/// Entries expire on their own; nothing in the crate invalidates them.
#[async_trait]
pub trait TableDataCacheRepository: Send + Sync {
    async fn contains(&self, key: &str) -> bool;
    async fn get(&self, key: &str) -> Option<Arc<Vec<TableRecord>>>;
    async fn insert(&self, key: String, rows: Arc<Vec<TableRecord>>);
}
