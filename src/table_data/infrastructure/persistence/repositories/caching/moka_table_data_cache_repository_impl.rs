use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use moka::future::Cache;

use crate::table_data::{
    domain::model::entities::table_record::TableRecord,
    infrastructure::persistence::repositories::table_data_cache_repository::TableDataCacheRepository,
};

pub struct MokaTableDataCacheRepositoryImpl {
    entries: Cache<String, Arc<Vec<TableRecord>>>,
}

impl MokaTableDataCacheRepositoryImpl {
    /// Every entry lives for `time_to_live` from the moment it is written.
    pub fn new(time_to_live: Duration, max_entries: u64) -> Self {
        let entries = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(time_to_live)
            .build();

        Self { entries }
    }
}

#[async_trait]
impl TableDataCacheRepository for MokaTableDataCacheRepositoryImpl {
    async fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    async fn get(&self, key: &str) -> Option<Arc<Vec<TableRecord>>> {
        self.entries.get(key).await
    }

    async fn insert(&self, key: String, rows: Arc<Vec<TableRecord>>) {
        self.entries.insert(key, rows).await;
    }
}
