use std::sync::Arc;

use async_trait::async_trait;

use crate::table_data::infrastructure::persistence::repositories::data_repository::DataRepository;

#[async_trait]
pub trait DataRepositoryFactory: Send + Sync {
    /// Never fails: an unknown or misconfigured database yields `None`.
    async fn create_repository(&self, database_name: &str) -> Option<Arc<dyn DataRepository>>;
}
