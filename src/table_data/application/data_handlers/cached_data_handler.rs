use std::sync::Arc;

use async_trait::async_trait;

use crate::table_data::{
    domain::{
        model::{
            entities::handler_output::HandlerOutput,
            enums::table_data_domain_error::TableDataDomainError,
            queries::table_data_request::TableDataRequest,
        },
        services::data_handler::DataHandler,
    },
    infrastructure::persistence::repositories::table_data_cache_repository::TableDataCacheRepository,
};

/// Serves rows previously written to the cache by the REST layer.
pub struct CachedDataHandler {
    cache: Arc<dyn TableDataCacheRepository>,
}

impl CachedDataHandler {
    pub const NAME: &'static str = "CachedDataHandler";

    pub fn new(cache: Arc<dyn TableDataCacheRepository>) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl DataHandler for CachedDataHandler {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn can_handle(&self, request: &TableDataRequest) -> bool {
        self.cache.contains(&request.cache_key()).await
    }

    async fn execute(
        &self,
        request: &TableDataRequest,
    ) -> Result<HandlerOutput, TableDataDomainError> {
        // The entry may have expired since `can_handle`.
        let rows = self
            .cache
            .get(&request.cache_key())
            .await
            .ok_or(TableDataDomainError::CacheMiss)?;

        Ok(HandlerOutput::cached(rows))
    }
}
