use std::sync::Arc;

use async_trait::async_trait;

use crate::table_data::{
    domain::{
        model::{
            entities::compact_table_data::CompactTableData,
            enums::table_data_domain_error::TableDataDomainError,
            queries::table_data_request::TableDataRequest,
        },
        services::table_data_compact_query_service::TableDataCompactQueryService,
    },
    infrastructure::persistence::repositories::data_repository_factory::DataRepositoryFactory,
};

/// Reads a table from the relational source and returns it column-major,
/// without going through the handler chain or the cache.
pub struct TableDataCompactQueryServiceImpl {
    repository_factory: Arc<dyn DataRepositoryFactory>,
}

impl TableDataCompactQueryServiceImpl {
    pub fn new(repository_factory: Arc<dyn DataRepositoryFactory>) -> Self {
        Self { repository_factory }
    }
}

#[async_trait]
impl TableDataCompactQueryService for TableDataCompactQueryServiceImpl {
    async fn handle_get_compact_table_data(
        &self,
        request: &TableDataRequest,
    ) -> Result<CompactTableData, TableDataDomainError> {
        let repository = self
            .repository_factory
            .create_repository(request.database_name())
            .await
            .ok_or(TableDataDomainError::SourceUnavailable)?;

        if !repository.table_exists(request.table_name()).await? {
            return Err(TableDataDomainError::TableNotFound {
                table_name: request.table_name().to_string(),
                database_name: request.database_name().to_string(),
            });
        }

        let rows = repository
            .get_rows(request.table_name())
            .await
            .inspect_err(|error| {
                tracing::error!(
                    database_name = request.database_name(),
                    table_name = request.table_name(),
                    %error,
                    "error while getting compact data"
                );
            })?
            .unwrap_or_default();

        Ok(CompactTableData::from_records(rows))
    }
}
