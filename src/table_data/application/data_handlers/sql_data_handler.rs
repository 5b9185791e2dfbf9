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
    infrastructure::persistence::repositories::{
        data_repository::DataRepository, data_repository_factory::DataRepositoryFactory,
    },
};

/// Reads rows straight from the relational database the request names.
pub struct SqlDataHandler {
    repository_factory: Arc<dyn DataRepositoryFactory>,
}

impl SqlDataHandler {
    pub const NAME: &'static str = "SqlDataHandler";

    pub fn new(repository_factory: Arc<dyn DataRepositoryFactory>) -> Self {
        Self { repository_factory }
    }

    async fn fetch_rows(
        repository: &dyn DataRepository,
        request: &TableDataRequest,
    ) -> Result<HandlerOutput, TableDataDomainError> {
        if !repository.table_exists(request.table_name()).await? {
            return Err(TableDataDomainError::TableNotFound {
                table_name: request.table_name().to_string(),
                database_name: request.database_name().to_string(),
            });
        }

        // A table without rows is "no data", not a failure.
        let rows = repository
            .get_rows(request.table_name())
            .await?
            .unwrap_or_default();

        Ok(HandlerOutput::counted(rows))
    }
}

#[async_trait]
impl DataHandler for SqlDataHandler {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Capable whenever the factory can build a repository for the database.
    /// The repository is built again in `execute`.
    async fn can_handle(&self, request: &TableDataRequest) -> bool {
        self.repository_factory
            .create_repository(request.database_name())
            .await
            .is_some()
    }

    async fn execute(
        &self,
        request: &TableDataRequest,
    ) -> Result<HandlerOutput, TableDataDomainError> {
        let repository = self
            .repository_factory
            .create_repository(request.database_name())
            .await
            .ok_or(TableDataDomainError::SourceUnavailable)?;

        match Self::fetch_rows(repository.as_ref(), request).await {
            Err(error) if error.is_fault() => {
                tracing::error!(
                    handler = Self::NAME,
                    database_name = request.database_name(),
                    table_name = request.table_name(),
                    %error,
                    "unhandled error while reading table data"
                );
                Err(TableDataDomainError::HandlerFault { handler: Self::NAME })
            }
            outcome => outcome,
        }
    }
}
