use std::{panic::AssertUnwindSafe, sync::Arc, time::Instant};

use async_trait::async_trait;
use futures::FutureExt;

use crate::table_data::{
    application::data_handlers::{
        cached_data_handler::CachedDataHandler, no_valid_data_handler::NoValidDataHandler,
        sql_data_handler::SqlDataHandler,
    },
    domain::{
        model::{
            entities::table_data::{TableData, TableDataResult},
            enums::table_data_domain_error::TableDataDomainError,
            queries::table_data_request::TableDataRequest,
            value_objects::elapsed_time::ElapsedTime,
        },
        services::{data_handler::DataHandler, table_data_query_service::TableDataQueryService},
    },
    infrastructure::persistence::repositories::{
        data_repository_factory::DataRepositoryFactory,
        table_data_cache_repository::TableDataCacheRepository,
    },
};

/// Chain of responsibility over an ordered list of [`DataHandler`]s.
///
/// The first handler whose `can_handle` answers `true` executes the request;
/// everything after it is never consulted. Execution is timed, faults are
/// contained, and the successful payload is stamped with the request identity
/// and the measured duration here, whichever handler produced the rows.
pub struct TableDataQueryServiceImpl {
    handlers: Vec<Arc<dyn DataHandler>>,
}

impl TableDataQueryServiceImpl {
    pub fn new(handlers: Vec<Arc<dyn DataHandler>>) -> Self {
        Self { handlers }
    }

    /// cache → relational database → terminal failure.
    pub fn with_default_chain(
        cache: Arc<dyn TableDataCacheRepository>,
        repository_factory: Arc<dyn DataRepositoryFactory>,
    ) -> Self {
        Self::new(vec![
            Arc::new(CachedDataHandler::new(cache)),
            Arc::new(SqlDataHandler::new(repository_factory)),
            Arc::new(NoValidDataHandler::new()),
        ])
    }

    pub fn handler_names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|handler| handler.name()).collect()
    }

    async fn execute_handler(
        handler: &dyn DataHandler,
        request: &TableDataRequest,
    ) -> TableDataResult {
        let started_at = Instant::now();

        let outcome = AssertUnwindSafe(handler.execute(request))
            .catch_unwind()
            .await;

        let elapsed = ElapsedTime::new(started_at.elapsed());
        tracing::info!(
            handler = handler.name(),
            elapsed = %elapsed,
            "data retrieval completed in {elapsed}"
        );

        match outcome {
            Ok(Ok(output)) => Ok(TableData::stamp(request, elapsed, output)),
            Ok(Err(error)) if error.is_fault() => {
                tracing::error!(
                    handler = handler.name(),
                    database_name = request.database_name(),
                    table_name = request.table_name(),
                    %error,
                    "unhandled error while retrieving the data from the table"
                );
                Err(TableDataDomainError::HandlerExecutionFault)
            }
            Ok(Err(error)) => Err(error),
            Err(panic) => {
                tracing::error!(
                    handler = handler.name(),
                    database_name = request.database_name(),
                    table_name = request.table_name(),
                    panic = panic_message(panic.as_ref()),
                    "handler panicked while retrieving the data from the table"
                );
                Err(TableDataDomainError::HandlerExecutionFault)
            }
        }
    }
}

#[async_trait]
impl TableDataQueryService for TableDataQueryServiceImpl {
    async fn handle_get_table_data(&self, request: &TableDataRequest) -> TableDataResult {
        for handler in &self.handlers {
            if handler.can_handle(request).await {
                return Self::execute_handler(handler.as_ref(), request).await;
            }
        }

        tracing::error!(
            severity = "critical",
            database_name = request.database_name(),
            table_name = request.table_name(),
            "no handler could handle the request for the table, {}, on the database, {}",
            request.table_name(),
            request.database_name()
        );
        Err(TableDataDomainError::NoCapableHandler)
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> &str {
    panic
        .downcast_ref::<&'static str>()
        .copied()
        .or_else(|| panic.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}
