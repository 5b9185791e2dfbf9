use async_trait::async_trait;

use crate::table_data::domain::model::{
    entities::handler_output::HandlerOutput, enums::table_data_domain_error::TableDataDomainError,
    queries::table_data_request::TableDataRequest,
};

/// One link of the table data handler chain.
///
/// The chain asks `can_handle` first and only calls `execute` on a link that
/// answered `true`. The two calls are independent, so `execute` must cope with
/// state that changed in between.
#[async_trait]
pub trait DataHandler: Send + Sync {
    fn name(&self) -> &'static str;

    async fn can_handle(&self, request: &TableDataRequest) -> bool;

    async fn execute(
        &self,
        request: &TableDataRequest,
    ) -> Result<HandlerOutput, TableDataDomainError>;
}
