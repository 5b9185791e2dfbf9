use async_trait::async_trait;

use crate::table_data::domain::{
    model::{
        entities::handler_output::HandlerOutput,
        enums::table_data_domain_error::TableDataDomainError,
        queries::table_data_request::TableDataRequest,
    },
    services::data_handler::DataHandler,
};

/// Tail of the chain: accepts every request and always fails, so a request
/// nobody else wants still gets exactly one answer.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoValidDataHandler;

impl NoValidDataHandler {
    pub const NAME: &'static str = "NoValidDataHandler";

    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DataHandler for NoValidDataHandler {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn can_handle(&self, _request: &TableDataRequest) -> bool {
        true
    }

    async fn execute(
        &self,
        _request: &TableDataRequest,
    ) -> Result<HandlerOutput, TableDataDomainError> {
        Err(TableDataDomainError::NoValidDataHandler)
    }
}
