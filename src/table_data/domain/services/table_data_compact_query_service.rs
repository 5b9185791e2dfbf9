use async_trait::async_trait;

use crate::table_data::domain::model::{
    entities::compact_table_data::CompactTableData,
    enums::table_data_domain_error::TableDataDomainError,
    queries::table_data_request::TableDataRequest,
};

#[async_trait]
pub trait TableDataCompactQueryService: Send + Sync {
    async fn handle_get_compact_table_data(
        &self,
        request: &TableDataRequest,
    ) -> Result<CompactTableData, TableDataDomainError>;
}
