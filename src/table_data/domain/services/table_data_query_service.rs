use async_trait::async_trait;

use crate::table_data::domain::model::{
    entities::table_data::TableDataResult, queries::table_data_request::TableDataRequest,
};

#[async_trait]
pub trait TableDataQueryService: Send + Sync {
    async fn handle_get_table_data(&self, request: &TableDataRequest) -> TableDataResult;
}
