use std::sync::Arc;

use serde::Serialize;
use utoipa::ToSchema;

use crate::table_data::domain::model::{
    entities::{table_data::TableData, table_record::TableRecord},
    queries::table_data_request::TableDataRequest,
    value_objects::elapsed_time::ElapsedTime,
};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableDataResponseResource {
    pub database_name: String,
    pub table_name: String,
    #[schema(example = "0:00:00:00.0123456")]
    pub elapsed_time: String,
    pub number_of_records: u64,
    #[schema(value_type = Vec<Object>)]
    pub data: Vec<TableRecord>,
}

impl TableDataResponseResource {
    /// The single shape every failure collapses to, so callers cannot tell an
    /// unknown database or table from an empty one.
    pub fn empty(request: &TableDataRequest) -> Self {
        Self {
            database_name: request.database_name().to_string(),
            table_name: request.table_name().to_string(),
            elapsed_time: ElapsedTime::zero().to_string(),
            number_of_records: 0,
            data: Vec::new(),
        }
    }
}

impl From<TableData> for TableDataResponseResource {
    fn from(table_data: TableData) -> Self {
        let number_of_records = table_data.record_count.unwrap_or(table_data.rows.len()) as u64;

        Self {
            database_name: table_data.database_name,
            table_name: table_data.table_name,
            elapsed_time: table_data.elapsed.to_string(),
            number_of_records,
            data: Arc::unwrap_or_clone(table_data.rows),
        }
    }
}
