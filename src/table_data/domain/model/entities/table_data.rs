use std::sync::Arc;

use crate::table_data::domain::model::{
    entities::{handler_output::HandlerOutput, table_record::TableRecord},
    enums::{row_origin::RowOrigin, table_data_domain_error::TableDataDomainError},
    queries::table_data_request::TableDataRequest,
    value_objects::elapsed_time::ElapsedTime,
};

/// A successful answer to a [`TableDataRequest`], stamped by the handler chain.
#[derive(Clone, Debug, PartialEq)]
pub struct TableData {
    pub database_name: String,
    pub table_name: String,
    pub elapsed: ElapsedTime,
    pub rows: Arc<Vec<TableRecord>>,
    pub record_count: Option<usize>,
    pub origin: RowOrigin,
}

impl TableData {
    pub fn stamp(request: &TableDataRequest, elapsed: ElapsedTime, output: HandlerOutput) -> Self {
        Self {
            database_name: request.database_name().to_string(),
            table_name: request.table_name().to_string(),
            elapsed,
            rows: output.rows,
            record_count: output.record_count,
            origin: output.origin,
        }
    }

    /// Only rows read from the relational source are written back to the
    /// cache, so an entry's time to live runs from the database read.
    pub fn is_cacheable(&self) -> bool {
        self.origin == RowOrigin::Database
    }
}

pub type TableDataResult = Result<TableData, TableDataDomainError>;
