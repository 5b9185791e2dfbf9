use std::sync::Arc;

use crate::table_data::domain::model::{
    entities::table_record::TableRecord, enums::row_origin::RowOrigin,
};

/// What a concrete data handler is allowed to produce.
///
/// Identity and timing are stamped later by the handler chain.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HandlerOutput {
    pub rows: Arc<Vec<TableRecord>>,
    pub record_count: Option<usize>,
    pub origin: RowOrigin,
}

impl HandlerOutput {
    /// Rows freshly read from the relational source, counted.
    pub fn counted(rows: Vec<TableRecord>) -> Self {
        Self {
            record_count: Some(rows.len()),
            rows: Arc::new(rows),
            origin: RowOrigin::Database,
        }
    }

    /// Rows shared with a cache entry. The count is left unset.
    pub fn cached(rows: Arc<Vec<TableRecord>>) -> Self {
        Self {
            rows,
            record_count: None,
            origin: RowOrigin::Cache,
        }
    }
}
