use serde::Serialize;
use utoipa::ToSchema;

use crate::table_data::domain::model::{
    entities::compact_table_data::CompactTableData, value_objects::column_value::ColumnValue,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct CompactTableDataResponseResource {
    pub fields: Vec<String>,
    #[schema(value_type = Vec<Vec<Object>>)]
    pub data: Vec<Vec<ColumnValue>>,
}

impl From<CompactTableData> for CompactTableDataResponseResource {
    fn from(compact: CompactTableData) -> Self {
        Self {
            fields: compact.fields,
            data: compact.data,
        }
    }
}
