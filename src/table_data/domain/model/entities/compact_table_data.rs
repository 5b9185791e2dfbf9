use crate::table_data::domain::model::{
    entities::table_record::TableRecord, value_objects::column_value::ColumnValue,
};

/// Column names once, then each row as a positional value array.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompactTableData {
    pub fields: Vec<String>,
    pub data: Vec<Vec<ColumnValue>>,
}

impl CompactTableData {
    /// Field order follows the first record. Columns missing from a later
    /// record are filled with [`ColumnValue::Null`].
    pub fn from_records(records: Vec<TableRecord>) -> Self {
        let fields = records
            .first()
            .map(|record| record.keys().cloned().collect::<Vec<_>>())
            .unwrap_or_default();

        let data = records
            .into_iter()
            .map(|mut record| {
                fields
                    .iter()
                    .map(|field| record.swap_remove(field).unwrap_or(ColumnValue::Null))
                    .collect()
            })
            .collect();

        Self { fields, data }
    }
}
