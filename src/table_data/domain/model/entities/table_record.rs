use indexmap::IndexMap;

use crate::table_data::domain::model::value_objects::column_value::ColumnValue;

/// One row, keyed by column name in source column order.
pub type TableRecord = IndexMap<String, ColumnValue>;
