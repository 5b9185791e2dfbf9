use table_data_api::table_data::domain::model::{
    entities::table_record::TableRecord, queries::table_data_request::TableDataRequest,
    value_objects::column_value::ColumnValue,
};

pub const SALES_DATABASE: &str = "Sales";
pub const ORDERS_TABLE: &str = "Orders";

pub fn request(database_name: &str, table_name: &str) -> TableDataRequest {
    TableDataRequest::new(database_name, table_name)
}

pub fn order(id: i64, customer: &str, total: f64, shipped: bool) -> TableRecord {
    TableRecord::from([
        ("id".to_string(), ColumnValue::Integer(id)),
        ("customer".to_string(), ColumnValue::from(customer)),
        ("total".to_string(), ColumnValue::Float(total)),
        ("shipped".to_string(), ColumnValue::Bool(shipped)),
        ("notes".to_string(), ColumnValue::Null),
    ])
}

pub fn orders_rows() -> Vec<TableRecord> {
    vec![
        order(1, "Ada", 19.99, true),
        order(2, "Grace", 250.0, false),
        order(3, "Linus", 7.5, true),
    ]
}
