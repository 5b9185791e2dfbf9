pub mod compact_table_data_response_resource;
pub mod table_data_response_resource;
