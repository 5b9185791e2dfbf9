pub mod data_handler;
pub mod table_data_compact_query_service;
pub mod table_data_query_service;
