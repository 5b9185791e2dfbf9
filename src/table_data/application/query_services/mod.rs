pub mod table_data_compact_query_service_impl;
pub mod table_data_query_service_impl;
