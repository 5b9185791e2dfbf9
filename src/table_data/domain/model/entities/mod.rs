pub mod compact_table_data;
pub mod handler_output;
pub mod table_data;
pub mod table_record;
