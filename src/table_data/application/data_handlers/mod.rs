pub mod cached_data_handler;
pub mod no_valid_data_handler;
pub mod sql_data_handler;
