pub mod config;
pub mod shared;
pub mod table_data;
