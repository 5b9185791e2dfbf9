pub mod data_handlers;
pub mod query_services;
