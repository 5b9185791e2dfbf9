pub mod caching;
pub mod configuration;
pub mod connection_string_resolver_repository;
pub mod data_repository;
pub mod data_repository_factory;
pub mod postgres;
pub mod table_data_cache_repository;
