pub mod sqlx_data_repository_factory_impl;
pub mod sqlx_data_repository_impl;
