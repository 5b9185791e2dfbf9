use std::{sync::Arc, time::Duration};

use axum::Router;

use crate::{
    config::app_config::AppConfig,
    table_data::{
        application::query_services::{
            table_data_compact_query_service_impl::TableDataCompactQueryServiceImpl,
            table_data_query_service_impl::TableDataQueryServiceImpl,
        },
        infrastructure::persistence::repositories::{
            caching::moka_table_data_cache_repository_impl::MokaTableDataCacheRepositoryImpl,
            configuration::app_config_connection_string_resolver_repository_impl::AppConfigConnectionStringResolverRepositoryImpl,
            postgres::sqlx_data_repository_factory_impl::SqlxDataRepositoryFactoryImpl,
        },
        interfaces::rest::controllers::table_data_rest_controller::{
            TableDataRestControllerState, router,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_table_data_router(config: &AppConfig) -> Router {
    let cache = Arc::new(MokaTableDataCacheRepositoryImpl::new(
        Duration::from_secs(config.table_data_cache_ttl_seconds),
        config.table_data_cache_max_entries,
    ));
    let connection_string_resolver = Arc::new(
        AppConfigConnectionStringResolverRepositoryImpl::new(config.clone()),
    );
    let repository_factory = Arc::new(SqlxDataRepositoryFactoryImpl::new(
        connection_string_resolver,
    ));

    let query_service = Arc::new(TableDataQueryServiceImpl::with_default_chain(
        cache.clone(),
        repository_factory.clone(),
    ));
    tracing::info!(
        handlers = ?query_service.handler_names(),
        databases = config.connection_strings.len(),
        "table data handler chain ready"
    );
    let compact_query_service = Arc::new(TableDataCompactQueryServiceImpl::new(repository_factory));

    router(TableDataRestControllerState {
        query_service,
        compact_query_service,
        cache,
    })
}
