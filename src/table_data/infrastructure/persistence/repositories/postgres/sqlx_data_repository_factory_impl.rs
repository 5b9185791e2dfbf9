use std::{str::FromStr, sync::Arc};

use async_trait::async_trait;
use sqlx::postgres::PgConnectOptions;

use crate::table_data::infrastructure::persistence::repositories::{
    connection_string_resolver_repository::ConnectionStringResolverRepository,
    data_repository::DataRepository, data_repository_factory::DataRepositoryFactory,
    postgres::sqlx_data_repository_impl::SqlxDataRepositoryImpl,
};

/// Builds a [`SqlxDataRepositoryImpl`] per request from the configured
/// connection string.
///
/// Construction does not connect; the connection string only has to parse.
pub struct SqlxDataRepositoryFactoryImpl {
    connection_string_resolver: Arc<dyn ConnectionStringResolverRepository>,
}

impl SqlxDataRepositoryFactoryImpl {
    pub fn new(connection_string_resolver: Arc<dyn ConnectionStringResolverRepository>) -> Self {
        Self {
            connection_string_resolver,
        }
    }
}

#[async_trait]
impl DataRepositoryFactory for SqlxDataRepositoryFactoryImpl {
    async fn create_repository(&self, database_name: &str) -> Option<Arc<dyn DataRepository>> {
        let connection_string = match self
            .connection_string_resolver
            .resolve_connection_string(database_name)
            .await
        {
            Ok(Some(connection_string)) if !connection_string.trim().is_empty() => {
                connection_string
            }
            Ok(_) => {
                tracing::debug!(database_name, "no connection string configured");
                return None;
            }
            Err(error) => {
                tracing::warn!(database_name, %error, "connection string lookup failed");
                return None;
            }
        };

        match PgConnectOptions::from_str(&connection_string) {
            Ok(connect_options) => Some(Arc::new(SqlxDataRepositoryImpl::new(connect_options))),
            Err(error) => {
                tracing::warn!(database_name, %error, "connection string is malformed");
                None
            }
        }
    }
}
