use async_trait::async_trait;

use crate::{
    config::app_config::AppConfig,
    table_data::{
        domain::model::enums::table_data_domain_error::TableDataDomainError,
        infrastructure::persistence::repositories::connection_string_resolver_repository::ConnectionStringResolverRepository,
    },
};

pub struct AppConfigConnectionStringResolverRepositoryImpl {
    config: AppConfig,
}

impl AppConfigConnectionStringResolverRepositoryImpl {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ConnectionStringResolverRepository for AppConfigConnectionStringResolverRepositoryImpl {
    async fn resolve_connection_string(
        &self,
        database_name: &str,
    ) -> Result<Option<String>, TableDataDomainError> {
        Ok(self
            .config
            .connection_string_for(database_name)
            .map(str::to_string))
    }
}
