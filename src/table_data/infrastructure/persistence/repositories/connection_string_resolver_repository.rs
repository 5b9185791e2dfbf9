use async_trait::async_trait;

use crate::table_data::domain::model::enums::table_data_domain_error::TableDataDomainError;

#[async_trait]
pub trait ConnectionStringResolverRepository: Send + Sync {
    async fn resolve_connection_string(
        &self,
        database_name: &str,
    ) -> Result<Option<String>, TableDataDomainError>;
}
