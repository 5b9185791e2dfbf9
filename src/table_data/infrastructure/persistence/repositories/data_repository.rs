use async_trait::async_trait;

use crate::table_data::domain::model::{
    entities::table_record::TableRecord, enums::table_data_domain_error::TableDataDomainError,
};

/// Read access to the tables of one database.
#[async_trait]
pub trait DataRepository: Send + Sync {
    /// Looks the table up in the schema catalog with the name bound as a
    /// parameter, never interpolated.
    async fn table_exists(&self, table_name: &str) -> Result<bool, TableDataDomainError>;

    /// Schema that owns the table, or the default schema when the catalog has
    /// no entry for it.
    async fn table_schema(&self, table_name: &str) -> Result<String, TableDataDomainError>;

    /// All rows of the table. `None` means the query produced no rows.
    async fn get_rows(
        &self,
        table_name: &str,
    ) -> Result<Option<Vec<TableRecord>>, TableDataDomainError>;
}
