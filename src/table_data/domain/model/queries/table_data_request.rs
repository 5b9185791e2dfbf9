/// Identifies one "rows of table T in database D" query.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TableDataRequest {
    database_name: String,
    table_name: String,
}

impl TableDataRequest {
    pub fn new(database_name: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            database_name: database_name.into(),
            table_name: table_name.into(),
        }
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Key under which the rows of this table are cached: `{database}.{table}`.
    pub fn cache_key(&self) -> String {
        format!("{}.{}", self.database_name, self.table_name)
    }
}
