use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use sqlx::{
    Column, Connection, Executor, PgConnection, Row, TypeInfo, ValueRef,
    postgres::{PgConnectOptions, PgRow},
};

use crate::table_data::{
    domain::model::{
        entities::table_record::TableRecord, enums::table_data_domain_error::TableDataDomainError,
        value_objects::column_value::ColumnValue,
    },
    infrastructure::persistence::repositories::data_repository::DataRepository,
};

const DEFAULT_SCHEMA: &str = "public";

/// How a column is decoded, chosen from its Postgres type name.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ColumnKind {
    Bool,
    Int2,
    Int4,
    Int8,
    Float4,
    Float8,
    TimestampTz,
    Timestamp,
    Date,
    Time,
    Bytea,
    Text,
}

impl ColumnKind {
    fn from_type_name(type_name: &str) -> Self {
        match type_name {
            "BOOL" => Self::Bool,
            "INT2" => Self::Int2,
            "INT4" => Self::Int4,
            "INT8" => Self::Int8,
            "FLOAT4" => Self::Float4,
            "FLOAT8" => Self::Float8,
            "TIMESTAMPTZ" => Self::TimestampTz,
            "TIMESTAMP" => Self::Timestamp,
            "DATE" => Self::Date,
            "TIME" => Self::Time,
            "BYTEA" => Self::Bytea,
            // Rows arrive in text format, so every other type (numeric, uuid,
            // json, arrays, enums) reads back as its textual representation.
            _ => Self::Text,
        }
    }
}

/// PostgreSQL backed [`DataRepository`].
///
/// Every call opens its own connection and closes it before returning.
pub struct SqlxDataRepositoryImpl {
    connect_options: PgConnectOptions,
}

impl SqlxDataRepositoryImpl {
    pub fn new(connect_options: PgConnectOptions) -> Self {
        Self { connect_options }
    }

    async fn open_connection(&self) -> Result<PgConnection, TableDataDomainError> {
        PgConnection::connect_with(&self.connect_options)
            .await
            .map_err(|e| TableDataDomainError::InfrastructureError(e.to_string()))
    }

    async fn close_connection(connection: PgConnection) {
        if let Err(error) = connection.close().await {
            tracing::warn!(%error, "failed to close postgres connection cleanly");
        }
    }

    fn quote_identifier(identifier: &str) -> String {
        format!("\"{}\"", identifier.replace('"', "\"\""))
    }

    fn qualified_table(schema_name: &str, table_name: &str) -> String {
        format!(
            "{}.{}",
            Self::quote_identifier(schema_name),
            Self::quote_identifier(table_name)
        )
    }

    fn decode_record(row: &PgRow) -> Result<TableRecord, TableDataDomainError> {
        let mut record = TableRecord::with_capacity(row.columns().len());
        for column in row.columns() {
            let value = Self::decode_column(row, column.ordinal())
                .map_err(|e| TableDataDomainError::InfrastructureError(e.to_string()))?;
            record.insert(column.name().to_string(), value);
        }

        Ok(record)
    }

    fn decode_column(row: &PgRow, index: usize) -> Result<ColumnValue, sqlx::Error> {
        let raw = row.try_get_raw(index)?;
        if raw.is_null() {
            return Ok(ColumnValue::Null);
        }
        let kind = ColumnKind::from_type_name(raw.type_info().name());

        let value = match kind {
            ColumnKind::Bool => ColumnValue::Bool(row.try_get::<bool, _>(index)?),
            ColumnKind::Int2 => ColumnValue::Integer(row.try_get::<i16, _>(index)?.into()),
            ColumnKind::Int4 => ColumnValue::Integer(row.try_get::<i32, _>(index)?.into()),
            ColumnKind::Int8 => ColumnValue::Integer(row.try_get::<i64, _>(index)?),
            ColumnKind::Float4 => ColumnValue::Float(row.try_get::<f32, _>(index)?.into()),
            ColumnKind::Float8 => ColumnValue::Float(row.try_get::<f64, _>(index)?),
            ColumnKind::TimestampTz => {
                ColumnValue::Timestamp(row.try_get::<DateTime<Utc>, _>(index)?)
            }
            ColumnKind::Timestamp => {
                ColumnValue::LocalTimestamp(row.try_get::<NaiveDateTime, _>(index)?)
            }
            ColumnKind::Date => ColumnValue::Date(row.try_get::<NaiveDate, _>(index)?),
            ColumnKind::Time => ColumnValue::Time(row.try_get::<NaiveTime, _>(index)?),
            ColumnKind::Bytea => ColumnValue::Bytes(row.try_get::<Vec<u8>, _>(index)?),
            ColumnKind::Text => ColumnValue::Text(row.try_get_unchecked::<String, _>(index)?),
        };

        Ok(value)
    }
}

#[async_trait]
impl DataRepository for SqlxDataRepositoryImpl {
    async fn table_exists(&self, table_name: &str) -> Result<bool, TableDataDomainError> {
        let statement = r#"
            SELECT EXISTS (
                SELECT 1
                FROM information_schema.tables
                WHERE table_name = $1
            )
        "#;

        let mut connection = self.open_connection().await?;
        let result = sqlx::query_scalar::<_, bool>(statement)
            .bind(table_name)
            .fetch_one(&mut connection)
            .await;
        Self::close_connection(connection).await;

        result.map_err(|e| TableDataDomainError::InfrastructureError(e.to_string()))
    }

    async fn table_schema(&self, table_name: &str) -> Result<String, TableDataDomainError> {
        let statement = r#"
            SELECT table_schema::text
            FROM information_schema.tables
            WHERE table_name = $1
        "#;

        let mut connection = self.open_connection().await?;
        let result = sqlx::query_scalar::<_, String>(statement)
            .bind(table_name)
            .fetch_all(&mut connection)
            .await;
        Self::close_connection(connection).await;

        let schemas =
            result.map_err(|e| TableDataDomainError::InfrastructureError(e.to_string()))?;

        Ok(schemas
            .into_iter()
            .last()
            .unwrap_or_else(|| DEFAULT_SCHEMA.to_string()))
    }

    async fn get_rows(
        &self,
        table_name: &str,
    ) -> Result<Option<Vec<TableRecord>>, TableDataDomainError> {
        let schema_name = self.table_schema(table_name).await?;
        // Identifiers cannot be bound. The table name has already been matched
        // against the catalog through a bound parameter, and is quoted here.
        let statement = format!(
            "SELECT * FROM {}",
            Self::qualified_table(&schema_name, table_name)
        );

        let mut connection = self.open_connection().await?;
        // Unprepared statement: values come back in text format.
        let result = Executor::fetch_all(&mut connection, sqlx::raw_sql(&statement)).await;
        Self::close_connection(connection).await;

        let rows = result.map_err(|e| TableDataDomainError::InfrastructureError(e.to_string()))?;
        if rows.is_empty() {
            return Ok(None);
        }

        rows.iter()
            .map(Self::decode_record)
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }
}
