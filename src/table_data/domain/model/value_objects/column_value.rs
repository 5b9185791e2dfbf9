use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Serialize, Serializer};

/// A single column value read from a source table.
///
/// Serializes untagged, so `data` arrays stay plain JSON scalars. Binary values
/// are rendered as base64 strings and date/time values as ISO 8601 strings.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColumnValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Timestamp(DateTime<Utc>),
    LocalTimestamp(NaiveDateTime),
    Date(NaiveDate),
    Time(NaiveTime),
    #[serde(serialize_with = "serialize_bytes")]
    Bytes(Vec<u8>),
}

fn serialize_bytes<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&STANDARD.encode(bytes))
}

impl From<&str> for ColumnValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}
