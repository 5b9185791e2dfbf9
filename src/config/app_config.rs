use std::collections::HashMap;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub connection_strings: HashMap<String, String>,
    pub table_data_cache_ttl_seconds: u64,
    pub table_data_cache_max_entries: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            connection_strings: std::env::var("DATABASE_CONNECTION_STRINGS")
                .ok()
                .map(|raw| parse_connection_strings(&raw))
                .unwrap_or_default(),
            table_data_cache_ttl_seconds: std::env::var("TABLE_DATA_CACHE_TTL_SECONDS")
                .unwrap_or_else(|_| "3600".to_string())
                .parse()
                .unwrap_or(3600),
            table_data_cache_max_entries: std::env::var("TABLE_DATA_CACHE_MAX_ENTRIES")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()
                .unwrap_or(1000),
        }
    }

    pub fn connection_string_for(&self, database_name: &str) -> Option<&str> {
        self.connection_strings
            .get(database_name)
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty())
    }
}

/// Parses `Name=postgres://...;Other=postgres://...`. Only the first `=` of an
/// entry separates the name, so connection string query parameters survive.
pub fn parse_connection_strings(raw: &str) -> HashMap<String, String> {
    raw.split(';')
        .filter_map(|entry| {
            let (name, connection_string) = entry.split_once('=')?;
            let name = name.trim();
            if name.is_empty() {
                None
            } else {
                Some((name.to_string(), connection_string.trim().to_string()))
            }
        })
        .collect()
}
