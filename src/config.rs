use std::env;

use anyhow::bail;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl StorageBackend {
    fn parse(value: &str) -> anyhow::Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "postgres" | "pg" => Ok(Self::Postgres),
            "memory" | "mem" => Ok(Self::Memory),
            other => bail!("unknown STORAGE_BACKEND `{other}` (expected postgres or memory)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage: StorageBackend,
    pub database_url: String,
    pub database_name: Option<String>,
    pub max_connections: u32,
    pub host: String,
    pub port: u16,
    /// `None` allows any origin.
    pub cors_origins: Option<Vec<String>>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let storage = match env::var("STORAGE_BACKEND") {
            Ok(value) => StorageBackend::parse(&value)?,
            Err(_) => StorageBackend::Postgres,
        };
        let database_url = match storage {
            StorageBackend::Postgres => env::var("DATABASE_URL")?,
            StorageBackend::Memory => env::var("DATABASE_URL").unwrap_or_default(),
        };
        let database_name = env::var("DB_NAME").ok().filter(|name| !name.is_empty());
        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|n| n.parse::<u32>().ok())
            .unwrap_or(10);
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let cors_origins = env::var("CORS_ORIGINS")
            .ok()
            .map(|raw| parse_origins(&raw))
            .filter(|origins| !origins.is_empty() && !origins.iter().any(|o| o == "*"));

        Ok(Self {
            storage,
            database_url,
            database_name,
            max_connections,
            host,
            port,
            cors_origins,
        })
    }

    /// Server URL joined with `DB_NAME` when one is configured.
    pub fn connection_string(&self) -> String {
        match &self.database_name {
            Some(name) => join_database(&self.database_url, name),
            None => self.database_url.clone(),
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

fn join_database(url: &str, name: &str) -> String {
    let (base, query) = match url.split_once('?') {
        Some((base, query)) => (base, Some(query)),
        None => (url, None),
    };
    // Drop an existing path component so DB_NAME wins.
    let authority_start = base.find("://").map(|i| i + 3).unwrap_or(0);
    let base = match base[authority_start..].find('/') {
        Some(slash) => &base[..authority_start + slash],
        None => base,
    };
    match query {
        Some(query) => format!("{base}/{name}?{query}"),
        None => format!("{base}/{name}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_name_is_appended_to_server_url() {
        assert_eq!(
            join_database("postgres://salon:pw@localhost:5432", "luna"),
            "postgres://salon:pw@localhost:5432/luna"
        );
    }

    #[test]
    fn database_name_replaces_existing_path_and_keeps_query() {
        assert_eq!(
            join_database("postgres://localhost/other?sslmode=disable", "luna"),
            "postgres://localhost/luna?sslmode=disable"
        );
    }

    #[test]
    fn origin_list_skips_blank_entries() {
        assert_eq!(parse_origins(" https://a.example , ,https://b.example"), vec![
            "https://a.example".to_string(),
            "https://b.example".to_string()
        ]);
    }

    #[test]
    fn storage_backend_parses_known_names() {
        assert_eq!(StorageBackend::parse("Memory").unwrap(), StorageBackend::Memory);
        assert_eq!(StorageBackend::parse("postgres").unwrap(), StorageBackend::Postgres);
        assert!(StorageBackend::parse("mongo").is_err());
    }
}
