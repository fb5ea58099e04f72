use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use axum::http::HeaderValue;
use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// A configuration variable that was present but could not be parsed.
#[derive(Debug, thiserror::Error)]
#[error("{key} must be a valid {expected}, got '{value}'")]
pub struct ConfigError {
    pub key: &'static str,
    pub expected: &'static str,
    pub value: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Log method, path, and `Origin` of every request at debug level.
    pub log_requests: bool,
    /// Emit logs as JSON lines instead of the human-readable format.
    pub log_json: bool,
    pub database: DatabaseConfig,
}

/// Connection settings for PostgreSQL.
#[derive(Clone)]
pub struct DatabaseConfig {
    /// Full connection URL. When set, the individual parts below are ignored.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
    /// CA bundle for `verify-ca` TLS. Plain connections when unset.
    pub ssl_root_cert: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `LOG_REQUESTS`         | `false`                    |
    /// | `LOG_FORMAT`           | `text` (`json` to switch)  |
    ///
    /// Database variables are listed on [`DatabaseConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&lookup, "PORT", 8000u16, "u16")?;

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                origin.parse::<HeaderValue>().map_err(|_| ConfigError {
                    key: "CORS_ORIGINS",
                    expected: "origin list",
                    value: origin.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let request_timeout_secs = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30u64, "u64")?;
        let log_requests = parse_flag(&lookup, "LOG_REQUESTS", false)?;
        let log_json = lookup("LOG_FORMAT").is_some_and(|v| v.eq_ignore_ascii_case("json"));

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            log_requests,
            log_json,
            database: DatabaseConfig::from_lookup(&lookup)?,
        })
    }

    /// The `host:port` string the listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    /// | Env Var              | Default        |
    /// |----------------------|----------------|
    /// | `DATABASE_URL`       | unset          |
    /// | `DB_HOST`            | `localhost`    |
    /// | `DB_PORT`            | `5432`         |
    /// | `DB_USER`            | `postgres`     |
    /// | `DB_PASSWORD`        | `password`     |
    /// | `DB_NAME`            | `pupil_study`  |
    /// | `DB_MAX_CONNECTIONS` | `10`           |
    /// | `DB_SSL_ROOT_CERT`   | unset          |
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            url: lookup("DATABASE_URL").filter(|s| !s.is_empty()),
            host: lookup("DB_HOST").unwrap_or_else(|| "localhost".into()),
            port: parse_or(lookup, "DB_PORT", 5432u16, "u16")?,
            user: lookup("DB_USER").unwrap_or_else(|| "postgres".into()),
            password: lookup("DB_PASSWORD").unwrap_or_else(|| "password".into()),
            name: lookup("DB_NAME").unwrap_or_else(|| "pupil_study".into()),
            max_connections: parse_or(lookup, "DB_MAX_CONNECTIONS", 10u32, "u32")?,
            ssl_root_cert: lookup("DB_SSL_ROOT_CERT")
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
        })
    }

    /// Build driver connect options.
    ///
    /// Credentials are passed as discrete fields, so passwords containing
    /// URL-reserved characters need no escaping.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        let options = match &self.url {
            Some(url) => PgConnectOptions::from_str(url)?,
            None => PgConnectOptions::new()
                .host(&self.host)
                .port(self.port)
                .username(&self.user)
                .password(&self.password)
                .database(&self.name),
        };

        Ok(match &self.ssl_root_cert {
            Some(path) => options.ssl_mode(PgSslMode::VerifyCa).ssl_root_cert(path),
            None => options,
        })
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("max_connections", &self.max_connections)
            .field("ssl_root_cert", &self.ssl_root_cert)
            .finish()
    }
}

fn parse_or<F, T>(
    lookup: &F,
    key: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError {
            key,
            expected,
            value: raw,
        }),
    }
}

fn parse_flag<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" | "" => Ok(false),
            _ => Err(ConfigError {
                key,
                expected: "boolean",
                value: raw,
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
        assert_eq!(
            config.cors_origins,
            vec![HeaderValue::from_static("http://localhost:3000")]
        );
        assert_eq!(config.request_timeout_secs, 30);
        assert!(!config.log_requests);
        assert!(!config.log_json);
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.database.name, "pupil_study");
        assert_eq!(config.database.max_connections, 10);
        assert!(config.database.url.is_none());
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let config = load(&[(
            "CORS_ORIGINS",
            " https://study.example.org , ,http://localhost:3001",
        )])
        .unwrap();
        assert_eq!(
            config.cors_origins,
            vec![
                HeaderValue::from_static("https://study.example.org"),
                HeaderValue::from_static("http://localhost:3001"),
            ]
        );
    }

    #[test]
    fn invalid_port_is_reported_with_key() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert_eq!(err.key, "PORT");
        assert_eq!(err.to_string(), "PORT must be a valid u16, got 'eighty'");
    }

    #[test]
    fn log_flags_parse() {
        let config = load(&[("LOG_REQUESTS", "yes"), ("LOG_FORMAT", "JSON")]).unwrap();
        assert!(config.log_requests);
        assert!(config.log_json);

        assert!(load(&[("LOG_REQUESTS", "maybe")]).is_err());
    }

    #[test]
    fn password_is_redacted_in_debug_output() {
        let config = load(&[("DB_PASSWORD", "p@ss:word/1")]).unwrap();
        let rendered = format!("{:?}", config.database);
        assert!(!rendered.contains("p@ss:word/1"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn connect_options_accept_reserved_characters_in_password() {
        let config =
            load(&[("DB_PASSWORD", "p@ss:word/1"), ("DB_HOST", "db.internal")]).unwrap();
        let options = config.database.connect_options().unwrap();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 5432);
    }

    #[test]
    fn database_url_takes_precedence() {
        let config = load(&[
            ("DATABASE_URL", "postgres://u:p@remote:6543/other"),
            ("DB_HOST", "ignored"),
        ])
        .unwrap();
        let options = config.database.connect_options().unwrap();
        assert_eq!(options.get_host(), "remote");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_database(), Some("other"));
    }
}
