/**
 * Server Configuration
 *
 * This module loads and validates the server configuration from environment
 * variables (after `.env` has been applied by `main`).
 *
 * # Configuration Sources
 *
 * - `SERVER_PORT` - HTTP port (default 5000)
 * - `DATABASE_URL` - full store URL; `sqlite:` selects SQLite
 * - `DB_SERVER`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`, `DB_ENCRYPT` -
 *   PostgreSQL connection parts, used when `DATABASE_URL` is not set
 * - `DB_MAX_CONNECTIONS`, `DB_QUERY_TIMEOUT_SECS` - pool sizing and per-query timeout
 * - `JWT_SECRET` - token signing secret, required, at least 32 bytes
 * - `BCRYPT_COST` - password hashing cost (default 10)
 * - `CORS_ORIGIN` - allowed browser origin (default: any)
 *
 * # Error Handling
 *
 * Every invalid or missing required value is a `ConfigError`. The server does
 * not start on a configuration error.
 */

use std::time::Duration;

use crate::shared::ConfigError;

const DEFAULT_SERVER_PORT: u16 = 5000;
const DEFAULT_PG_PORT: u16 = 5432;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 5;
const DEFAULT_BCRYPT_COST: u32 = 10;
const MIN_JWT_SECRET_LEN: usize = 32;

/// Where the store lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseTarget {
    /// A complete connection URL (`postgres://...` or `sqlite:...`)
    Url(String),
    /// PostgreSQL assembled from its parts
    Postgres {
        host: String,
        port: u16,
        user: String,
        password: String,
        database: String,
        /// Require TLS to the server
        encrypt: bool,
    },
}

/// Store adapter configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub target: DatabaseTarget,
    pub max_connections: u32,
    /// Upper bound for a single query round-trip and for pool acquisition
    pub query_timeout: Duration,
}

impl DatabaseConfig {
    /// Configuration for an explicit URL with default pool settings
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            target: DatabaseTarget::Url(url.into()),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            query_timeout: Duration::from_secs(DEFAULT_QUERY_TIMEOUT_SECS),
        }
    }

    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let target = match lookup("DATABASE_URL").filter(|url| !url.is_empty()) {
            Some(url) => DatabaseTarget::Url(url),
            None => DatabaseTarget::Postgres {
                host: required(lookup, "DB_SERVER")?,
                port: parse_or(lookup, "DB_PORT", DEFAULT_PG_PORT)?,
                user: required(lookup, "DB_USER")?,
                password: lookup("DB_PASSWORD").unwrap_or_default(),
                database: required(lookup, "DB_NAME")?,
                encrypt: lookup("DB_ENCRYPT").as_deref() == Some("true"),
            },
        };

        let max_connections = parse_or(lookup, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        if max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                name: "DB_MAX_CONNECTIONS",
                reason: "must be at least 1".to_string(),
            });
        }

        let timeout_secs = parse_or(lookup, "DB_QUERY_TIMEOUT_SECS", DEFAULT_QUERY_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                name: "DB_QUERY_TIMEOUT_SECS",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            target,
            max_connections,
            query_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Password hashing and token signing configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub bcrypt_cost: u32,
}

impl AuthConfig {
    /// Build and validate an auth configuration
    ///
    /// The secret must be at least 32 bytes; the cost must be in bcrypt's
    /// supported range (4..=31).
    pub fn new(jwt_secret: impl Into<String>, bcrypt_cost: u32) -> Result<Self, ConfigError> {
        let jwt_secret = jwt_secret.into();
        if jwt_secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::InvalidValue {
                name: "JWT_SECRET",
                reason: format!("must be at least {} bytes", MIN_JWT_SECRET_LEN),
            });
        }
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                name: "BCRYPT_COST",
                reason: "must be between 4 and 31".to_string(),
            });
        }
        Ok(Self { jwt_secret, bcrypt_cost })
    }

    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let secret = required(lookup, "JWT_SECRET")?;
        let cost = parse_or(lookup, "BCRYPT_COST", DEFAULT_BCRYPT_COST)?;
        Self::new(secret, cost)
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    /// Allowed browser origin; `None` allows any origin
    pub cors_origin: Option<String>,
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use employee_admin::backend::server::config::ServerConfig;
    ///
    /// let vars: HashMap<&str, &str> = HashMap::from([
    ///     ("DATABASE_URL", "sqlite::memory:"),
    ///     ("JWT_SECRET", "0123456789abcdef0123456789abcdef"),
    /// ]);
    /// let config = ServerConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
    /// assert_eq!(config.port, 5000);
    /// ```
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_or(&lookup, "SERVER_PORT", DEFAULT_SERVER_PORT)?,
            database: DatabaseConfig::from_lookup(&lookup)?,
            auth: AuthConfig::from_lookup(&lookup)?,
            cors_origin: lookup("CORS_ORIGIN").filter(|origin| !origin.is_empty()),
        })
    }
}

fn required(lookup: &impl Fn(&str) -> Option<String>, name: &'static str) -> Result<String, ConfigError> {
    lookup(name)
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::MissingValue(name))
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name).filter(|value| !value.is_empty()) {
        Some(raw) => raw.parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            name,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}
