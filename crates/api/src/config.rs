use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use axum::http::HeaderValue;
use intake_db::DEFAULT_MAX_CONNECTIONS;

/// A configuration value that must never appear in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Redacted(String);

impl Redacted {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Redacted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[redacted]")
    }
}

/// Which origins may call the API from a browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// `*` -- the public form may be embedded on any site.
    Any,
    List(Vec<HeaderValue>),
}

/// Credentials for the account created at startup when none exists yet.
#[derive(Debug, Clone)]
pub struct SeedAdmin {
    pub username: String,
    pub password: Redacted,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// `postgres://...` or `sqlite:...`; the scheme selects the engine.
    pub database_url: Redacted,
    pub database_max_connections: u32,
    pub cors_origins: CorsOrigins,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory served for paths no API route matches.
    pub static_dir: Option<PathBuf>,
    /// HMAC secret for bearer tokens.
    pub jwt_secret: Redacted,
    pub seed_admin: Option<SeedAdmin>,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                    | Required | Default   |
    /// |----------------------------|----------|-----------|
    /// | `DATABASE_URL`             | **yes**  | --        |
    /// | `JWT_SECRET`               | **yes**  | --        |
    /// | `HOST`                     | no       | `0.0.0.0` |
    /// | `PORT`                     | no       | `3000`    |
    /// | `DATABASE_MAX_CONNECTIONS` | no       | `5`       |
    /// | `CORS_ORIGINS`             | no       | `*`       |
    /// | `REQUEST_TIMEOUT_SECS`     | no       | `30`      |
    /// | `STATIC_DIR`               | no       | --        |
    /// | `SEED_ADMIN_USERNAME`      | no       | --        |
    /// | `SEED_ADMIN_PASSWORD`      | no       | --        |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let jwt_secret = get("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let host = get("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(get("PORT"), "PORT", 3000u16)?;
        let database_max_connections = parse_or(
            get("DATABASE_MAX_CONNECTIONS"),
            "DATABASE_MAX_CONNECTIONS",
            DEFAULT_MAX_CONNECTIONS,
        )?;
        if database_max_connections == 0 {
            return Err(ConfigError::Invalid {
                var: "DATABASE_MAX_CONNECTIONS",
                reason: "must be at least 1".into(),
            });
        }
        let request_timeout_secs = parse_or(get("REQUEST_TIMEOUT_SECS"), "REQUEST_TIMEOUT_SECS", 30u64)?;
        let cors_origins = parse_cors_origins(get("CORS_ORIGINS").as_deref().unwrap_or("*"))?;
        let static_dir = get("STATIC_DIR").map(PathBuf::from);

        let seed_admin = match (get("SEED_ADMIN_USERNAME"), get("SEED_ADMIN_PASSWORD")) {
            (Some(username), Some(password)) => Some(SeedAdmin {
                username,
                password: Redacted::new(password),
            }),
            (None, None) => None,
            _ => {
                return Err(ConfigError::Invalid {
                    var: "SEED_ADMIN_USERNAME",
                    reason: "SEED_ADMIN_USERNAME and SEED_ADMIN_PASSWORD must be set together".into(),
                })
            }
        };

        Ok(Self {
            host,
            port,
            database_url: Redacted::new(database_url),
            database_max_connections,
            cors_origins,
            request_timeout_secs,
            static_dir,
            jwt_secret: Redacted::new(jwt_secret),
            seed_admin,
        })
    }
}

fn parse_or<T>(value: Option<String>, var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match value {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
        }),
    }
}

fn parse_cors_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    let entries: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if entries.is_empty() || entries.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    entries
        .into_iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| ConfigError::Invalid {
                var: "CORS_ORIGINS",
                reason: format!("'{origin}': {e}"),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}
