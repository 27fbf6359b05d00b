//! Environment-driven configuration.
//!
//! Every knob comes from an `APP_*` variable, with a `.env` file honored in
//! development. Nothing here touches the network; `socket_addr` only parses.

use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Deployment stage, steering defaults and log verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Everything the binary needs to boot, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub storage: StorageConfig,
    /// Pre-issued bearer tokens as comma-separated `token:user` pairs,
    /// handed unparsed to the account gateway.
    pub api_tokens: Option<String>,
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

impl AppConfig {
    /// Resolve configuration from the process environment.
    ///
    /// Variables: `APP_ENV`, `APP_HOST`, `APP_PORT`, `APP_LOG_LEVEL`,
    /// `APP_STORAGE`, `APP_API_TOKENS`. Missing variables fall back to
    /// development defaults; malformed ones fail loudly instead of being
    /// silently replaced.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port = var_or("APP_PORT", "3000")
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        Ok(Self {
            environment: AppEnvironment::parse(&var_or("APP_ENV", "development")),
            server: ServerConfig {
                host: var_or("APP_HOST", "127.0.0.1"),
                port,
            },
            telemetry: TelemetryConfig {
                log_level: var_or("APP_LOG_LEVEL", "info"),
            },
            storage: StorageConfig::parse(&var_or("APP_STORAGE", "memory"))?,
            api_tokens: env::var("APP_API_TOKENS").ok(),
        })
    }
}

/// HTTP bind address.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Resolve the bind address. `localhost` maps to the IPv4 loopback so a
    /// bare dev setup works without touching DNS; anything else must be a
    /// literal IP.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = if self.host.eq_ignore_ascii_case("localhost") {
            IpAddr::from([127, 0, 0, 1])
        } else {
            self.host
                .parse()
                .map_err(|source| ConfigError::InvalidHost { source })?
        };
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Log filter applied when `RUST_LOG` is unset.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where assessment records live: `memory` or `file:<path>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    Memory,
    File(PathBuf),
}

impl StorageConfig {
    fn parse(raw: &str) -> Result<Self, ConfigError> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("memory") {
            return Ok(Self::Memory);
        }
        match raw.strip_prefix("file:") {
            Some(path) if !path.is_empty() => Ok(Self::File(PathBuf::from(path))),
            _ => Err(ConfigError::InvalidStorage {
                value: raw.to_string(),
            }),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidStorage { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must be 'localhost' or a literal IP address")
            }
            ConfigError::InvalidStorage { value } => {
                write!(
                    f,
                    "APP_STORAGE must be 'memory' or 'file:<path>', got '{value}'"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    // Env vars are process-global; serialize the tests that touch them.
    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for key in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "APP_STORAGE",
            "APP_API_TOKENS",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.storage, StorageConfig::Memory);
        assert_eq!(config.api_tokens, None);
    }

    #[test]
    fn carries_the_api_token_pairs_through() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_API_TOKENS", "tok-a:user-a,tok-b:user-b");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(
            config.api_tokens.as_deref(),
            Some("tok-a:user-a,tok-b:user-b")
        );
        env::remove_var("APP_API_TOKENS");
    }

    #[test]
    fn rejects_a_non_numeric_port() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_PORT", "http");
        assert!(matches!(AppConfig::load(), Err(ConfigError::InvalidPort)));
        env::remove_var("APP_PORT");
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        env::remove_var("APP_HOST");
    }

    #[test]
    fn parses_file_storage_backend() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_STORAGE", "file:/tmp/assessments.json");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(
            config.storage,
            StorageConfig::File(PathBuf::from("/tmp/assessments.json"))
        );
        env::remove_var("APP_STORAGE");
    }

    #[test]
    fn rejects_unknown_storage_backend() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_STORAGE", "postgres");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidStorage { .. })
        ));
        env::remove_var("APP_STORAGE");
    }
}
