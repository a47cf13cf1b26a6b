use std::io;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 5000, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }
}

/// Fixture loading at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for SeedConfig {
    fn default() -> Self { Self { enabled: true } }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `compact` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self { Self { format: default_log_format() } }
}

fn default_database_url() -> String { "sqlite::memory:".to_string() }
fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 1 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }
fn default_true() -> bool { true }
fn default_log_format() -> String { "compact".to_string() }

/// `CONFIG_PATH`, or `config.toml` in the working directory.
pub fn default_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let cfg: AppConfig = toml::from_str(content)?;
        Ok(cfg)
    }

    /// Build a config purely from environment variables, on top of defaults.
    pub fn from_env() -> Self {
        let mut cfg = AppConfig::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            cfg.server.port = port;
        }
        if let Some(w) = std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()) {
            cfg.server.worker_threads = Some(w);
        }
        if let Ok(flag) = std::env::var("SEED_ENABLED") {
            cfg.seed.enabled = !matches!(flag.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off");
        }
        if let Ok(format) = std::env::var("LOG_FORMAT") {
            cfg.logging.format = format;
        }
        cfg.database.normalize_from_env();
        cfg
    }

    /// Config file when present, environment otherwise; validated either way.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = AppConfig::load_or_env(&default_path())?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Only a missing file falls back to the environment. A file that exists
    /// but cannot be read or parsed is an error.
    pub fn load_or_env(path: &str) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => AppConfig::from_toml_str(&content).with_context(|| format!("invalid config file {path}")),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(AppConfig::from_env()),
            Err(e) => Err(anyhow!(e).context(format!("cannot read config file {path}"))),
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.database.normalize_from_env();
        self.database.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl DatabaseConfig {
    /// `DATABASE_URL` wins over the file value.
    pub fn normalize_from_env(&mut self) {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            if !url.trim().is_empty() {
                self.url = url;
            }
        }
        if self.url.trim().is_empty() {
            self.url = default_database_url();
        }
    }

    /// True for SQLite databases that live only as long as their connection.
    pub fn is_in_memory(&self) -> bool {
        let lower = self.url.to_lowercase();
        lower.starts_with("sqlite:") && (lower.contains(":memory:") || lower.contains("mode=memory"))
    }

    pub fn validate(&self) -> Result<()> {
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("sqlite:") || lower.starts_with("postgresql://") || lower.starts_with("postgres://")) {
            return Err(anyhow!("database.url must start with sqlite:, postgres:// or postgresql://"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}
