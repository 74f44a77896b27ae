use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

pub const DEFAULT_MONGO_URL: &str = "mongodb://localhost:27017/astro_consulting";
pub const DEFAULT_DB_NAME: &str = "astro_consulting";

/// Connection-string schemes understood by the store layer.
pub const SUPPORTED_SCHEMES: &[&str] = &["mongodb://", "mongodb+srv://", "file://", "memory://"];

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: None }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_db_name")]
    pub name: String,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            name: default_db_name(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { format: default_log_format() }
    }
}

fn default_host() -> String { "0.0.0.0".into() }
fn default_port() -> u16 { 8001 }
fn default_db_name() -> String { DEFAULT_DB_NAME.into() }
fn default_connect_timeout() -> u64 { 5 }
fn default_log_format() -> String { "compact".into() }

/// Path of the TOML file: `CONFIG_PATH` or `config.toml` in the working directory.
pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    load_from_str(&content)
}

pub fn load_from_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load config for the running process.
    ///
    /// A missing file yields defaults; a present file that fails to parse is an error.
    /// Environment variables are applied afterwards and never cause a failure by absence.
    pub fn load_and_validate() -> Result<Self> {
        let path = config_path();
        let mut cfg = if std::path::Path::new(&path).exists() {
            load_from_file(&path).map_err(|e| anyhow!("cannot parse {path}: {e}"))?
        } else {
            AppConfig::default()
        };
        cfg.apply_env(|key| std::env::var(key).ok());
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Overlay environment values; `lookup` returns `None` for unset keys.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("MONGO_URL").filter(|v| !v.trim().is_empty()) {
            self.database.url = url;
        }
        if let Some(name) = lookup("MONGO_DB_NAME").filter(|v| !v.trim().is_empty()) {
            self.database.name = name;
        }
        if let Some(host) = lookup("SERVER_HOST").filter(|v| !v.trim().is_empty()) {
            self.server.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT").and_then(|v| v.parse::<u16>().ok()) {
            self.server.port = port;
        }
        if let Some(w) = lookup("TOKIO_WORKER_THREADS").and_then(|v| v.parse::<usize>().ok()) {
            self.server.worker_threads = Some(w);
        }
        if let Some(fmt) = lookup("LOG_FORMAT").filter(|v| !v.trim().is_empty()) {
            self.logging.format = fmt;
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.database.normalize();
        self.database.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port 必须在 1..=65535 范围内"));
        }
        if self.worker_threads == Some(0) {
            self.worker_threads = None;
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    pub fn normalize(&mut self) {
        // 未配置连接串时回退到本地实例
        if self.url.trim().is_empty() {
            self.url = DEFAULT_MONGO_URL.to_string();
        }
        if self.name.trim().is_empty() {
            self.name = default_db_name();
        }
    }

    pub fn validate(&self) -> Result<()> {
        let lower = self.url.to_lowercase();
        if !SUPPORTED_SCHEMES.iter().any(|s| lower.starts_with(s)) {
            return Err(anyhow!(
                "database.url 必须以 {} 之一开头",
                SUPPORTED_SCHEMES.join(" / ")
            ));
        }
        if self.connect_timeout_secs == 0 {
            return Err(anyhow!("database.connect_timeout_secs 必须为正整数秒"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_without_file_or_env() {
        let mut cfg = AppConfig::default();
        cfg.apply_env(env_of(&[]));
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.database.url, DEFAULT_MONGO_URL);
        assert_eq!(cfg.database.name, "astro_consulting");
        assert_eq!(cfg.server.port, 8001);
        assert_eq!(cfg.logging.format, "compact");
    }

    #[test]
    fn env_overrides_file_values() {
        let mut cfg = load_from_str(
            r#"
            [server]
            host = "127.0.0.1"
            port = 9000

            [database]
            url = "mongodb://db:27017"
            "#,
        )
        .unwrap();
        cfg.apply_env(env_of(&[("MONGO_URL", "memory://"), ("SERVER_PORT", "8100")]));
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.database.url, "memory://");
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8100);
    }

    #[test]
    fn unparsable_env_values_are_ignored() {
        let mut cfg = AppConfig::default();
        cfg.apply_env(env_of(&[("SERVER_PORT", "not-a-port"), ("MONGO_URL", "  ")]));
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.port, 8001);
        assert_eq!(cfg.database.url, DEFAULT_MONGO_URL);
    }

    #[test]
    fn rejects_unknown_scheme() {
        let mut cfg = AppConfig::default();
        cfg.database.url = "postgres://localhost/x".into();
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn rejects_zero_port_and_timeout() {
        let mut cfg = AppConfig::default();
        cfg.server.port = 0;
        assert!(cfg.normalize_and_validate().is_err());

        let mut cfg = AppConfig::default();
        cfg.database.connect_timeout_secs = 0;
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(load_from_str("[server\nport = ").is_err());
    }
}
