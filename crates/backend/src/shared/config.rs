use contracts::domain::a001_product::ReorderHeuristics;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};

static CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub imports: ImportsConfig,
    #[serde(default)]
    pub heuristics: ReorderHeuristics,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// "*" allows any origin
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 3000,
            cors_origins: vec!["*".to_string()],
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Limits applied by POST /api/v1/imports/upload
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ImportsConfig {
    pub max_file_bytes: usize,
    pub max_rows: usize,
    pub max_cell_length: usize,
    pub preview_limit: usize,
}

impl Default for ImportsConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: 5 * 1024 * 1024,
            max_rows: 10_000,
            max_cell_length: 500,
            preview_limit: 10,
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
cors_origins = ["*"]

[imports]
max_file_bytes = 5242880
max_rows = 10000
max_cell_length = 500
preview_limit = 10

[heuristics]
low_stock_threshold = 5
low_stock_days_until_stockout = 3
default_days_until_stockout = 7
lead_time_days = 14
target_stock = 50
retail_markup = 2.5
seed_total_skus = 847
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Store the configuration for the lifetime of the process
pub fn initialize(config: Config) -> anyhow::Result<()> {
    CONFIG
        .set(config)
        .map_err(|_| anyhow::anyhow!("configuration already initialized"))
}

/// Active configuration; the embedded defaults until `initialize` runs
pub fn get() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.imports, ImportsConfig::default());
        assert_eq!(config.heuristics, ReorderHeuristics::default());
    }

    #[test]
    fn test_partial_config() {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 8000

            [heuristics]
            lead_time_days = 21
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.cors_origins, vec!["*"]);
        assert_eq!(config.imports.max_rows, 10_000);
        assert_eq!(config.heuristics.lead_time_days, 21);
        assert_eq!(config.heuristics.target_stock, 50);
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.socket_addr().to_string(), "0.0.0.0:3000");
    }
}
