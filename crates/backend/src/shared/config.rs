use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    /// Perks loaded into the store at startup.
    #[serde(default)]
    pub seed: Vec<SeedPerk>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Начальная запись перка из config.toml
#[derive(Debug, Deserialize, Clone)]
pub struct SeedPerk {
    /// Если не задан — генерируется UUID
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub category: String,
    pub discount_percent: Option<f64>,
    pub merchant: Option<String>,
    pub description: Option<String>,
    /// Если не задан — текущее время
    pub created_at: Option<DateTime<Utc>>,
    /// Перк используется где-то ещё; удаление запрещено
    #[serde(default)]
    pub locked: bool,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 3000

[[seed]]
id = "42"
title = "Coffee"
category = "food"
discount_percent = 20
merchant = "Cafe X"
description = "Free refill with every cup of filter coffee."
created_at = "2024-01-05T00:00:00Z"

[[seed]]
title = "Laptop accessories"
category = "tech"
discount_percent = 15
merchant = "Gadget Hub"
created_at = "2024-02-11T09:30:00Z"

[[seed]]
title = "Weekend getaway"
category = "travel"
discount_percent = 10
merchant = "Trip & Co"
description = "Applies to two-night stays booked on the partner site."
created_at = "2024-03-02T12:00:00Z"

[[seed]]
title = "Gym membership"
category = "fitness"
merchant = "Iron Temple"
description = "First month free for new members."
created_at = "2024-04-20T08:00:00Z"
locked = true
"#;

/// Parse configuration from TOML text
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(contents)?)
}

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
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.seed.len(), 4);
        assert_eq!(config.seed[0].id.as_deref(), Some("42"));
        assert_eq!(config.seed[0].discount_percent, Some(20.0));
        assert!(config.seed[3].locked);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.seed.is_empty());
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(parse_config("[server]\nport = \"abc\"").is_err());
    }
}
