use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

const CONFIG_PATH: &str = "config.toml";

/// Application configuration, read from `config.toml` when present.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub secret: SecretConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SecretConfig {
    pub code: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            secret: SecretConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for SecretConfig {
    fn default() -> Self {
        Self {
            // The code the course frontend sends.
            code: "411L".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `config.toml`, falling back to defaults.
    /// The `PORT` environment variable overrides the configured port.
    pub fn load() -> anyhow::Result<Self> {
        let path = Path::new(CONFIG_PATH);
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", CONFIG_PATH))?;
            toml::from_str(&raw).with_context(|| format!("Failed to parse {}", CONFIG_PATH))?
        } else {
            Self::default()
        };

        if let Ok(port) = std::env::var("PORT") {
            config.server.port = port.parse().context("PORT must be a valid port number")?;
        }

        Ok(config)
    }
}
