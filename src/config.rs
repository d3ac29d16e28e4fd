use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub window: WindowConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the meal lookup service, e.g. "http://localhost:8080/api".
    /// The MEALDECK_API_URL environment variable takes precedence.
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            window: WindowConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api".to_string(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 640.0,
        }
    }
}

pub fn load() -> Config {
    let mut config = read_file();
    if let Some(url) = env_api_url() {
        config.api.base_url = url;
    }
    config
}

fn read_file() -> Config {
    let path = config_path();
    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::warn!("Failed to parse config: {}, using defaults", e);
                Config::default()
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read config file: {}, using defaults", e);
            Config::default()
        }
    }
}

fn env_api_url() -> Option<String> {
    std::env::var("MEALDECK_API_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
}

fn config_path() -> PathBuf {
    // ~/.config/ (XDG convention) on every platform
    dirs::home_dir()
        .expect("Could not determine home directory")
        .join(".config")
        .join("mealdeck")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8080/api");
        assert_eq!(config.window.width, 900.0);
        assert_eq!(config.window.height, 640.0);
    }

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
            [api]
            base_url = "https://meals.example.com/api"

            [window]
            width = 1200.0
            height = 800.0
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://meals.example.com/api");
        assert_eq!(config.window.width, 1200.0);
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: Config = toml::from_str(
            r#"
            [api]
            base_url = "http://10.0.0.5:9000/api"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://10.0.0.5:9000/api");
        assert_eq!(config.window.width, 900.0);
    }
}
