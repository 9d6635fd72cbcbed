use crate::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "shelf.json";
const DEFAULT_MIN_STOCK: u32 = 10;
const DEFAULT_DASHBOARD_LIMIT: usize = 5;

/// Configuration for shelf, stored in `<data dir>/shelf.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Minimum stock given to new products when none is supplied
    #[serde(default = "default_min_stock")]
    pub default_min_stock: u32,

    /// How many recent and low-stock products the dashboard shows
    #[serde(default = "default_dashboard_limit")]
    pub dashboard_limit: usize,
}

fn default_min_stock() -> u32 {
    DEFAULT_MIN_STOCK
}

fn default_dashboard_limit() -> usize {
    DEFAULT_DASHBOARD_LIMIT
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            default_min_stock: DEFAULT_MIN_STOCK,
            dashboard_limit: DEFAULT_DASHBOARD_LIMIT,
        }
    }
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfError::Io)?;
        let config: ShelfConfig =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShelfError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShelfError::Serialization)?;
        fs::write(config_path, content).map_err(ShelfError::Io)?;
        Ok(())
    }

    /// Names accepted by [`get`](Self::get) and [`set`](Self::set).
    pub const KEYS: [&'static str; 2] = ["default-min-stock", "dashboard-limit"];

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "default-min-stock" => Some(self.default_min_stock.to_string()),
            "dashboard-limit" => Some(self.dashboard_limit.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "default-min-stock" => {
                self.default_min_stock = value
                    .parse()
                    .map_err(|_| format!("{} must be a non-negative integer", key))?;
            }
            "dashboard-limit" => {
                self.dashboard_limit = value
                    .parse()
                    .map_err(|_| format!("{} must be a non-negative integer", key))?;
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ShelfConfig::default();
        assert_eq!(config.default_min_stock, 10);
        assert_eq!(config.dashboard_limit, 5);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = ShelfConfig::load(dir.path()).unwrap();
        assert_eq!(config, ShelfConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let config = ShelfConfig {
            default_min_stock: 3,
            dashboard_limit: 10,
        };
        config.save(dir.path().join("nested")).unwrap();

        let loaded = ShelfConfig::load(dir.path().join("nested")).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"dashboard_limit": 2}"#).unwrap();

        let loaded = ShelfConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.dashboard_limit, 2);
        assert_eq!(loaded.default_min_stock, 10);
    }

    #[test]
    fn test_get_and_set_by_key() {
        let mut config = ShelfConfig::default();
        config.set("default-min-stock", "4").unwrap();
        assert_eq!(config.get("default-min-stock").as_deref(), Some("4"));
        assert!(config.set("dashboard-limit", "-1").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config.get("colour"), None);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "min_stock = 3").unwrap();
        assert!(matches!(
            ShelfConfig::load(dir.path()),
            Err(ShelfError::Serialization(_))
        ));
    }
}
