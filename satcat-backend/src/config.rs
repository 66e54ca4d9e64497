use std::path::Path;
use std::sync::OnceLock;

use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the host serving the static dataset
    #[serde(default = "default_source_url")]
    pub source_url: String,

    /// Fixed path of the dataset on that host
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,

    #[serde(default = "default_per_page")]
    pub per_page: usize,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_log_dir")]
    pub log_dir: String,

    /// Log files older than this are deleted
    #[serde(default = "default_log_retention_days")]
    pub log_retention_days: u64,
}

fn default_source_url() -> String {
    "http://127.0.0.1:3030".to_string()
}

fn default_dataset_path() -> String {
    "/public/satellites.json".to_string()
}

fn default_per_page() -> usize {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> String {
    "logs".to_string()
}

fn default_log_retention_days() -> u64 {
    3
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source_url: default_source_url(),
            dataset_path: default_dataset_path(),
            per_page: default_per_page(),
            log_level: default_log_level(),
            log_dir: default_log_dir(),
            log_retention_days: default_log_retention_days(),
        }
    }
}

impl CatalogConfig {
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: CatalogConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(config)
    }

    /// Full URL of the dataset: `source_url` joined with `dataset_path`.
    pub fn dataset_url(&self) -> String {
        format!(
            "{}/{}",
            self.source_url.trim_end_matches('/'),
            self.dataset_path.trim_start_matches('/')
        )
    }
}

pub static CONFIG: OnceLock<CatalogConfig> = OnceLock::new();

/// Load the process-wide configuration once.
///
/// With no explicit path the default `config.toml` is read if present,
/// otherwise built-in defaults apply. An explicit path must exist.
pub fn read_config(path: Option<&str>) -> anyhow::Result<&'static CatalogConfig> {
    if let Some(config) = CONFIG.get() {
        return Ok(config);
    }

    let config = match path {
        Some(path) => CatalogConfig::from_file(path)?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            CatalogConfig::from_file(DEFAULT_CONFIG_PATH)?
        }
        None => CatalogConfig::default(),
    };

    Ok(CONFIG.get_or_init(|| config))
}
