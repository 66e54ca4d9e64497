use serde::{Deserialize, Serialize};
use std::fs;
use std::net::{Ipv4Addr, SocketAddr};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Port to bind the server to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Whether to bind to all interfaces (0.0.0.0) or just localhost
    #[serde(default = "default_bind_all")]
    pub bind_all: bool,

    /// Directory holding satellites.json and any other static files
    #[serde(default = "default_public_directory")]
    pub public_directory: String,

    /// URL prefix for static files (e.g. "public" -> /public/satellites.json)
    #[serde(default = "default_url_prefix")]
    pub url_prefix: String,

    /// Enable CORS for cross-origin requests
    #[serde(default = "default_enable_cors")]
    pub enable_cors: bool,
}

fn default_port() -> u16 {
    3030
}

fn default_bind_all() -> bool {
    false
}

fn default_public_directory() -> String {
    "public".to_string()
}

fn default_url_prefix() -> String {
    "public".to_string()
}

fn default_enable_cors() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind_all: default_bind_all(),
            public_directory: default_public_directory(),
            url_prefix: default_url_prefix(),
            enable_cors: default_enable_cors(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file: {}", e))?;

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        let ip = if self.bind_all {
            Ipv4Addr::UNSPECIFIED
        } else {
            Ipv4Addr::LOCALHOST
        };
        SocketAddr::from((ip, self.port))
    }

    /// Route prefix with exactly one leading slash
    pub fn mount_path(&self) -> String {
        format!("/{}", self.url_prefix.trim_matches('/'))
    }
}
