//! Configuration management
//! Load server settings from .env file / environment

use anyhow::{Context, Result};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_STATIC_DIR: &str = "build";
pub const INDEX_FILE: &str = "index.html";

/// Static file server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

/// Command-line values that take precedence over the environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub port: Option<u16>,
    pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Read PORT, HOST and STATIC_DIR (after loading .env if present)
    pub fn from_env(overrides: ConfigOverrides) -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok(), overrides)
    }

    /// Same as `from_env` with an injectable variable source.
    /// Overridden variables are never read, so a bad value there is ignored.
    pub fn from_lookup<F>(lookup: F, overrides: ConfigOverrides) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match (overrides.port, lookup("PORT")) {
            (Some(port), _) => port,
            (None, Some(raw)) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT: {}", raw))?,
            (None, None) => DEFAULT_PORT,
        };

        let host_raw = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host_raw
            .trim()
            .parse::<IpAddr>()
            .with_context(|| format!("Invalid HOST: {}", host_raw))?;

        let static_dir = overrides
            .static_dir
            .or_else(|| lookup("STATIC_DIR").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        Ok(Self {
            host,
            port,
            static_dir,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Document served for every unmatched route
    pub fn index_path(&self) -> PathBuf {
        self.static_dir.join(INDEX_FILE)
    }
}
