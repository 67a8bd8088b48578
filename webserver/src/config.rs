//! Command line and environment configuration
//!
//! Every flag can also be set through a `COURIER_*` environment variable; a
//! `.env` file in the working directory is loaded before parsing.

use clap::{Parser, ValueEnum};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Record store backend selected at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreBackend {
    /// Process-lifetime maps
    Memory,
    /// sled database under `--data-dir`
    Sled,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "courier-webserver")]
#[command(about = "Courier site backend: contact, pickup, quote and tracking API")]
pub struct ServerConfig {
    /// Address to bind the HTTP server to
    #[arg(long, env = "COURIER_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port for the HTTP server
    #[arg(long, env = "COURIER_PORT", default_value = "5000")]
    pub port: u16,

    /// Record store backend
    #[arg(long, env = "COURIER_STORE", value_enum, default_value = "memory")]
    pub store: StoreBackend,

    /// Database directory for the sled backend
    #[arg(long, env = "COURIER_DATA_DIR", default_value = "./data")]
    pub data_dir: PathBuf,

    /// Pre-built site bundle served for non-API paths
    #[arg(long, env = "COURIER_STATIC_DIR", default_value = "./static")]
    pub static_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "COURIER_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Skip loading the sample tracking records
    #[arg(long, env = "COURIER_NO_SEED")]
    pub no_seed: bool,
}

impl ServerConfig {
    /// Load `.env` (if present) then parse arguments and environment
    pub fn load() -> Self {
        let _ = dotenvy::dotenv();
        Self::parse()
    }

    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::try_parse_from(["courier-webserver"]).unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:5000".parse().unwrap());
        assert_eq!(config.store, StoreBackend::Memory);
        assert_eq!(config.log_level, "info");
        assert!(!config.no_seed);
    }

    #[test]
    fn test_sled_backend_flags() {
        let config = ServerConfig::try_parse_from([
            "courier-webserver",
            "--store",
            "sled",
            "--data-dir",
            "/var/lib/courier",
            "--port",
            "8080",
            "--no-seed",
        ])
        .unwrap();

        assert_eq!(config.store, StoreBackend::Sled);
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/courier"));
        assert_eq!(config.port, 8080);
        assert!(config.no_seed);
    }

    #[test]
    fn test_rejects_unknown_backend() {
        assert!(ServerConfig::try_parse_from(["courier-webserver", "--store", "postgres"]).is_err());
    }
}
